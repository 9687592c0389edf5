//! Item list page: creation form plus the current item list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads the list once on mount and re-fetches
//! after every create or delete; see `state::items` for the procedures.

use std::future::Future;

use leptos::prelude::*;

use crate::components::item_row::ItemRow;
use crate::net::api::HttpItemsApi;
use crate::net::types::{Item, ItemId};
use crate::state::items::{self, ItemListState};

/// Run a request on the browser event loop. Native builds have no HTTP
/// stack, so the future is dropped unpolled.
fn spawn_request(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Item list page: "Add" form, loading indicator, and one row per item.
#[component]
pub fn ItemsPage() -> impl IntoView {
    let list = RwSignal::new(ItemListState::default());
    let api = HttpItemsApi;

    spawn_request(async move { items::refresh(&api, &list).await });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = list.with_untracked(|s| s.draft_name.clone());
        spawn_request(async move { items::create(&api, &list, &name).await });
    };

    let on_delete = Callback::new(move |id: ItemId| {
        spawn_request(async move { items::remove(&api, &list, &id).await });
    });

    // Typing into the draft must not rebuild the rows.
    let rows = Memo::new(move |_| list.with(|s| s.rows().map(<[Item]>::to_vec)));

    view! {
        <div class="items-page">
            <h1>"Items"</h1>
            <form class="items-page__form" on:submit=on_submit>
                <input
                    class="items-page__input"
                    placeholder="New item name"
                    prop:value=move || list.with(|s| s.draft_name.clone())
                    on:input=move |ev| list.update(|s| s.draft_name = event_target_value(&ev))
                />
                <button class="btn items-page__add" type="submit">"Add"</button>
            </form>
            {move || match rows.get() {
                None => view! { <p class="items-page__loading">"Loading..."</p> }.into_any(),
                Some(visible) => {
                    view! {
                        <ul class="items-page__list">
                            {visible
                                .into_iter()
                                .map(|item| view! { <ItemRow item on_delete/> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
