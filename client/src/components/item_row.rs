//! One row of the item list: name plus a delete button.

use leptos::prelude::*;

use crate::net::types::{Item, ItemId};

#[component]
pub fn ItemRow(item: Item, on_delete: Callback<ItemId>) -> impl IntoView {
    let Item { id, name } = item;

    view! {
        <li class="item-row">
            <span class="item-row__name">{name}</span>
            <button class="btn item-row__delete" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        </li>
    }
}
