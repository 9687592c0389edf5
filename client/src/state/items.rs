//! Item list state and the three procedures that drive it.
//!
//! DESIGN
//! ======
//! The server response is the only source of truth. `refresh` replaces the
//! whole collection; `create` and `remove` never touch `items` directly and
//! instead re-fetch once their request settles, success or not.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and otherwise dropped. A failed `refresh` leaves the
//! loading flag set and the previous items in place; a failed mutation still
//! proceeds to `refresh`. There is no retry and no timeout.

use leptos::prelude::*;

use crate::net::api::ItemsApi;
use crate::net::types::{Item, ItemId, NewItem};

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

/// In-memory state for the item list page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemListState {
    pub items: Vec<Item>,
    pub draft_name: String,
    pub is_loading: bool,
}

impl ItemListState {
    /// Rows to render, or `None` while the loading indicator is shown.
    pub fn rows(&self) -> Option<&[Item]> {
        if self.is_loading { None } else { Some(&self.items) }
    }
}

/// Whether a draft name is worth submitting.
pub fn can_submit(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Write access to an `ItemListState` held somewhere else.
pub trait ItemListStore {
    /// Apply `f` to the state. Implementations silently skip the write when
    /// the state no longer exists.
    fn apply(&self, f: impl FnOnce(&mut ItemListState));
}

impl ItemListStore for RwSignal<ItemListState> {
    fn apply(&self, f: impl FnOnce(&mut ItemListState)) {
        // The page may have unmounted while a request was in flight.
        let _ = self.try_update(f);
    }
}

/// Replace the item collection with the server's current list.
pub async fn refresh<A: ItemsApi, S: ItemListStore>(api: &A, store: &S) {
    store.apply(|s| s.is_loading = true);
    match api.list_items().await {
        Ok(items) => {
            log::debug!("loaded {} items", items.len());
            store.apply(|s| {
                s.items = items;
                s.is_loading = false;
            });
        }
        Err(e) => log::warn!("item refresh failed: {e}"),
    }
}

/// Create an item named `name`, then clear the draft and refresh.
/// Whitespace-only names are ignored without a request.
pub async fn create<A: ItemsApi, S: ItemListStore>(api: &A, store: &S, name: &str) {
    if !can_submit(name) {
        return;
    }
    let body = NewItem { name: name.to_owned() };
    if let Err(e) = api.create_item(&body).await {
        log::warn!("item create failed: {e}");
    }
    store.apply(|s| s.draft_name.clear());
    refresh(api, store).await;
}

/// Delete the item with `id`, then refresh.
pub async fn remove<A: ItemsApi, S: ItemListStore>(api: &A, store: &S, id: &ItemId) {
    if let Err(e) = api.delete_item(id).await {
        log::warn!("item delete failed for {id}: {e}");
    }
    refresh(api, store).await;
}
