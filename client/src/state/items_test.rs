use super::*;
use crate::net::api::{ApiError, ITEMS_ENDPOINT, item_endpoint};
use futures::FutureExt;
use futures::executor::block_on;
use std::cell::RefCell;

impl ItemListStore for RefCell<ItemListState> {
    fn apply(&self, f: impl FnOnce(&mut ItemListState)) {
        f(&mut self.borrow_mut());
    }
}

/// One request as the backend would see it.
#[derive(Clone, Debug, PartialEq)]
struct Call {
    method: &'static str,
    path: String,
    body: Option<serde_json::Value>,
}

impl Call {
    fn get() -> Self {
        Self { method: "GET", path: ITEMS_ENDPOINT.to_owned(), body: None }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum ListMode {
    Respond,
    Fail,
    Hang,
}

/// Records every call and answers GET from a fixed list.
struct RecordingApi {
    calls: RefCell<Vec<Call>>,
    items: RefCell<Vec<Item>>,
    list_mode: ListMode,
    fail_mutations: bool,
}

impl RecordingApi {
    fn new(items: Vec<Item>) -> Self {
        Self { calls: RefCell::new(Vec::new()), items: RefCell::new(items), list_mode: ListMode::Respond, fail_mutations: false }
    }

    fn with_list_mode(mut self, mode: ListMode) -> Self {
        self.list_mode = mode;
        self
    }

    fn failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn mutation_result(&self) -> Result<(), ApiError> {
        if self.fail_mutations { Err(ApiError::Status(500)) } else { Ok(()) }
    }
}

impl ItemsApi for RecordingApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.calls.borrow_mut().push(Call::get());
        match self.list_mode {
            ListMode::Respond => Ok(self.items.borrow().clone()),
            ListMode::Fail => Err(ApiError::Transport("connection refused".into())),
            ListMode::Hang => futures::future::pending::<Result<Vec<Item>, ApiError>>().await,
        }
    }

    async fn create_item(&self, item: &NewItem) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call {
            method: "POST",
            path: ITEMS_ENDPOINT.to_owned(),
            body: Some(serde_json::to_value(item).unwrap()),
        });
        self.mutation_result()
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call { method: "DELETE", path: item_endpoint(id), body: None });
        self.mutation_result()
    }
}

fn item(id: i64, name: &str) -> Item {
    Item { id: ItemId::from(id), name: name.to_owned() }
}

fn two_items() -> Vec<Item> {
    vec![item(1, "a"), item(2, "b")]
}

// =============================================================
// ItemListState
// =============================================================

#[test]
fn state_default_is_empty_and_idle() {
    let state = ItemListState::default();
    assert!(state.items.is_empty());
    assert!(state.draft_name.is_empty());
    assert!(!state.is_loading);
}

#[test]
fn rows_hidden_while_loading() {
    let state = ItemListState { items: two_items(), draft_name: String::new(), is_loading: true };
    assert!(state.rows().is_none());
}

#[test]
fn rows_visible_when_idle() {
    let state = ItemListState { items: two_items(), draft_name: String::new(), is_loading: false };
    assert_eq!(state.rows().map(<[Item]>::len), Some(2));
}

#[test]
fn can_submit_rejects_blank_names() {
    assert!(!can_submit(""));
    assert!(!can_submit("  \t"));
    assert!(can_submit(" widget "));
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_replaces_items_in_server_order() {
    let api = RecordingApi::new(two_items());
    let store = RefCell::new(ItemListState::default());

    block_on(refresh(&api, &store));

    let state = store.borrow();
    let names: Vec<&str> = state.rows().unwrap().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert!(!state.is_loading);
    assert_eq!(api.calls(), vec![Call::get()]);
}

#[test]
fn refresh_discards_previous_items() {
    let api = RecordingApi::new(vec![item(9, "fresh")]);
    let store = RefCell::new(ItemListState { items: two_items(), ..ItemListState::default() });

    block_on(refresh(&api, &store));

    assert_eq!(store.borrow().items, vec![item(9, "fresh")]);
}

#[test]
fn loading_shown_with_no_rows_before_first_response() {
    let api = RecordingApi::new(two_items()).with_list_mode(ListMode::Hang);
    let store = RefCell::new(ItemListState::default());

    assert!(refresh(&api, &store).now_or_never().is_none());

    let state = store.borrow();
    assert!(state.is_loading);
    assert!(state.rows().is_none());
    assert!(state.items.is_empty());
}

#[test]
fn unresolved_refresh_keeps_loading_indefinitely() {
    let api = RecordingApi::new(two_items()).with_list_mode(ListMode::Hang);
    let store = RefCell::new(ItemListState::default());

    let mut pending = Box::pin(refresh(&api, &store));
    for _ in 0..3 {
        assert!((&mut pending).now_or_never().is_none());
    }
    assert!(store.borrow().is_loading);
}

#[test]
fn failed_refresh_leaves_loading_and_items_unchanged() {
    let api = RecordingApi::new(Vec::new()).with_list_mode(ListMode::Fail);
    let store = RefCell::new(ItemListState { items: two_items(), ..ItemListState::default() });

    block_on(refresh(&api, &store));

    let state = store.borrow();
    assert!(state.is_loading);
    assert_eq!(state.items, two_items());
}

// =============================================================
// create
// =============================================================

#[test]
fn create_blank_name_is_noop() {
    let api = RecordingApi::new(two_items());
    let store = RefCell::new(ItemListState { draft_name: "  ".into(), ..ItemListState::default() });

    block_on(create(&api, &store, "  "));

    assert!(api.calls().is_empty());
    assert_eq!(store.borrow().draft_name, "  ");
}

#[test]
fn create_posts_then_refreshes_and_clears_draft() {
    let api = RecordingApi::new(two_items());
    let store = RefCell::new(ItemListState { draft_name: "widget".into(), ..ItemListState::default() });

    block_on(create(&api, &store, "widget"));

    assert_eq!(
        api.calls(),
        vec![
            Call {
                method: "POST",
                path: "/api/items".into(),
                body: Some(serde_json::json!({ "name": "widget" })),
            },
            Call::get(),
        ]
    );
    let state = store.borrow();
    assert!(state.draft_name.is_empty());
    assert_eq!(state.items, two_items());
}

#[test]
fn create_sends_name_as_typed() {
    let api = RecordingApi::new(Vec::new());
    let store = RefCell::new(ItemListState::default());

    block_on(create(&api, &store, " padded "));

    assert_eq!(api.calls()[0].body, Some(serde_json::json!({ "name": " padded " })));
}

#[test]
fn create_failure_still_clears_draft_and_refreshes() {
    let api = RecordingApi::new(two_items()).failing_mutations();
    let store = RefCell::new(ItemListState { draft_name: "widget".into(), ..ItemListState::default() });

    block_on(create(&api, &store, "widget"));

    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], Call::get());
    assert!(store.borrow().draft_name.is_empty());
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_deletes_then_refreshes() {
    let api = RecordingApi::new(vec![item(1, "a")]);
    let store = RefCell::new(ItemListState { items: two_items(), ..ItemListState::default() });

    block_on(remove(&api, &store, &ItemId::from(2_i64)));

    assert_eq!(
        api.calls(),
        vec![Call { method: "DELETE", path: "/api/items/2".into(), body: None }, Call::get()]
    );
    assert_eq!(store.borrow().items, vec![item(1, "a")]);
}

#[test]
fn remove_failure_still_refreshes() {
    let api = RecordingApi::new(two_items()).failing_mutations();
    let store = RefCell::new(ItemListState::default());

    block_on(remove(&api, &store, &ItemId::from(5_i64)));

    assert_eq!(api.calls().len(), 2);
    assert_eq!(store.borrow().items, two_items());
}

#[test]
fn remove_text_id_targets_single_segment() {
    let api = RecordingApi::new(Vec::new());
    let store = RefCell::new(ItemListState::default());

    block_on(remove(&api, &store, &ItemId::Text("a/b".into())));

    assert_eq!(api.calls()[0].path, "/api/items/a%2Fb");
}

#[test]
fn refresh_loads_items_with_non_i64_ids() {
    let items: Vec<Item> =
        serde_json::from_str(r#"[{"id":18446744073709551615,"name":"big"},{"id":2.5,"name":"frac"}]"#).unwrap();
    let api = RecordingApi::new(items.clone());
    let store = RefCell::new(ItemListState::default());

    block_on(refresh(&api, &store));

    let state = store.borrow();
    assert!(!state.is_loading);
    assert_eq!(state.items, items);
}
