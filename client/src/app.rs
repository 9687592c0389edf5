//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::items::ItemsPage;

/// Root application component. The whole app is the single item list page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Items"/>
        <main class="app">
            <ItemsPage/>
        </main>
    }
}
