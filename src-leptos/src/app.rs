//! Root App component

use crate::pages::DropdownDemo;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;

/// Root App component. Hosts the demo page directly; there is no routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <div class="app-container">
            <DropdownDemo />
        </div>
    }
}
