//! Demo page hosting a searchable DropdownSelect

use crate::components::DropdownSelect;
use crate::config::load_demo_config;
use leptos::prelude::*;
use leptos_meta::Title;

const VERSION: &str = env!("GIT_VERSION");

#[component]
pub fn DropdownDemo() -> impl IntoView {
    let config = load_demo_config();
    let options = RwSignal::new(config.options);
    let last_selected = RwSignal::new(Option::<String>::None);

    let on_change = move |value: String| {
        log::info!("Selected color: {}", value);
        last_selected.set(Some(value));
    };

    view! {
        <Title text=config.title.clone() />
        <main class="demo-page">
            <h1 class="demo-title">{config.title}</h1>
            <p class="demo-subtitle">"Technologies used"</p>
            <ul class="demo-tech">
                <li>"Rust"</li>
                <li>"Leptos"</li>
                <li>"WebAssembly"</li>
            </ul>

            <DropdownSelect
                label=config.dropdown.label
                options=options
                on_change=Callback::new(on_change)
                is_searchable=config.dropdown.searchable
                disabled=config.dropdown.disabled
            />

            <p class="demo-selection">
                {move || match last_selected.get() {
                    Some(value) => format!("Last selected value: {}", value),
                    None => "Nothing selected yet".to_string(),
                }}
            </p>

            <footer class="demo-footer">{format!("v{}", VERSION)}</footer>
        </main>
    }
}
