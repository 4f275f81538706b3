//! Searchable dropdown select component
//!
//! All transitions go through [`DropdownState::reduce`]; this component only
//! turns DOM events into [`DropdownEvent`]s and carries out the returned
//! [`Command`]s.

use dropdown_types::{
    list_style, Command, DropdownConfig, DropdownEvent, DropdownState, FocusTarget, SelectOption,
    DEFAULT_LABEL,
};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn DropdownSelect(
    /// Option values and labels
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Called with the value of every confirmed selection
    #[prop(into)]
    on_change: Callback<String>,
    /// Whether the dropdown can be interacted with
    #[prop(optional)]
    disabled: bool,
    /// Whether the options can be searched
    #[prop(optional)]
    is_searchable: bool,
    /// Text to display when nothing is selected
    #[prop(into, default = DEFAULT_LABEL.to_string())]
    label: String,
) -> impl IntoView {
    let config = StoredValue::new(
        DropdownConfig::new().with_label(label).searchable(is_searchable).disabled(disabled),
    );
    let state = RwSignal::new(DropdownState::new());
    let pending_focus = RwSignal::new(Option::<FocusTarget>::None);

    let root_ref = NodeRef::<html::Div>::new();
    let toggle_ref = NodeRef::<html::Button>::new();
    let search_ref = NodeRef::<html::Input>::new();
    let list_ref = NodeRef::<html::Ul>::new();

    let dispatch = Callback::new(move |event: DropdownEvent| {
        let current = state.get_untracked();
        let transition = options.with_untracked(|opts| {
            config.with_value(|cfg| current.reduce(event.clone(), cfg, opts))
        });
        if transition.ignored {
            log::debug!("DropdownSelect ignored {:?}", event);
            return;
        }

        state.set(transition.state);
        for command in transition.commands {
            match command {
                Command::Focus(target) => pending_focus.set(Some(target)),
                Command::Change(value) => {
                    log::debug!("DropdownSelect changed to {}", value);
                    on_change.run(value);
                }
            }
        }
    });

    // Focus is applied once the target is attached; NodeRef reads are tracked,
    // so this reruns when the popup mounts.
    Effect::new(move |_| {
        let Some(target) = pending_focus.get() else {
            return;
        };
        let element: Option<web_sys::HtmlElement> = match target {
            FocusTarget::Toggle => toggle_ref.get().map(Into::into),
            FocusTarget::Search => search_ref.get().map(Into::into),
            FocusTarget::List => list_ref.get().map(Into::into),
        };
        let Some(element) = element.filter(|el| el.is_connected()) else {
            return;
        };
        if let Err(err) = element.focus() {
            log::warn!("Failed to focus {:?}: {:?}", target, err);
        }
        pending_focus.set(None);
    });

    let is_open = move || state.with(DropdownState::is_open);

    let visible = Memo::new(move |_| {
        options.with(|opts| {
            state.with(|s| s.visible_options(opts).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    let display_label = move || {
        options.with(|opts| {
            config.with_value(|cfg| state.with(|s| s.display_label(opts, &cfg.label).to_owned()))
        })
    };

    let on_focus_out = move |ev: web_sys::FocusEvent| {
        if !focus_stays_within(&ev, root_ref.get_untracked()) {
            dispatch.run(DropdownEvent::Blur);
        }
    };

    // Keys only steer the open popup; a closed toggle keeps its native Enter/Space.
    let on_key_down = move |ev: web_sys::KeyboardEvent| {
        if !state.with_untracked(DropdownState::is_open) {
            return;
        }
        let Some(event) = DropdownEvent::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        dispatch.run(event);
    };

    view! {
        <div
            class="dropdown-select"
            node_ref=root_ref
            on:focusout=on_focus_out
            on:keydown=on_key_down
        >
            <button
                type="button"
                class="select-button"
                node_ref=toggle_ref
                disabled=disabled
                aria-haspopup="listbox"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| dispatch.run(DropdownEvent::Toggle)
            >
                <span class="select-label">{display_label}</span>
                <span class="select-arrow">{move || if is_open() { "▲" } else { "▼" }}</span>
            </button>

            <Show when=is_open>
                <div class="select-dropdown">
                    {is_searchable.then(|| view! {
                        <div class="select-search">
                            <input
                                type="text"
                                node_ref=search_ref
                                prop:value=move || state.with(|s| s.search_text().to_owned())
                                on:input=move |ev| {
                                    dispatch.run(DropdownEvent::Search(event_target_value(&ev)));
                                }
                            />
                        </div>
                    })}
                    <ul
                        class="select-options"
                        role="listbox"
                        tabindex="-1"
                        node_ref=list_ref
                        style=move || list_style(visible.with(Vec::len))
                    >
                        <For
                            each=move || visible.get()
                            key=|option| option.value.clone()
                            children=move |option| view! {
                                <OptionRow option=option state=state dispatch=dispatch />
                            }
                        />
                    </ul>
                </div>
            </Show>
        </div>
    }
}

/// A single entry of the open option list.
#[component]
fn OptionRow(
    option: SelectOption,
    state: RwSignal<DropdownState>,
    dispatch: Callback<DropdownEvent>,
) -> impl IntoView {
    let SelectOption { value, label } = option;

    let selected = {
        let value = value.clone();
        Memo::new(move |_| state.with(|s| s.selected_value() == Some(value.as_str())))
    };
    let highlighted = {
        let value = value.clone();
        Memo::new(move |_| state.with(|s| s.highlighted() == Some(value.as_str())))
    };

    view! {
        <li
            class="select-option"
            class:selected=move || selected.get()
            class:highlighted=move || highlighted.get()
            role="option"
            aria-selected=move || selected.get().to_string()
            on:click=move |_| dispatch.run(DropdownEvent::Select(value.clone()))
        >
            {label}
        </li>
    }
}

/// Whether focus is moving to another element of the same dropdown.
fn focus_stays_within(ev: &web_sys::FocusEvent, root: Option<web_sys::HtmlDivElement>) -> bool {
    let Some(root) = root else {
        return false;
    };
    ev.related_target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}
