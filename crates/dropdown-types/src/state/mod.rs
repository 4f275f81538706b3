//! Widget state and its reducer.
//!
//! The dropdown is a two-state machine over `is_open`:
//!
//! ```text
//!            Toggle (not disabled)
//!   Closed ─────────────────────────▶ Open
//!     ▲                                │
//!     └──── Select / Blur / Close / ───┘
//!                 Toggle
//! ```
//!
//! [`DropdownState::reduce`] is pure: it consumes the current state and an
//! event and returns the next state together with the [`Command`]s the caller
//! has to perform (focus moves, change notifications). The list of visible
//! options is never stored; it is derived from the search text on demand.

mod event;


pub use event::{Command, DropdownEvent, FocusTarget};

use crate::models::{filter_options, DropdownConfig, SelectOption};

/// Interactive state of one dropdown instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    is_open: bool,
    selected_value: Option<String>,
    search_text: String,
    highlighted: Option<String>,
}

/// Result of feeding one event to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DropdownState,
    pub commands: Vec<Command>,
    /// The event did not apply to the state it was fed to
    pub ignored: bool,
}

impl Transition {
    fn to(state: DropdownState, commands: Vec<Command>) -> Self {
        Self { state, commands, ignored: false }
    }

    fn ignored(state: DropdownState) -> Self {
        Self { state, commands: Vec::new(), ignored: true }
    }
}

impl DropdownState {
    /// Fresh state on mount: closed, nothing selected, empty search.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Value of the option under the keyboard cursor.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Options matching the current search text, in source order.
    pub fn visible_options<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        filter_options(options, &self.search_text)
    }

    /// The option matching the selected value, if it is still offered.
    pub fn selected_option<'a>(&self, options: &'a [SelectOption]) -> Option<&'a SelectOption> {
        let selected = self.selected_value.as_deref()?;
        options.iter().find(|option| option.value == selected)
    }

    /// Text for the toggle button: the selected option's label, else `fallback`.
    pub fn display_label<'a>(&self, options: &'a [SelectOption], fallback: &'a str) -> &'a str {
        self.selected_option(options).map_or(fallback, |option| option.label.as_str())
    }

    /// Compute the state that follows `event`.
    pub fn reduce(
        self,
        event: DropdownEvent,
        config: &DropdownConfig,
        options: &[SelectOption],
    ) -> Transition {
        match event {
            DropdownEvent::Toggle if self.is_open => Transition::to(self.closed(), Vec::new()),
            DropdownEvent::Toggle if config.disabled => Transition::ignored(self),
            DropdownEvent::Toggle => self.opened(config, options),
            DropdownEvent::Search(text) if self.is_open && config.searchable => {
                Transition::to(self.searched(text, options), Vec::new())
            }
            DropdownEvent::Select(value) if self.is_open => self.select(value, options),
            DropdownEvent::Blur if self.is_open => Transition::to(self.closed(), Vec::new()),
            DropdownEvent::HighlightNext if self.is_open => self.step_highlight(options, true),
            DropdownEvent::HighlightPrev if self.is_open => self.step_highlight(options, false),
            DropdownEvent::ConfirmHighlighted if self.is_open => self.confirm_highlighted(options),
            DropdownEvent::Close if self.is_open => {
                Transition::to(self.closed(), vec![Command::Focus(FocusTarget::Toggle)])
            }
            _ => Transition::ignored(self),
        }
    }

    fn opened(mut self, config: &DropdownConfig, options: &[SelectOption]) -> Transition {
        self.is_open = true;
        self.search_text.clear();
        self.highlighted = self.selected_option(options).map(|option| option.value.clone());

        let focus = if config.searchable { FocusTarget::Search } else { FocusTarget::List };
        Transition::to(self, vec![Command::Focus(focus)])
    }

    fn closed(mut self) -> Self {
        self.is_open = false;
        self.search_text.clear();
        self.highlighted = None;
        self
    }

    fn searched(mut self, text: String, options: &[SelectOption]) -> Self {
        self.search_text = text;
        self.highlighted =
            self.visible_options(options).first().map(|option| option.value.clone());
        self
    }

    fn select(mut self, value: String, options: &[SelectOption]) -> Transition {
        if !options.iter().any(|option| option.value == value) {
            return Transition::ignored(self);
        }
        self.selected_value = Some(value.clone());
        Transition::to(
            self.closed(),
            vec![Command::Change(value), Command::Focus(FocusTarget::Toggle)],
        )
    }

    fn step_highlight(mut self, options: &[SelectOption], forward: bool) -> Transition {
        let visible = self.visible_options(options);
        let len = visible.len();
        if len == 0 {
            return Transition::ignored(self);
        }

        let current = self
            .highlighted
            .as_deref()
            .and_then(|value| visible.iter().position(|option| option.value == value));
        let next = match (current, forward) {
            (Some(index), true) => (index + 1) % len,
            (Some(index), false) => (index + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        self.highlighted = visible.get(next).map(|option| option.value.clone());
        Transition::to(self, Vec::new())
    }

    fn confirm_highlighted(self, options: &[SelectOption]) -> Transition {
        let target = self.highlighted.as_deref().and_then(|value| {
            self.visible_options(options)
                .into_iter()
                .find(|option| option.value == value)
                .map(|option| option.value.clone())
        });
        match target {
            Some(value) => self.select(value, options),
            None => Transition::ignored(self),
        }
    }
}
