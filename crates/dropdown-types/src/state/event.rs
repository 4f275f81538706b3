//! Inputs and outputs of the reducer.

/// A discrete user interaction with the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Click on the toggle button
    Toggle,
    /// New content of the search box
    Search(String),
    /// Click on an option, carrying its value
    Select(String),
    /// Focus left the widget
    Blur,
    /// Move the keyboard cursor down (ArrowDown)
    HighlightNext,
    /// Move the keyboard cursor up (ArrowUp)
    HighlightPrev,
    /// Select the option under the keyboard cursor (Enter)
    ConfirmHighlighted,
    /// Close without selecting (Escape)
    Close,
}

impl DropdownEvent {
    /// Event for a `KeyboardEvent.key` pressed while the dropdown is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::HighlightNext),
            "ArrowUp" => Some(Self::HighlightPrev),
            "Enter" => Some(Self::ConfirmHighlighted),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Element that should receive input focus after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Toggle,
    Search,
    List,
}

/// Side effect the host framework must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move input focus
    Focus(FocusTarget),
    /// Report a confirmed selection to the change callback
    Change(String),
}
