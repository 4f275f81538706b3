//! # Dropdown Types
//!
//! Framework-free core of the `DropdownSelect` widget.
//!
//! - **`error`** - Typed errors for loading configuration
//! - **`models`** - Selectable options and widget/demo configuration
//! - **`state`** - Widget state and the pure reducer driving it
//!
//! ## Architecture Role
//!
//! ```text
//!        dropdown-types (this crate)
//!                 │
//!                 ▼
//!          dropdown-leptos
//!    (DropdownSelect + demo page)
//! ```
//!
//! Nothing here touches the DOM, so every transition of the widget can be
//! exercised with plain `#[test]` functions.

pub mod error;
pub mod models;
pub mod state;

pub use error::{ConfigError, Result};

pub use models::{
    filter_options, list_rows, list_style, DemoConfig, DropdownConfig, SelectOption,
    DEFAULT_LABEL,
};
pub use state::{Command, DropdownEvent, DropdownState, FocusTarget, Transition};
