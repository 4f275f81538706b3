//! Domain models for the dropdown widget.

mod config;
mod option;

pub use config::{DemoConfig, DropdownConfig, DEFAULT_LABEL};
pub use option::{filter_options, list_rows, list_style, SelectOption};
