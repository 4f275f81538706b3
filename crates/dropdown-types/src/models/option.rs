//! Selectable options and the search filter over them.

use serde::{Deserialize, Serialize};

/// Fewest rows the open list reserves, even for zero or one match.
const MIN_LIST_ROWS: usize = 2;
/// Most rows the open list shows before scrolling.
const MAX_LIST_ROWS: usize = 5;
/// Height of one option row in `em`.
const LIST_ROW_HEIGHT_EM: f32 = 2.0;

/// A selectable `(value, label)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Identifier reported through the change callback
    pub value: String,
    /// Human-readable text shown in the list and on the toggle button
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    /// Case-insensitive substring match against the label.
    ///
    /// `needle` must already be lowercased.
    fn label_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.label.to_lowercase().contains(needle)
    }
}

/// Options whose label contains `search` case-insensitively, in source order.
///
/// An empty search returns every option.
pub fn filter_options<'a>(options: &'a [SelectOption], search: &str) -> Vec<&'a SelectOption> {
    let needle = search.to_lowercase();
    options.iter().filter(|option| option.label_contains(&needle)).collect()
}

/// Number of rows the open list shows for `visible` matching options.
pub fn list_rows(visible: usize) -> usize {
    visible.clamp(MIN_LIST_ROWS, MAX_LIST_ROWS)
}

/// Inline style sizing the open list to [`list_rows`] rows; longer lists scroll.
pub fn list_style(visible: usize) -> String {
    let height = list_rows(visible) as f32 * LIST_ROW_HEIGHT_EM;
    format!("height: {height}em; overflow-y: auto;")
}
