//! Reusable UI components

mod dropdown_select;

pub use dropdown_select::DropdownSelect;
