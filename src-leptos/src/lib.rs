//! DropdownSelect - Leptos component library and demo page

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
