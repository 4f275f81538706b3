//! Page components

mod demo;

pub use demo::DropdownDemo;
