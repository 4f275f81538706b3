//! DropdownSelect demo - Leptos frontend
//!
//! Mounts the demo page that hosts a searchable `DropdownSelect`.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use dropdown_types as _;
use leptos_meta as _;
use wasm_bindgen as _;
use web_sys as _;

use dropdown_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("DropdownSelect demo starting...");

    mount_to_body(App);
}
