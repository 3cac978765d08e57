#![allow(warnings)]
//! Pastebin Frontend Entry Point

mod actions;
mod app;
mod backend;
mod components;
mod context;
mod error;
mod format;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
