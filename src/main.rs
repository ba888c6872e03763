//! Terminall Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod error;
mod logging;
mod manager;
mod models;
mod snapshot;
mod traits;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    mount_to_body(App);
}
