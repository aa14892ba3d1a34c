#![allow(warnings)]
//! Animal Checkups Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod error;
mod logger;
mod models;
mod pipeline;
mod store;
mod view_model;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(logger::default_level());
    mount_to_body(App);
}
