//! Vicsim Dashboard
//!
//! Browser dashboard for a regional economic simulation, built with Leptos (WASM).
//!
//! # Features
//!
//! - Map surface over an OpenStreetMap basemap
//! - Timeline scrubber with auto-play
//! - Headline metric cards fed by the stats endpoint (or fallback values)
//! - Scenario parameter sliders
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. All state logic
//! lives in the `vicsim` crate; this crate owns signals, timers and the DOM.

use leptos::*;
use vicsim::DashboardConfig;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = DashboardConfig::load_default();

    // Core crate logs through `tracing`, which forwards to `log` here
    let level = config
        .logging
        .level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Console logger unavailable: {}", e).into());
    }

    mount_to_body(move || view! { <app::App config=config /> });
}
