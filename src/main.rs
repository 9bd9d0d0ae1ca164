//! SolGrid Dashboard
//!
//! Multi-role solar/grid energy dashboard mockup built with Leptos (WASM).
//!
//! # Features
//!
//! - Public landing page with login/signup role selection
//! - Resident dashboard: notices, consumption chart, weather, appliance calculator
//! - Department dashboard: alert posts, fault analysis, weather broadcasts, news
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: all data is demo-generated at page load
//! and held in page-local signals, lost on reload.

use leptos::*;

mod app;
mod components;
mod metrics;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
