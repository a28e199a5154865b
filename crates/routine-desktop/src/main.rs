//! Morning Routine Desktop Application
//!
//! Plan your mornings as a list of timed tasks, with gentle reminders.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod services;
mod state;
mod theme;
mod views;

use std::sync::Arc;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use bootstrap_config::load_bootstrap_config;
use services::AppServices;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "routine_desktop=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Morning Routine...");

    let config = load_bootstrap_config().client_config();
    let services = match AppServices::initialize(config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            tracing::error!("Failed to initialize services: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Client id: {}", services.client_id);

    let window = WindowBuilder::new()
        .with_title("Morning Routine")
        .with_inner_size(LogicalSize::new(1100.0, 820.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(services)
        .launch(app::App);
}
