mod calculator;
mod config;
mod format;
mod keymap;
mod logging;
mod reducer;
mod store;
mod ui;

use gtk::prelude::*;
use gtk::{glib, gio, Application};

const APP_ID: &str = "com.popcalc.calculator";

fn main() -> glib::ExitCode {
    // Load configuration, falling back to defaults once logging is up
    let (config, config_error) = match config::Config::load() {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };

    logging::init(&config.logging);
    match config_error {
        Some(e) => tracing::warn!("{e}; using default configuration"),
        None => tracing::info!(path = %config::Config::config_path().display(), "configuration loaded"),
    }

    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    app.connect_activate(move |app| {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        ui::build_ui(app, config.clone());
    });

    app.run()
}
