#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use crate::app::App;
use crate::config::{ensure_webview_data_dir, AppConfig, APP_TITLE};

fn main() {
    logging::init();

    let config = AppConfig::load().expect("should resolve application directories");
    let webview_data_dir = ensure_webview_data_dir(&config.data_dir)
        .expect("should resolve and create WebView2 data directory");
    tracing::info!(
        download_dir = %config.download_dir.display(),
        download_mode = ?config.download_mode,
        "starting"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(APP_TITLE))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}
