//! QuickSearch Desktop — Dioxus search form with client-side routing.

use std::sync::OnceLock;

use dioxus::prelude::*;

mod app;
mod results;
mod routes;
mod search;

use app::App;
use quicksearch_core::{load_app_config, AppConfig};

/// Loaded before Dioxus launches; read by the shell for the window title.
pub static CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn main() {
    init_logging();

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let config = CONFIG.get_or_init(|| load_app_config(&cwd));
    tracing::info!(title = %config.window_title, "Starting QuickSearch");

    #[cfg(feature = "desktop")]
    LaunchBuilder::new().with_cfg(window_config(config)).launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

/// Warn by default, info for our crates; `RUST_LOG` adds directives on top.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .from_env_lossy()
        .add_directive("quicksearch=info".parse().expect("static directive"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[cfg(feature = "desktop")]
fn window_config(config: &AppConfig) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_inner_size(LogicalSize::new(720.0, 480.0))
        .with_min_inner_size(LogicalSize::new(420.0, 240.0));
    Config::default().with_menu(None).with_window(window)
}

/// Title shown in the shell; falls back to the default config outside `main`.
pub fn app_title() -> String {
    CONFIG.get().map(|c| c.window_title.clone()).unwrap_or_else(|| AppConfig::default().window_title)
}
