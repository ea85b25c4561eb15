//! QuickSearch core — everything the search bar does that isn't tied to a UI framework.
//!
//! The desktop app wires these pieces to Dioxus; tests drive them directly.

pub mod config;
pub mod navigation;
pub mod query;

pub use config::{load_app_config, parse_app_config, AppConfig};
pub use navigation::{submit_search, Navigate, NavigationIntent, SEARCH_PATH};
pub use query::SearchQuery;
