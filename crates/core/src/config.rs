//! App-shell configuration from `.quicksearch.toml`.
//!
//! Loading is lenient: a missing file means defaults, and bad keys or values
//! are reported with `warn!` and skipped.

use std::path::Path;
use tracing::{debug, warn};

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".quicksearch.toml";

const KNOWN_CONFIG_KEYS: &[&str] = &["window_title"];

/// Typos further than this from every known key get no suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { window_title: "QuickSearch".to_string() }
    }
}

/// Levenshtein distance over chars, single rolling row.
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}

fn closest_known_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|known| (*known, levenshtein(key, known)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(known, _)| known)
}

fn warn_unknown_key(key: &str) {
    match closest_known_key(key) {
        Some(suggestion) => warn!(key, suggestion, "Unknown key in {CONFIG_FILE} — did you mean '{suggestion}'?"),
        None => warn!(key, "Unknown key in {CONFIG_FILE} (known keys: {})", KNOWN_CONFIG_KEYS.join(", ")),
    }
}

/// Parse config file content, merging recognised keys over the defaults.
///
/// Fails only when the content is not valid TOML.
pub fn parse_app_config(content: &str) -> Result<AppConfig, String> {
    let table = content.parse::<toml::Table>().map_err(|e| format!("invalid TOML: {e}"))?;
    let mut config = AppConfig::default();

    table
        .keys()
        .filter(|key| !KNOWN_CONFIG_KEYS.contains(&key.as_str()))
        .for_each(|key| warn_unknown_key(key));

    match table.get("window_title") {
        Some(toml::Value::String(title)) => config.window_title = title.clone(),
        Some(other) => {
            warn!(found = other.type_str(), "window_title in {CONFIG_FILE} must be a string, ignoring")
        }
        None => {}
    }

    Ok(config)
}

/// Load [`AppConfig`] from `.quicksearch.toml` under `root`.
///
/// Returns defaults when the file is absent, unreadable, or not valid TOML.
pub fn load_app_config(root: &Path) -> AppConfig {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return AppConfig::default();
    }

    debug!("Loading {CONFIG_FILE}");
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|content| parse_app_config(&content));
    parsed.unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Could not load {CONFIG_FILE}, using defaults");
        AppConfig::default()
    })
}
