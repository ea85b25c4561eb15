//! Navigation intents and the submit handler that produces them.
//!
//! The router itself lives in the UI layer; it only has to implement [`Navigate`].

use serde::Serialize;
use tracing::debug;

use crate::query::SearchQuery;

/// Route that renders search results.
pub const SEARCH_PATH: &str = "/search";

/// A request for a client-side route change: target path plus `?`-prefixed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationIntent {
    pub pathname: String,
    pub search: String,
}

impl NavigationIntent {
    /// Intent for the results route carrying `query`.
    pub fn search(query: &SearchQuery) -> Self {
        Self {
            pathname: SEARCH_PATH.to_string(),
            search: format!("?{query}"),
        }
    }

    /// Path and query joined, e.g. `/search?name=shoes`.
    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }

    /// Decode the query part back into a [`SearchQuery`].
    pub fn query(&self) -> SearchQuery {
        SearchQuery::parse(&self.search)
    }
}

/// Router collaborator: accepts navigation intents in the order they are issued.
pub trait Navigate {
    fn navigate(&mut self, intent: NavigationIntent);
}

impl<F> Navigate for F
where
    F: FnMut(NavigationIntent),
{
    fn navigate(&mut self, intent: NavigationIntent) {
        (*self)(intent)
    }
}

/// Handle a search-form submission.
///
/// `field_value` is whatever the text field holds at submit time. It is sent
/// as-is, empty included. Exactly one intent is issued per call.
pub fn submit_search<N>(field_value: &str, navigator: &mut N)
where
    N: Navigate + ?Sized,
{
    let intent = NavigationIntent::search(&SearchQuery::new(field_value));
    debug!(pathname = %intent.pathname, search = %intent.search, "Submitting search");
    navigator.navigate(intent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_targets_search_path() {
        let intent = NavigationIntent::search(&SearchQuery::new("shoes"));
        assert_eq!(intent.pathname, "/search");
        assert_eq!(intent.search, "?name=shoes");
        assert_eq!(intent.href(), "/search?name=shoes");
    }

    #[test]
    fn intent_query_decodes() {
        let intent = NavigationIntent::search(&SearchQuery::new("blue shoes"));
        assert_eq!(intent.query().name, "blue shoes");
    }

    #[test]
    fn submit_issues_exactly_one_intent() {
        let mut seen = Vec::new();
        submit_search("blue shoes", &mut |intent: NavigationIntent| seen.push(intent));
        assert_eq!(
            seen,
            vec![NavigationIntent {
                pathname: "/search".into(),
                search: "?name=blue+shoes".into(),
            }]
        );
    }

    #[test]
    fn submit_accepts_dyn_navigator() {
        let mut count = 0;
        let mut counter = |_: NavigationIntent| count += 1;
        let nav: &mut dyn Navigate = &mut counter;
        submit_search("", nav);
        submit_search("x", nav);
        assert_eq!(count, 2);
    }

    #[test]
    fn intent_serializes_as_router_request() {
        let intent = NavigationIntent::search(&SearchQuery::new("shoes"));
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json, serde_json::json!({ "pathname": "/search", "search": "?name=shoes" }));
    }
}
