//! Route table and the router-backed [`Navigate`] implementation.

use std::fmt;

use dioxus::prelude::*;
use quicksearch_core::{Navigate, NavigationIntent, SearchQuery, SEARCH_PATH};
use tracing::debug;

use crate::app::{Home, Shell};
use crate::results::SearchResults;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/search?:..query")]
        SearchResults { query: SearchParams },
}

/// Query segment of the results route.
///
/// The router stores routes as strings, so this has to write and read the
/// same form-urlencoded `name=…` that [`SearchQuery`] produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams(pub SearchQuery);

impl From<&str> for SearchParams {
    fn from(query: &str) -> Self {
        Self(SearchQuery::parse(query))
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_query_string())
    }
}

impl From<NavigationIntent> for Route {
    /// `/search` carries the decoded query; anything else lands on the home page.
    fn from(intent: NavigationIntent) -> Self {
        if intent.pathname == SEARCH_PATH {
            Route::SearchResults { query: SearchParams(intent.query()) }
        } else {
            Route::Home {}
        }
    }
}

/// Pushes intents onto the Dioxus router history. Only usable inside a `Router`.
pub struct RouterNavigator;

impl Navigate for RouterNavigator {
    fn navigate(&mut self, intent: NavigationIntent) {
        debug!(href = %intent.href(), "Navigating");
        navigator().push(Route::from(intent));
    }
}
