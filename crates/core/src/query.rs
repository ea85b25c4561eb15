//! Search query model and its `application/x-www-form-urlencoded` form.

use serde::Serialize;
use std::fmt;
use url::form_urlencoded;

/// Query-string key carrying the search text.
pub const NAME_KEY: &str = "name";

/// The query sent to the results route. Built fresh on every submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    /// Raw field content: not trimmed, may be empty.
    pub name: String,
}

impl SearchQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Serialize as `name=<value>` (no leading `?`).
    ///
    /// Spaces become `+`; reserved and non-ASCII bytes are percent-encoded.
    /// An empty name still produces `name=`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(NAME_KEY, &self.name)
            .finish()
    }

    /// Decode a query string, with or without its leading `?`.
    ///
    /// The first `name` pair wins. A query without one decodes to an empty name.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let name = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == NAME_KEY)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        Self { name }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
