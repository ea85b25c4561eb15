//! Results page for `/search`. Shows the decoded search name; there is no backend to query.

use dioxus::prelude::*;

use crate::routes::SearchParams;

#[component]
pub fn SearchResults(query: SearchParams) -> Element {
    let name = query.0.name;
    tracing::debug!(name = %name, "Rendering search results");

    rsx! {
        div {
            class: "results-page",
            h2 { class: "results-heading", "Results for “{name}”" }
            if name.is_empty() {
                span { class: "results-hint", "Empty search" }
            }
        }
    }
}
