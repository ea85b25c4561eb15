//! End-to-end behaviour of a search submission against a recording router.

use quicksearch_core::{submit_search, Navigate, NavigationIntent, SearchQuery, SEARCH_PATH};

/// Router double that keeps every intent in arrival order.
#[derive(Default)]
struct History {
    entries: Vec<NavigationIntent>,
}

impl Navigate for History {
    fn navigate(&mut self, intent: NavigationIntent) {
        self.entries.push(intent);
    }
}

fn submit_once(input: &str) -> NavigationIntent {
    let mut history = History::default();
    submit_search(input, &mut history);
    assert_eq!(history.entries.len(), 1, "expected exactly one navigation for {input:?}");
    history.entries.remove(0)
}

#[test]
fn decoded_name_matches_input() {
    let inputs = [
        "shoes",
        "blue shoes",
        "",
        " ",
        "  leading and trailing  ",
        "a&b=c",
        "#hashtag",
        "50% off + free shipping",
        "?name=injected",
        "naïve café",
        "日本語の検索",
        "emoji 🔎",
        "line\nbreak\ttab",
    ];
    for input in inputs {
        let intent = submit_once(input);
        assert_eq!(intent.pathname, SEARCH_PATH);
        assert!(intent.search.starts_with("?name="), "bad search part {:?}", intent.search);
        assert_eq!(intent.query().name, input, "round trip failed for {input:?}");
    }
}

#[test]
fn blue_shoes_example() {
    let intent = submit_once("blue shoes");
    assert_eq!(intent.pathname, "/search");
    assert_eq!(intent.search, "?name=blue+shoes");
}

#[test]
fn empty_field_keeps_name_key() {
    let intent = submit_once("");
    assert_eq!(intent.search, "?name=");
    assert_eq!(intent.query(), SearchQuery::new(""));
}

#[test]
fn special_characters_are_encoded() {
    let intent = submit_once("a&b=c#d é");
    assert!(!intent.search[1..].contains('#'));
    assert_eq!(intent.search.matches('&').count(), 0);
    assert_eq!(intent.search.matches('=').count(), 1);
    assert!(intent.search.is_ascii());
}

#[test]
fn rapid_submissions_queue_in_order() {
    let mut history = History::default();
    for input in ["one", "two", "two", ""] {
        submit_search(input, &mut history);
    }
    let names: Vec<String> = history.entries.iter().map(|i| i.query().name).collect();
    assert_eq!(names, ["one", "two", "two", ""]);
}
