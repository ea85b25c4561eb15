//! Search bar — text field plus submit button that routes to `/search?name=…`.

use dioxus::prelude::*;
use quicksearch_core::{submit_search, Navigate};

use crate::routes::RouterNavigator;

#[component]
pub fn SearchBar() -> Element {
    // Mirrors the input on every keystroke so submit sees the current value.
    let mut field = use_signal(String::new);

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |evt: FormEvent| {
                // No full-page reload; routing is client-side.
                evt.prevent_default();
                submit_field(field, &mut RouterNavigator);
            },

            input {
                class: "search",
                r#type: "text",
                value: "{field}",
                oninput: move |e: FormEvent| field.set(e.value()),
            }

            button {
                class: "search-button",
                r#type: "submit",
                "🔎"
            }
        }
    }
}

/// Send whatever the field holds right now.
fn submit_field<N: Navigate>(field: Signal<String>, navigator: &mut N) {
    let value = field.read().clone();
    submit_search(&value, navigator);
}
