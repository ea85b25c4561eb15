//! Root application component and the shell layout shared by every route.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::search::SearchBar;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        Router::<Route> {}
    }
}

/// Title bar with the search form, routed page below.
#[component]
pub fn Shell() -> Element {
    let title = crate::app_title();

    rsx! {
        div {
            class: "app-shell",

            header {
                class: "titlebar",
                span { class: "titlebar-title", "{title}" }
                SearchBar {}
            }

            main {
                class: "content-area",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-empty",
            span { "Type a name and press Enter to search" }
        }
    }
}
