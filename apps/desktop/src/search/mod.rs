//! Search form shown in the shell header.

mod search_bar;

pub use search_bar::SearchBar;
