//! Shared components. Components are the building blocks of dioxus apps.

mod search_field;
pub use search_field::SearchField;
