use dioxus::prelude::*;

use crate::i18n::{Key, Locale};

#[derive(Props, PartialEq, Clone)]
pub struct SearchFieldProps {
    /// Current query text, owned by the parent
    search_query: String,
    /// Called with the field's full text on every input event
    #[props(default)]
    on_search_change: EventHandler<String>,
    #[props(default)]
    locale: Locale,
}

/// Controlled search input with a leading search glyph.
///
/// The field never keeps its own copy of the query: what it shows is
/// `search_query`, and edits only leave through `on_search_change`.
#[component]
pub fn SearchField(props: SearchFieldProps) -> Element {
    let SearchFieldProps {
        search_query,
        on_search_change,
        locale,
    } = props;
    let placeholder = locale.text(Key::SearchPlaceholder);

    rsx! {
        div { class: "search-field",
            SearchIcon {}
            input {
                class: "search-field-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{search_query}",
                oninput: move |evt| on_search_change.call(evt.value())
            }
        }
    }
}

/// Magnifier glyph. Decorative only, so it carries no handlers.
#[component]
fn SearchIcon() -> Element {
    rsx! {
        svg {
            class: "search-field-icon",
            "xmlns": "http://www.w3.org/2000/svg",
            "viewBox": "0 0 24 24",
            "width": "16",
            "height": "16",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}
