use dioxus::{logger::tracing, prelude::*};

use crate::components::SearchField;
use crate::contexts::Settings;
use crate::i18n::Key;

const SEARCH_FIELD_CSS: Asset = asset!("/assets/styling/search_field.css");

/// Owns the query and hands it to the search field
#[component]
pub fn Catalog() -> Element {
    let settings = use_context::<Settings>();
    let locale = settings.locale;
    let mut search_query = use_signal(String::new);

    let query = search_query();
    let echo_label = locale.text(Key::QueryEcho);

    rsx! {
        document::Link { rel: "stylesheet", href: SEARCH_FIELD_CSS }
        div { class: "catalog-container",
            SearchField {
                search_query: query.clone(),
                locale,
                on_search_change: move |q: String| {
                    tracing::debug!("Search query changed: {:?}", q);
                    search_query.set(q);
                }
            }
            if query.is_empty() {
                p { class: "catalog-hint", {locale.text(Key::QueryEmpty)} }
            } else {
                p { class: "catalog-query",
                    "{echo_label}: "
                    strong { "{query}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::utils::test_dom::MountedDom;

    #[component]
    fn UzbekCatalog() -> Element {
        use_context_provider(Settings::default);
        rsx! { Catalog {} }
    }

    #[component]
    fn EnglishCatalog() -> Element {
        use_context_provider(|| Settings { locale: Locale::En });
        rsx! { Catalog {} }
    }

    #[test]
    fn test_empty_query_shows_hint() {
        let mounted = MountedDom::new(UzbekCatalog);
        let html = mounted.html();

        assert!(html.contains("catalog-hint"));
        assert!(html.contains("Qidirish uchun yozing"));
        assert!(!html.contains("catalog-query"));
        assert!(html.contains(r#"placeholder="Mahsulotlarni qidirish""#));
    }

    #[test]
    fn test_typed_query_is_echoed() {
        let mut mounted = MountedDom::new(EnglishCatalog);

        mounted.type_text("phones");
        let html = mounted.html();

        assert!(html.contains("catalog-query"));
        assert!(html.contains("Query: "));
        assert!(html.contains("<strong>phones</strong>"));
        assert!(html.contains(r#"value="phones""#));
        assert!(!html.contains("Start typing to search"));
    }
}
