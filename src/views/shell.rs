use crate::contexts::Settings;
use crate::i18n::Key;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Shell() -> Element {
    let settings = use_context::<Settings>();

    rsx! {
        div { class: "layout-container",
            header { class: "app-header",
                h1 { {settings.locale.text(Key::CatalogTitle)} }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
