use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::{Catalog, Shell};

mod components;
mod contexts;
mod i18n;
mod utils;
mod views;

use utils::config;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Catalog {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(config::APP_TITLE)
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Read once; the query itself is never persisted
    let settings = use_hook(contexts::load_or_default);
    use_context_provider(|| settings);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
