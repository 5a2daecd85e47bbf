mod api;
mod components;
mod config;
mod hooks;
mod pages;

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use pages::Packages;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Packages {})]
    #[route("/packages")]
    Packages {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(config::store_config);

    rsx! {
        document::Link { rel: "stylesheet", href: "https://cdn.tailwindcss.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap"
        }
        style { {include_str!("styles.css")} }

        div { class: "bg-white min-h-screen text-gray-900",
            Router::<Route> {}
        }
    }
}

pub fn launch() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}
