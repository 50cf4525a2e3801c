use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { "Home" }
    }
}

/// Any path without a route of its own lands on the home view
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}, showing home", segments.join("/"));
    rsx! {
        Home {}
    }
}
