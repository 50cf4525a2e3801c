use crate::Route;
use crate::nav::{NavLink, link_style};
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let path = current_path(location_pathname(), &route);

    rsx! {
        NavLinks { path }
        Outlet::<Route> {}
    }
}

/// Path as typed in the address bar, before the router normalises it
#[cfg(target_arch = "wasm32")]
fn location_pathname() -> Option<String> {
    web_sys::window().and_then(|window| window.location().pathname().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn location_pathname() -> Option<String> {
    None
}

/// Desktop has no address bar, the route is the only path there is
fn current_path(pathname: Option<String>, route: &Route) -> String {
    pathname.unwrap_or_else(|| route.to_string())
}

/// Takes the current path as a prop instead of reading the router itself
#[component]
fn NavLinks(path: String) -> Element {
    rsx! {
        nav { class: "homeNav",
            h2 { "GoBank" }
            ul { class: "nav-list",
                for link in NavLink::ALL {
                    Link { key: "{link.label()}", to: link.target(),
                        li { style: link_style(link, &path), "{link.label()}" }
                    }
                }
            }
        }
    }
}
