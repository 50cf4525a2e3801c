mod api;
mod config;
mod error;
mod form;
mod history;
mod nav;
mod transaction;
mod views;

use crate::api::HttpBackend;
use crate::config::Config;
use dioxus::prelude::*;
use views::{
    About, CreateAccount, Fallback, Home, Login, Navbar, TransactionsHistory, Transfer,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/create")]
        CreateAccount {},
        #[route("/login")]
        Login {},
        #[route("/account/transactions/:id")]
        TransactionsHistory { id: String },
        #[route("/account/transfer/:id")]
        Transfer { id: String },
        #[route("/about")]
        About {},
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        Fallback { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();

    let config = config::resolve();
    tracing::info!("GoBank client using backend at {}", config.api_origin());

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<Config>();
    use_context_provider(|| HttpBackend::new(config));

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    fn parse(path: &str) -> Route {
        path.parse::<Route>().unwrap()
    }

    #[test]
    fn test_static_routes() {
        assert_eq!(parse("/create"), Route::CreateAccount {});
        assert_eq!(parse("/login"), Route::Login {});
        assert_eq!(parse("/about"), Route::About {});
        assert_eq!(parse("/"), Route::Home {});
    }

    #[test]
    fn test_routes_with_account_id() {
        assert_eq!(
            parse("/account/transactions/7"),
            Route::TransactionsHistory { id: "7".to_string() }
        );
        assert_eq!(
            parse("/account/transfer/7"),
            Route::Transfer { id: "7".to_string() }
        );
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert!(matches!(parse("/nowhere"), Route::Fallback { .. }));
        assert!(matches!(parse("/About"), Route::Fallback { .. }));
    }

    #[test]
    fn test_route_display_is_the_path() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(
            Route::Transfer { id: "7".to_string() }.to_string(),
            "/account/transfer/7"
        );
    }
}
