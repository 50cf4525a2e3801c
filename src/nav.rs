//! Navigation links and which one is highlighted for a given path

pub const UNDERLINE_STYLE: &str =
    "text-decoration: underline; text-decoration-color: #ff778f; text-decoration-thickness: 0.3rem;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    About,
    Login,
    CreateAccount,
}

impl NavLink {
    /// Display order in the bar
    pub const ALL: [NavLink; 3] = [NavLink::About, NavLink::Login, NavLink::CreateAccount];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::About => "About",
            NavLink::Login => "Login",
            NavLink::CreateAccount => "Create account",
        }
    }

    pub fn target(self) -> &'static str {
        match self {
            NavLink::About => "/about",
            NavLink::Login => "/login",
            NavLink::CreateAccount => "/create",
        }
    }

    /// Path compared against the current location. About is matched against
    /// `/About`, which the router never produces, so it is never underlined.
    fn active_path(self) -> &'static str {
        match self {
            NavLink::About => "/About",
            NavLink::Login => "/login",
            NavLink::CreateAccount => "/create",
        }
    }
}

pub fn is_underlined(link: NavLink, path: &str) -> bool {
    path == link.active_path()
}

pub fn link_style(link: NavLink, path: &str) -> &'static str {
    if is_underlined(link, path) {
        UNDERLINE_STYLE
    } else {
        ""
    }
}
