//! Web interface components for the GoBank client
//!
//! One component per screen. Components keep only their own form or list
//! state; every backend call goes through the [`crate::api::HttpBackend`]
//! provided as context by the app shell.

/// Navigation bar layout
mod navbar;
pub use navbar::Navbar;

/// Home page and the catch-all route
mod home;
pub use home::{Fallback, Home};

/// About page
mod about;
pub use about::About;

/// Shared text input bound to a form field
mod field;
use field::FormField;

/// Account creation and login forms
mod account;
pub use account::{CreateAccount, Login};

/// Transfer form
mod transfer;
pub use transfer::Transfer;

/// Transaction history list
mod history;
pub use history::TransactionsHistory;
