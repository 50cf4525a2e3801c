//! Launch configuration
//!
//! The backend origin is resolved once at startup and handed to the component
//! tree as context, so no view hard-codes where the API lives.

/// Origin used when nothing else is configured
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8080";

/// Origin baked in at compile time, falling back to [`DEFAULT_API_ORIGIN`]
pub fn compiled_origin() -> &'static str {
    option_env!("GOBANK_API_ORIGIN").unwrap_or(DEFAULT_API_ORIGIN)
}

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Origin of the gobank backend, e.g. http://localhost:8080
    #[arg(long, default_value_t = compiled_origin().to_string())]
    pub api_origin: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    api_origin: String,
}

impl Config {
    pub fn new(api_origin: impl Into<String>) -> Self {
        let api_origin: String = api_origin.into();
        Config {
            api_origin: api_origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_args(args: Args) -> Self {
        Config::new(args.api_origin)
    }

    pub fn api_origin(&self) -> &str {
        &self.api_origin
    }

    /// Full URL for an API path such as `/account/transfer/7`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_origin, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(compiled_origin())
    }
}

/// Reads launch arguments on native targets; the browser has none.
pub fn resolve() -> Config {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use clap::Parser;
        Config::from_args(Args::parse())
    }
    #[cfg(target_arch = "wasm32")]
    {
        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(vec!["gobank-client", "--api-origin", "http://bank:9000"]);
        assert_eq!(args.api_origin, "http://bank:9000");
        assert_eq!(Config::from_args(args).api_origin(), "http://bank:9000");
    }

    #[test]
    fn test_args_parsing_default_origin() {
        let args = Args::parse_from(vec!["gobank-client"]);
        assert_eq!(args.api_origin, compiled_origin());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = Config::new("http://localhost:8080/");
        assert_eq!(config.api_origin(), "http://localhost:8080");
        assert_eq!(
            config.url("/account/transactions/7"),
            "http://localhost:8080/account/transactions/7"
        );
    }
}
