//! Responder configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use chatform_domain::UniqueUrl;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 2_000;

/// Configuration loaded from the environment and the command line
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Base URL of the form backend
    pub api_url: String,
    /// Unique URL of the form to open
    pub form_url: UniqueUrl,
    /// Per-request timeout for the HTTP adapter
    pub request_timeout: Duration,
    /// Delay before a display-only field moves on
    pub auto_advance_delay: Duration,
}

impl PlayerConfig {
    /// Load configuration from environment variables, falling back to the
    /// first CLI argument for the form URL.
    pub fn from_env() -> Result<Self> {
        let cli_form_url = env::args().nth(1);
        Self::from_lookup(|key| env::var(key).ok(), cli_form_url)
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        cli_form_url: Option<String>,
    ) -> Result<Self> {
        let form_url = cli_form_url
            .or_else(|| lookup("CHATFORM_FORM_URL"))
            .context("Pass the form's unique URL as an argument or set CHATFORM_FORM_URL")?;

        Ok(Self {
            api_url: lookup("CHATFORM_API_URL")
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            form_url: UniqueUrl::new(form_url.trim())
                .context("CHATFORM_FORM_URL must not be blank")?,
            request_timeout: Duration::from_millis(
                lookup("CHATFORM_REQUEST_TIMEOUT_MS")
                    .map(|s| s.trim().parse::<u64>())
                    .transpose()
                    .context("CHATFORM_REQUEST_TIMEOUT_MS must be a number of milliseconds")?
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
            ),
            auto_advance_delay: Duration::from_millis(
                lookup("CHATFORM_AUTO_ADVANCE_MS")
                    .map(|s| s.trim().parse::<u64>())
                    .transpose()
                    .context("CHATFORM_AUTO_ADVANCE_MS must be a number of milliseconds")?
                    .unwrap_or(DEFAULT_AUTO_ADVANCE_MS),
            ),
        })
    }
}

/// Load `.env.local` and `.env` from the repository root, local overrides first.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = PlayerConfig::from_lookup(lookup(&[]), Some("k3j9x".into())).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.form_url.as_str(), "k3j9x");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.auto_advance_delay, Duration::from_secs(2));
    }

    #[test]
    fn cli_argument_wins_over_env() {
        let config = PlayerConfig::from_lookup(
            lookup(&[("CHATFORM_FORM_URL", "from-env")]),
            Some("from-cli".into()),
        )
        .unwrap();
        assert_eq!(config.form_url.as_str(), "from-cli");

        let config =
            PlayerConfig::from_lookup(lookup(&[("CHATFORM_FORM_URL", "from-env")]), None).unwrap();
        assert_eq!(config.form_url.as_str(), "from-env");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = PlayerConfig::from_lookup(
            lookup(&[
                ("CHATFORM_API_URL", "https://forms.example.com/"),
                ("CHATFORM_REQUEST_TIMEOUT_MS", "500"),
                ("CHATFORM_AUTO_ADVANCE_MS", "10"),
            ]),
            Some("x".into()),
        )
        .unwrap();
        assert_eq!(config.api_url, "https://forms.example.com");
        assert_eq!(config.request_timeout, Duration::from_millis(500));
        assert_eq!(config.auto_advance_delay, Duration::from_millis(10));
    }

    #[test]
    fn missing_form_url_is_an_error() {
        assert!(PlayerConfig::from_lookup(lookup(&[]), None).is_err());
        assert!(PlayerConfig::from_lookup(lookup(&[]), Some("  ".into())).is_err());
        assert!(PlayerConfig::from_lookup(
            lookup(&[("CHATFORM_REQUEST_TIMEOUT_MS", "soon")]),
            Some("x".into())
        )
        .is_err());
    }
}
