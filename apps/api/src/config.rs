use crate::errors::AppError;

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Application configuration loaded from environment variables.
/// Startup is aborted with `AppError::Configuration` if a required value is missing,
/// before any client is built or any network call is made.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub github_token: String,
    /// Repository identifier in `owner/name` form.
    pub github_repo: String,
    /// Base domain serving the published files, without trailing slash.
    pub hosting_domain: String,
    pub gemini_api_url: String,
    pub github_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

// Secrets stay out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("github_repo", &self.github_repo)
            .field("hosting_domain", &self.hosting_domain)
            .field("gemini_api_url", &self.gemini_api_url)
            .field("github_api_url", &self.github_api_url)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Result<String, AppError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    AppError::Configuration(format!(
                        "Required environment variable '{key}' is not set"
                    ))
                })
        };

        let github_repo = require("GITHUB_REPO")?;
        if github_repo.split('/').filter(|part| !part.is_empty()).count() != 2 {
            return Err(AppError::Configuration(format!(
                "GITHUB_REPO must be in 'owner/name' form, got '{github_repo}'"
            )));
        }

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::Configuration(format!("PORT must be a valid port number, got '{raw}'"))
            })?,
            None => 8080,
        };

        Ok(Config {
            gemini_api_key: require("GEMINI_API_KEY")?,
            github_token: require("GITHUB_TOKEN")?,
            github_repo,
            hosting_domain: require("HOSTING_DOMAIN")?.trim_end_matches('/').to_string(),
            gemini_api_url: lookup("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            github_api_url: lookup("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
