use sayyes_core::catalog::DEFAULT_PROJECT_ID;
use sayyes_llm::LlmConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL that catalog image paths hang off.
    pub image_base_url: String,
    /// Language-model settings; `None` runs on local rules only.
    pub llm: Option<LlmConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                              |
    /// |------------------------|------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                            |
    /// | `PORT`                 | `5001`                                               |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                                 |
    /// | `IMAGE_PROJECT_ID`     | `sayyes`                                             |
    /// | `IMAGE_BASE_URL`       | `https://{IMAGE_PROJECT_ID}.public.blob.vercel-storage.com` |
    ///
    /// Language-model variables are documented on [`LlmConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let image_base_url = std::env::var("IMAGE_BASE_URL").unwrap_or_else(|_| {
            let project = std::env::var("IMAGE_PROJECT_ID")
                .unwrap_or_else(|_| DEFAULT_PROJECT_ID.into());
            format!("https://{project}.public.blob.vercel-storage.com")
        });

        let llm = LlmConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            image_base_url,
            llm,
        }
    }
}
