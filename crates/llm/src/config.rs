/// Default OpenRouter API base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default provider timeout; generation of long scripts can be slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// LLM provider configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Bearer token for the provider. `None` disables outbound calls.
    pub api_key: Option<String>,
    /// API base URL without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Value of the `HTTP-Referer` attribution header.
    pub referer: String,
    /// Value of the `X-Title` attribution header.
    pub app_title: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            referer: "https://videofuel.ai".to_string(),
            app_title: "VideoFuel AI".to_string(),
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                         |
    /// |-----------------------|---------------------------------|
    /// | `OPENROUTER_API_KEY`  | unset (calls fail)              |
    /// | `OPENROUTER_BASE_URL` | `https://openrouter.ai/api/v1`  |
    /// | `LLM_TIMEOUT_SECS`    | `120`                           |
    /// | `LLM_REFERER`         | `https://videofuel.ai`          |
    /// | `LLM_APP_TITLE`       | `VideoFuel AI`                  |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url = std::env::var("OPENROUTER_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        let referer = std::env::var("LLM_REFERER").unwrap_or(defaults.referer);
        let app_title = std::env::var("LLM_APP_TITLE").unwrap_or(defaults.app_title);

        Self {
            api_key,
            base_url,
            timeout_secs,
            referer,
            app_title,
        }
    }

    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
