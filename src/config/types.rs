use serde::{Deserialize, Serialize};

/// Page analysed when no other URL is configured.
pub const DEFAULT_URL: &str =
    "https://www.truecaller.com/blog/life-at-truecaller/life-as-an-android-engineer";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// How the page is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Page to fetch.
    #[serde(default = "default_url")]
    pub url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Absorb fetch failures and analyse empty content instead (default: true).
    #[serde(default = "default_fail_soft")]
    pub fail_soft: bool,
    /// User-Agent header sent with the request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// TUI redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Number of words listed in reports (default: 20).
    #[serde(default = "default_top_words")]
    pub top_words: usize,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_fail_soft() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("pagescan/{}", env!("CARGO_PKG_VERSION"))
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_top_words() -> usize {
    20
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            fail_soft: default_fail_soft(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            top_words: default_top_words(),
        }
    }
}
