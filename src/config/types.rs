use serde::Deserialize;

/// Main configuration structure for Linkpath
///
/// Every section is optional in the TOML file; missing sections and keys take
/// their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub fetch: FetchConfig,
    pub extract: ExtractConfig,
}

/// Frontier expansion configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of vertices dequeued per round
    #[serde(rename = "batch-size")]
    pub batch_size: usize,

    /// Maximum number of expansions fetching at the same time, across rounds
    #[serde(rename = "max-concurrency")]
    pub max_concurrency: usize,

    /// Weight given to every discovered link
    #[serde(rename = "edge-weight")]
    pub edge_weight: u64,

    /// Stop after this many rounds even if the frontier is not empty
    #[serde(rename = "max-rounds")]
    pub max_rounds: Option<u32>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            batch_size: 25,
            max_concurrency: 10,
            edge_weight: 1,
            max_rounds: None,
        }
    }
}

/// HTTP retrieval configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Refuse plain http URLs
    #[serde(rename = "https-only")]
    pub https_only: bool,

    /// Proxy for all requests
    #[serde(rename = "proxy-url")]
    pub proxy_url: Option<String>,

    #[serde(rename = "proxy-username")]
    pub proxy_username: Option<String>,

    #[serde(rename = "proxy-password")]
    pub proxy_password: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("linkpath/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            https_only: false,
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
        }
    }
}

/// Link extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// CSS selector scoping which links are followed (empty = whole page)
    #[serde(rename = "content-selector")]
    pub content_selector: String,

    /// Only follow hrefs starting with this prefix (as written in the page)
    #[serde(rename = "href-prefix")]
    pub href_prefix: Option<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            content_selector: "#content".to_string(),
            href_prefix: Some("/wiki".to_string()),
        }
    }
}
