use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://trends.google.com/trends";
pub const DEFAULT_BASELINE_KEYWORD: &str = "gpts";
pub const DEFAULT_LOCALE: &str = "zh-CN";
pub const DEFAULT_TZ_OFFSET: &str = "-480";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection and request parameters for the trends service.
#[derive(Debug, Clone)]
pub struct TrendsConfig {
    /// Service root; `/api/explore`, `/api/widgetdata/multiline` and
    /// `/explore` are resolved against it.
    pub base_url: String,
    /// Reference term every tracked keyword is compared against.
    pub baseline_keyword: String,
    /// UI locale sent as `hl`.
    pub locale: String,
    /// Timezone offset in minutes sent as `tz`.
    pub tz_offset: String,
    /// Upper bound for each outbound call.
    pub timeout: Duration,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            baseline_keyword: DEFAULT_BASELINE_KEYWORD.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            tz_offset: DEFAULT_TZ_OFFSET.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TrendsConfig {
    pub fn explore_endpoint(&self) -> String {
        format!("{}/api/explore", self.base())
    }

    pub fn multiline_endpoint(&self) -> String {
        format!("{}/api/widgetdata/multiline", self.base())
    }

    pub fn explore_page(&self) -> String {
        format!("{}/explore", self.base())
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
