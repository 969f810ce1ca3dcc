use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use trends_client::TrendsConfig;

/// Server configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub web_host: String,
    pub web_port: u16,

    /// Unset means keywords live in memory only.
    pub keyword_store_path: Option<PathBuf>,

    pub trends: TrendsConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = TrendsConfig::default();

        Ok(Self {
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("WEB_PORT must be a number")?,
            keyword_store_path: env::var("KEYWORD_STORE_PATH").ok().map(PathBuf::from),
            trends: TrendsConfig {
                base_url: env::var("TRENDS_BASE_URL").unwrap_or(defaults.base_url),
                baseline_keyword: baseline_keyword(
                    env::var("TRENDS_BASELINE_KEYWORD").ok(),
                    defaults.baseline_keyword,
                )?,
                locale: env::var("TRENDS_LOCALE").unwrap_or(defaults.locale),
                tz_offset: env::var("TRENDS_TZ_OFFSET").unwrap_or(defaults.tz_offset),
                timeout: timeout(env::var("TRENDS_TIMEOUT_SECS").ok(), defaults.timeout)?,
            },
        })
    }
}

/// An empty baseline would make every lookup fail as a caller error.
fn baseline_keyword(raw: Option<String>, default: String) -> Result<String> {
    match raw {
        None => Ok(default),
        Some(keyword) if keyword.trim().is_empty() => {
            bail!("TRENDS_BASELINE_KEYWORD must not be empty")
        }
        Some(keyword) => Ok(keyword),
    }
}

fn timeout(raw: Option<String>, default: Duration) -> Result<Duration> {
    let Some(secs) = raw else {
        return Ok(default);
    };
    let secs: u64 = secs
        .trim()
        .parse()
        .with_context(|| format!("TRENDS_TIMEOUT_SECS must be a number, got {secs:?}"))?;
    if secs == 0 {
        bail!("TRENDS_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
