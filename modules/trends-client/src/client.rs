use std::sync::Arc;

use tracing::info;

use crate::config::TrendsConfig;
use crate::error::Result;
use crate::transport::{HttpTransport, TrendsTransport};
use crate::types::{ComparisonRequest, TrendSeries};

/// Anti-JSON-hijacking prefix the service puts in front of every body.
pub(crate) const XSSI_PREFIX: &str = ")]}',";

/// Stateless trends lookup client. Cheap to clone; concurrent lookups share
/// nothing but the transport.
#[derive(Clone)]
pub struct TrendsClient {
    pub(crate) transport: Arc<dyn TrendsTransport>,
    pub(crate) config: TrendsConfig,
}

impl TrendsClient {
    pub fn new(config: TrendsConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: TrendsConfig, transport: Arc<dyn TrendsTransport>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &TrendsConfig {
        &self.config
    }

    /// Explore, then widgetdata. A failed first stage never reaches the second.
    pub async fn get_trend(&self, req: &ComparisonRequest) -> Result<TrendSeries> {
        info!(
            baseline = req.baseline_keyword(),
            target = req.target_keyword(),
            window = %req.time_window(),
            "Fetching trend comparison"
        );

        let (token, descriptor) = self.negotiate(req).await?;
        let series = self.fetch_series(&token, &descriptor).await?;

        info!(target = req.target_keyword(), "Trend comparison fetched");
        Ok(series)
    }

    /// The `hl` and `tz` parameters shared by both stages.
    pub(crate) fn common_params(&self) -> [(&'static str, String); 2] {
        [
            ("hl", self.config.locale.clone()),
            ("tz", self.config.tz_offset.clone()),
        ]
    }
}

/// Drop the anti-hijacking prefix if present and parse what remains.
pub(crate) fn parse_prefixed_json(body: &str) -> Result<serde_json::Value> {
    let trimmed = body.trim_start();
    let json = trimmed.strip_prefix(XSSI_PREFIX).unwrap_or(trimmed);
    Ok(serde_json::from_str(json)?)
}
