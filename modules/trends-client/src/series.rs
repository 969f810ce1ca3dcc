//! Stage two: exchange token + descriptor for the time series.

use tracing::debug;

use crate::client::{parse_prefixed_json, TrendsClient};
use crate::error::Result;
use crate::types::{ExploreToken, TrendSeries, WidgetRequestDescriptor};

impl TrendsClient {
    /// Fetch the multiline widget data. The parsed body is returned as-is;
    /// its shape is the caller's concern.
    pub async fn fetch_series(
        &self,
        token: &ExploreToken,
        descriptor: &WidgetRequestDescriptor,
    ) -> Result<TrendSeries> {
        let req = serde_json::to_string(descriptor.as_value())?;

        let [hl, tz] = self.common_params();
        let query = [hl, ("req", req), ("token", token.as_str().to_string()), tz];
        let url = self.config.multiline_endpoint();
        debug!(url = %url, "Requesting widget data");

        let body = self.transport.get(&url, &query).await?;
        parse_prefixed_json(&body)
    }
}
