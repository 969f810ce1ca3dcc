//! Stage one: trade a comparison for a widget token.

use tracing::debug;

use crate::client::{parse_prefixed_json, TrendsClient};
use crate::error::{Result, TrendsError};
use crate::types::{ComparisonRequest, ExploreResponse, ExploreToken, WidgetRequestDescriptor};

impl TrendsClient {
    /// Issue the explore request and pull the token and echoed request out of
    /// the first widget.
    pub async fn negotiate(
        &self,
        req: &ComparisonRequest,
    ) -> Result<(ExploreToken, WidgetRequestDescriptor)> {
        let descriptor = serde_json::to_string(&req.explore_descriptor())
            .map_err(|e| TrendsError::InvalidParameter(e.to_string()))?;

        let [hl, tz] = self.common_params();
        let query = [hl, ("req", descriptor), tz];
        let url = self.config.explore_endpoint();
        debug!(url = %url, window = %req.time_window(), "Requesting explore token");

        let body = self.transport.get(&url, &query).await?;
        parse_explore_body(&body)
    }
}

pub(crate) fn parse_explore_body(body: &str) -> Result<(ExploreToken, WidgetRequestDescriptor)> {
    let value = parse_prefixed_json(body)?;
    let response: ExploreResponse = serde_json::from_value(value)?;

    let widget = response
        .widgets
        .and_then(|widgets| widgets.into_iter().next())
        .ok_or_else(|| {
            TrendsError::MalformedResponse("explore response has no widgets".to_string())
        })?;

    let token = match widget.token {
        Some(serde_json::Value::String(token)) => token,
        _ => {
            return Err(TrendsError::MalformedResponse(
                "first widget has no token".to_string(),
            ))
        }
    };
    let request = widget.request.ok_or_else(|| {
        TrendsError::MalformedResponse("first widget has no request".to_string())
    })?;

    Ok((ExploreToken::new(token), WidgetRequestDescriptor::new(request)))
}
