use serde::{Deserialize, Serialize};

use crate::encoding::{normalize_keyword, TimeWindow};
use crate::error::Result;

/// Stage-2 payload, handed back exactly as the service sent it.
pub type TrendSeries = serde_json::Value;

/// A baseline-vs-target lookup over one time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    baseline_keyword: String,
    target_keyword: String,
    time_window: TimeWindow,
}

impl ComparisonRequest {
    /// Validates and normalizes both keywords.
    pub fn new(baseline: &str, target: &str, time_window: TimeWindow) -> Result<Self> {
        Ok(Self {
            baseline_keyword: normalize_keyword(baseline)?,
            target_keyword: normalize_keyword(target)?,
            time_window,
        })
    }

    pub fn baseline_keyword(&self) -> &str {
        &self.baseline_keyword
    }

    pub fn target_keyword(&self) -> &str {
        &self.target_keyword
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }

    /// The `req` payload for the explore endpoint.
    pub(crate) fn explore_descriptor(&self) -> ExploreDescriptor<'_> {
        let time = self.time_window.time_token();
        ExploreDescriptor {
            comparison_item: [
                ComparisonItem {
                    keyword: &self.baseline_keyword,
                    geo: "",
                    time,
                },
                ComparisonItem {
                    keyword: &self.target_keyword,
                    geo: "",
                    time,
                },
            ],
            category: 0,
            property: "",
        }
    }
}

/// Opaque credential issued by the explore call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExploreToken(String);

impl ExploreToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Server-echoed widget request, forwarded to stage 2 untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetRequestDescriptor(serde_json::Value);

impl WidgetRequestDescriptor {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

// --- Wire types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExploreDescriptor<'a> {
    pub comparison_item: [ComparisonItem<'a>; 2],
    pub category: u32,
    pub property: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ComparisonItem<'a> {
    pub keyword: &'a str,
    pub geo: &'a str,
    pub time: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExploreResponse {
    pub widgets: Option<Vec<Widget>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Widget {
    pub token: Option<serde_json::Value>,
    pub request: Option<serde_json::Value>,
}
