//! Client for the Google Trends explore → widgetdata exchange.
//!
//! A lookup is two sequential GETs. The explore call describes a
//! baseline-vs-target comparison and returns a token plus an echoed widget
//! request. The widgetdata call trades both for the time series. Every body
//! is prefixed with `)]}',`, which is stripped before parsing.

pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod explore;
pub mod link;
pub mod series;
pub mod transport;
pub mod types;

pub use client::TrendsClient;
pub use config::TrendsConfig;
pub use encoding::{
    encode_keyword_for_transport, normalize_keyword, resolve_time_window, KeywordEncoding,
    TimeWindow,
};
pub use error::{Result, TrendsError};
pub use link::explore_link;
pub use transport::{HttpTransport, TrendsTransport};
pub use types::{ComparisonRequest, ExploreToken, TrendSeries, WidgetRequestDescriptor};

#[cfg(any(test, feature = "test-support"))]
pub use transport::{MockTransport, RecordedCall};
