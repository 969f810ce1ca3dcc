//! Time-window and keyword encoding for the trends service.
//!
//! Everything here is pure. The same keyword ends up in two places: inside the
//! JSON `req` payload sent to the API, and inside the query string of the
//! user-facing explore link. A keyword containing a `"` is treated as an
//! exact-match phrase by the service, so it is normalized to exactly one pair
//! of surrounding quotes before either encoding is produced.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TrendsError};

/// Fixed range used for [`TimeWindow::All`]: the first day the service has
/// data for through a pinned "current" date.
pub const ALL_TIME_RANGE: &str = "2004-01-01 2024-12-31";

/// Supported comparison windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    OneHour,
    FourHours,
    OneDay,
    SevenDays,
    OneMonth,
    ThreeMonths,
    TwelveMonths,
    FiveYears,
    All,
}

impl TimeWindow {
    pub const ALL_WINDOWS: [TimeWindow; 9] = [
        TimeWindow::OneHour,
        TimeWindow::FourHours,
        TimeWindow::OneDay,
        TimeWindow::SevenDays,
        TimeWindow::OneMonth,
        TimeWindow::ThreeMonths,
        TimeWindow::TwelveMonths,
        TimeWindow::FiveYears,
        TimeWindow::All,
    ];

    /// Short code accepted from callers (`7d`, `12m`, `all`, ...).
    pub fn code(self) -> &'static str {
        match self {
            TimeWindow::OneHour => "1h",
            TimeWindow::FourHours => "4h",
            TimeWindow::OneDay => "1d",
            TimeWindow::SevenDays => "7d",
            TimeWindow::OneMonth => "1m",
            TimeWindow::ThreeMonths => "3m",
            TimeWindow::TwelveMonths => "12m",
            TimeWindow::FiveYears => "5y",
            TimeWindow::All => "all",
        }
    }

    /// Time-range token understood by the service.
    pub fn time_token(self) -> &'static str {
        match self {
            TimeWindow::OneHour => "now 1-H",
            TimeWindow::FourHours => "now 4-H",
            TimeWindow::OneDay => "now 1-d",
            TimeWindow::SevenDays => "now 7-d",
            TimeWindow::OneMonth => "today 1-m",
            TimeWindow::ThreeMonths => "today 3-m",
            TimeWindow::TwelveMonths => "today 12-m",
            TimeWindow::FiveYears => "today 5-y",
            TimeWindow::All => ALL_TIME_RANGE,
        }
    }
}

impl FromStr for TimeWindow {
    type Err = TrendsError;

    fn from_str(s: &str) -> Result<Self> {
        TimeWindow::ALL_WINDOWS
            .into_iter()
            .find(|w| w.code() == s.trim())
            .ok_or_else(|| TrendsError::InvalidParameter(format!("unsupported time window: {s:?}")))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a caller-supplied window code to the service's time-range token.
pub fn resolve_time_window(code: &str) -> Result<&'static str> {
    code.parse::<TimeWindow>().map(TimeWindow::time_token)
}

/// A keyword prepared for both transports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEncoding {
    /// Safe to splice inside a JSON string literal.
    pub json_form: String,
    /// Percent-encoded for a URL query string.
    pub url_form: String,
}

pub fn encode_keyword_for_transport(raw: &str) -> KeywordEncoding {
    if raw.contains('"') {
        let cleaned = raw.replace('"', "");
        KeywordEncoding {
            json_form: format!("\\\"{cleaned}\\\""),
            url_form: urlencoding::encode(&format!("\"{cleaned}\"")).into_owned(),
        }
    } else {
        KeywordEncoding {
            json_form: raw.to_string(),
            url_form: urlencoding::encode(raw).into_owned(),
        }
    }
}

/// Trim a keyword and collapse any embedded quoting into a single quoted
/// phrase. Fails when nothing is left.
pub fn normalize_keyword(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains('"') {
        let cleaned = trimmed.replace('"', "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            String::new()
        } else {
            format!("\"{cleaned}\"")
        }
    } else {
        trimmed.to_string()
    };

    if normalized.is_empty() {
        return Err(TrendsError::InvalidParameter(
            "keyword must not be empty".to_string(),
        ));
    }
    Ok(normalized)
}
