use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::config::TrendsConfig;
use crate::error::{Result, TrendsError};

/// The service rejects requests that do not look like they come from a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Outbound GET seam. Implementations return the raw response body.
#[async_trait]
pub trait TrendsTransport: Send + Sync {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String>;
}

/// reqwest-backed transport used in production.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &TrendsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TrendsTransport for HttpTransport {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TrendsError::Transport(format!(
                "status {}: {}",
                status.as_u16(),
                truncate(&message, 200)
            )));
        }

        Ok(resp.text().await?)
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ---------------------------------------------------------------------------
// MockTransport (for tests)
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "test-support"))]
pub use mock::{MockTransport, RecordedCall};

#[cfg(any(test, feature = "test-support"))]
mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::TrendsTransport;
    use crate::error::{Result, TrendsError};

    /// One outbound request as seen by [`MockTransport`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub url: String,
        pub query: Vec<(String, String)>,
    }

    impl RecordedCall {
        pub fn param(&self, name: &str) -> Option<&str> {
            self.query
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    /// Replays queued bodies in order and records every call.
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<String>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_bodies<I, S>(bodies: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let mock = Self::new();
            for body in bodies {
                mock.push_body(body);
            }
            mock
        }

        pub fn push_body(&self, body: impl Into<String>) {
            self.responses.lock().unwrap().push_back(Ok(body.into()));
        }

        pub fn push_error(&self, err: TrendsError) {
            self.responses.lock().unwrap().push_back(Err(err));
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl TrendsTransport for MockTransport {
        async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
            self.calls.lock().unwrap().push(RecordedCall {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TrendsError::Transport("no queued response".to_string())))
        }
    }
}
