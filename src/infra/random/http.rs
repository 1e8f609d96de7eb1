//! Remote random-number provider over HTTP.

use std::time::Duration;

use async_trait::async_trait;

use super::{check_range, RandomError, RandomSource};

/// Default public provider.
pub const DEFAULT_RANDOM_URL: &str = "http://www.randomnumberapi.com/api/v1.0/random";

/// Calls `GET {url}?min={min}&max={max}&count=1` and expects a JSON array of integers.
#[derive(Debug, Clone)]
pub struct HttpRandom {
    client: reqwest::Client,
    url: String,
}

impl HttpRandom {
    /// Create a provider client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RandomError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RandomSource for HttpRandom {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn next_in_range(&self, min: i64, max: i64) -> Result<i64, RandomError> {
        if min > max {
            return Err(RandomError::InvalidRange { min, max });
        }
        let response = self
            .client
            .get(&self.url)
            .query(&[("min", min), ("max", max), ("count", 1)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RandomError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let numbers: Vec<i64> =
            serde_json::from_str(&body).map_err(|e| RandomError::Malformed(e.to_string()))?;
        let value = numbers
            .first()
            .copied()
            .ok_or_else(|| RandomError::Malformed("empty array".into()))?;
        check_range(value, min, max)
    }
}
