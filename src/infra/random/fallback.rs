//! Provider-then-fallback composition.

use async_trait::async_trait;

use super::{RandomError, RandomSource};

/// Asks `primary` first and answers from `fallback` whenever it fails.
///
/// Primary failures are logged and never returned.
#[derive(Debug, Clone)]
pub struct FallbackRandom<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackRandom<P, F> {
    /// Compose two sources.
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P, F> RandomSource for FallbackRandom<P, F>
where
    P: RandomSource,
    F: RandomSource,
{
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn next_in_range(&self, min: i64, max: i64) -> Result<i64, RandomError> {
        match self.primary.next_in_range(min, max).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "random provider failed, using fallback"
                );
                self.fallback.next_in_range(min, max).await
            }
        }
    }
}
