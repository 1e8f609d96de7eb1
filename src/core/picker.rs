//! Uniform pick among ranked candidates.

use std::sync::Arc;

use crate::infra::random::{RandomError, RandomSource};

/// Chooses one element uniformly from a ranked list using an injected source.
#[derive(Clone)]
pub struct RandomPicker {
    source: Arc<dyn RandomSource>,
}

impl RandomPicker {
    /// Picker drawing from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Index in `[0, len - 1]`. A single-element list needs no draw.
    ///
    /// # Errors
    ///
    /// Fails for `len == 0` or when the source itself fails.
    pub async fn pick_index(&self, len: usize) -> Result<usize, RandomError> {
        match len {
            0 => Err(RandomError::InvalidRange { min: 0, max: -1 }),
            1 => Ok(0),
            _ => {
                let max = i64::try_from(len - 1).unwrap_or(i64::MAX);
                let value = self.source.next_in_range(0, max).await?;
                usize::try_from(value)
                    .ok()
                    .filter(|i| *i < len)
                    .ok_or(RandomError::OutOfRange { value, min: 0, max })
            }
        }
    }

    /// Uniformly chosen element of `items`.
    ///
    /// # Errors
    ///
    /// See [`pick_index`](Self::pick_index).
    pub async fn pick<'a, T>(&self, items: &'a [T]) -> Result<&'a T, RandomError> {
        let index = self.pick_index(items.len()).await?;
        Ok(&items[index])
    }
}

impl std::fmt::Debug for RandomPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomPicker")
            .field("source", &self.source.name())
            .finish()
    }
}
