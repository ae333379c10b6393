//! Top-N count used by every ranking query.

use log::warn;
use polars::prelude::IdxSize;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Invalid parameter: top-N count {value} outside {min}..={max}")]
    InvalidParameter { value: i64, min: usize, max: usize },
}

/// Number of leading entries to keep, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TopN(usize);

impl TopN {
    pub const MIN: usize = 1;
    pub const MAX: usize = 9;
    /// Initial slider position for the category charts.
    pub const DEFAULT: TopN = TopN(5);
    /// Size of the most-reviewed products ranking.
    pub const PRODUCTS: TopN = TopN(5);

    pub fn try_new(value: i64) -> Result<Self, ParameterError> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(ParameterError::InvalidParameter {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as usize))
    }

    /// Like [`TopN::try_new`], but recovers by clamping to the nearest bound.
    pub fn clamped(value: i64) -> Self {
        match Self::try_new(value) {
            Ok(n) => n,
            Err(err) => {
                let n = value.clamp(Self::MIN as i64, Self::MAX as i64) as usize;
                warn!("{err}; using {n}");
                Self(n)
            }
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub(crate) fn as_idx(self) -> IdxSize {
        self.0 as IdxSize
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self::DEFAULT
    }
}
