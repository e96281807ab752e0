//! Configuration for treasury-owned liquidity buckets.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Ppm};
use crate::error::{EngineError, Result};

/// One bucket: a label and its share of every allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BucketConfig {
    /// Human-readable name, used in logs.
    pub label: String,
    /// Fraction of each allocation routed to this bucket.
    pub share: Ppm,
}

impl BucketConfig {
    /// Creates a bucket entry.
    pub fn new(label: impl Into<String>, share: Ppm) -> Self {
        Self {
            label: label.into(),
            share,
        }
    }
}

/// Bucket layout of the treasury allocator.
///
/// # Validation
///
/// - At least one bucket.
/// - Every share is a valid fraction and the shares sum to exactly `PPM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreasuryConfig {
    /// Buckets in allocation order; the last one absorbs rounding dust.
    pub buckets: Vec<BucketConfig>,
    /// Single-sided remainders below this stay buffered instead of being
    /// swapped.
    pub zap_dust_threshold: Amount,
}

impl Default for TreasuryConfig {
    fn default() -> Self {
        Self {
            buckets: vec![
                BucketConfig::new("anchor", Ppm::new(500_000)),
                BucketConfig::new("building", Ppm::new(166_667)),
                BucketConfig::new("capital", Ppm::new(166_667)),
                BucketConfig::new("dormant", Ppm::new(166_666)),
            ],
            zap_dust_threshold: Amount::ZERO,
        }
    }
}

impl TreasuryConfig {
    /// A single bucket that receives everything.
    pub fn single() -> Self {
        Self {
            buckets: vec![BucketConfig::new("treasury", Ppm::ONE)],
            zap_dust_threshold: Amount::ZERO,
        }
    }

    /// Validates the bucket layout.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] on the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.buckets.is_empty() {
            return Err(EngineError::InvalidConfig("at least one bucket is required"));
        }
        if self.buckets.iter().any(|b| !b.share.is_valid_fraction()) {
            return Err(EngineError::InvalidConfig(
                "bucket share must not exceed 1_000_000",
            ));
        }
        let total = Ppm::checked_sum(self.buckets.iter().map(|b| &b.share))
            .map_err(|_| EngineError::InvalidConfig("bucket shares overflow"))?;
        if total != Ppm::ONE {
            return Err(EngineError::InvalidConfig(
                "bucket shares must sum to 1_000_000",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        let cfg = TreasuryConfig::default();
        assert_eq!(cfg.buckets.len(), 4);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn single_bucket_is_valid() {
        assert_eq!(TreasuryConfig::single().validate(), Ok(()));
    }

    #[test]
    fn empty_rejected() {
        let cfg = TreasuryConfig {
            buckets: Vec::new(),
            ..TreasuryConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn short_sum_rejected() {
        let cfg = TreasuryConfig {
            buckets: vec![
                BucketConfig::new("a", Ppm::new(500_000)),
                BucketConfig::new("b", Ppm::new(499_999)),
            ],
            ..TreasuryConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(EngineError::InvalidConfig("bucket shares must sum to 1_000_000"))
        );
    }

    #[test]
    fn oversized_share_rejected() {
        let cfg = TreasuryConfig {
            buckets: vec![
                BucketConfig::new("a", Ppm::new(2_000_000)),
                BucketConfig::new("b", Ppm::new(0)),
            ],
            ..TreasuryConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
