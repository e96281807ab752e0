//! Three-state result for internal sub-steps that may fall back to buffering.

use super::AssetAmounts;
use crate::error::EngineError;

/// How far an internal sub-step got.
///
/// Buckets and the fee burner never propagate failures of their own
/// deposit, swap or burn steps; they report them through this type and keep
/// whatever was not consumed in their buffers.
///
/// # Examples
///
/// ```
/// use tmctol_engine::domain::Settlement;
/// use tmctol_engine::error::EngineError;
///
/// let s: Settlement<u32> = Settlement::Deferred { reason: EngineError::NoLiquidity };
/// assert!(s.is_deferred());
/// assert_eq!(s.applied(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement<T> {
    /// Fully applied; nothing left buffered.
    Applied(T),
    /// Applied, with `remainder` still held in the buffer.
    PartiallyApplied {
        /// What was applied.
        applied: T,
        /// What stays buffered for the next attempt.
        remainder: AssetAmounts,
    },
    /// Nothing applied; the input stays buffered.
    Deferred {
        /// Why the step did not run.
        reason: EngineError,
    },
}

impl<T> Settlement<T> {
    /// Returns the applied payload, if any.
    pub const fn applied(&self) -> Option<&T> {
        match self {
            Self::Applied(v) | Self::PartiallyApplied { applied: v, .. } => Some(v),
            Self::Deferred { .. } => None,
        }
    }

    /// Returns `true` if the step was deferred.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred { .. })
    }

    /// Returns `true` if the step fully applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns the deferral reason, if any.
    pub const fn reason(&self) -> Option<&EngineError> {
        match self {
            Self::Deferred { reason } => Some(reason),
            _ => None,
        }
    }
}
