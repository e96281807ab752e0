//! Common quoting interface for the two buy routes.

use crate::domain::Amount;

/// A venue that can say how much native a foreign input would buy.
///
/// Both the minting curve and the pool implement this, which lets the
/// router compare them without caring which is which.  Quotes never fail:
/// an unavailable route quotes zero.
pub trait QuoteSource {
    /// Native delivered to the payer for `foreign_in`, or zero if the
    /// venue cannot fill it.
    fn quote_native_out(&self, foreign_in: Amount) -> Amount;
}
