//! Thread-safe handle to a [`Router`].

use std::sync::Arc;

use parking_lot::RwLock;

use super::Router;
use crate::domain::{Amount, Audit, BuyQuote, TradeOutcome};
use crate::error::Result;

/// A cloneable handle that serializes trades.
///
/// Trades take the write lock, so at most one mutation is in flight and no
/// reader ever sees a half-applied trade.  Reads share the lock with each
/// other.
#[derive(Clone, Debug)]
pub struct SharedRouter {
    inner: Arc<RwLock<Router>>,
}

impl SharedRouter {
    pub fn new(router: Router) -> Self {
        Self {
            inner: Arc::new(RwLock::new(router)),
        }
    }

    /// See [`Router::buy`].
    ///
    /// # Errors
    ///
    /// Same as [`Router::buy`].
    pub fn buy(&self, foreign_amount: Amount, min_native_out: Amount) -> Result<TradeOutcome> {
        self.inner.write().buy(foreign_amount, min_native_out)
    }

    /// See [`Router::sell`].
    ///
    /// # Errors
    ///
    /// Same as [`Router::sell`].
    pub fn sell(&self, native_amount: Amount, min_foreign_out: Amount) -> Result<TradeOutcome> {
        self.inner.write().sell(native_amount, min_foreign_out)
    }

    /// # Errors
    ///
    /// Same as [`Router::quote_buy`].
    pub fn quote_buy(&self, foreign_amount: Amount) -> Result<BuyQuote> {
        self.inner.read().quote_buy(foreign_amount)
    }

    /// # Errors
    ///
    /// Same as [`Router::audit`].
    pub fn audit(&self) -> Result<Audit> {
        self.inner.read().audit()
    }

    /// Runs `f` against a consistent snapshot.
    pub fn read<R>(&self, f: impl FnOnce(&Router) -> R) -> R {
        let router = self.inner.read();
        f(&router)
    }
}

impl From<Router> for SharedRouter {
    fn from(router: Router) -> Self {
        Self::new(router)
    }
}
