//! Unified error type for the engine.
//!
//! Every fallible operation in the crate returns [`EngineError`].  The
//! variants fall into four groups:
//!
//! | Group | Variants | Meaning |
//! |-------|----------|---------|
//! | Construction | `InvalidConfig` | The system must not start. |
//! | Operation-local | `ZeroMint`, `InsufficientSupply`, `NoLiquidity`, `InsufficientLiquidity`, `InsufficientInitialLiquidity` | The caller got no result and may retry with other parameters. |
//! | Input rejection | `SlippageExceeded`, `BelowMinimum`, `BootstrapTooSmall`, `AmountTooSmall`, `NoRoute`, `PoolNotInitialized` | The request was refused; not a system fault. |
//! | Arithmetic guard | `DivisionByZero`, `Overflow`, `Underflow` | Should be unreachable after validation; treat as a bug signal. |
//!
//! A rejected operation leaves state untouched.  The only places where an
//! error is absorbed instead of returned are the buffering fallbacks of
//! [`LiquidityBucket`](crate::treasury::LiquidityBucket) and
//! [`FeeBurner`](crate::fees::FeeBurner), which record it in a
//! [`Settlement::Deferred`](crate::domain::Settlement::Deferred).

/// Errors produced by the minting curve, pool, treasury, burner and router.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A configuration invariant does not hold.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The payment is too small to mint a single unit.
    #[error("payment mints zero tokens")]
    ZeroMint,

    /// Burn amount exceeds the outstanding supply.
    #[error("burn amount exceeds supply")]
    InsufficientSupply,

    /// The pool has no reserves yet.
    #[error("pool has no liquidity")]
    NoLiquidity,

    /// The pool cannot satisfy the request (deposit mints no shares, or
    /// swap output rounds to zero).
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The first deposit into an empty pool mints no shares.
    #[error("initial deposit mints no liquidity")]
    InsufficientInitialLiquidity,

    /// The achievable output is below the caller's minimum.
    #[error("output below requested minimum")]
    SlippageExceeded,

    /// The trade amount is below the per-trade minimum.
    #[error("amount below minimum trade size")]
    BelowMinimum,

    /// The first trade against an empty pool is below the bootstrap minimum.
    #[error("amount below bootstrap minimum")]
    BootstrapTooSmall,

    /// Nothing is left after fees, or there is nothing to process.
    #[error("amount too small")]
    AmountTooSmall,

    /// Neither the curve nor the pool can fill the trade.
    #[error("no route available")]
    NoRoute,

    /// Selling requires an initialized pool.
    #[error("pool not initialized")]
    PoolNotInitialized,

    /// Division by zero in a fixed-point helper.
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),
}

impl EngineError {
    /// Returns `true` for errors caused by the caller's input rather than
    /// by system state.
    #[must_use]
    pub const fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            Self::SlippageExceeded
                | Self::BelowMinimum
                | Self::BootstrapTooSmall
                | Self::AmountTooSmall
                | Self::NoRoute
                | Self::PoolNotInitialized
        )
    }

    /// Returns `true` for the arithmetic guards that validation should make
    /// unreachable.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::Overflow(_) | Self::Underflow(_)
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, EngineError>;
