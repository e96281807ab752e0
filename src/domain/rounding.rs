//! Explicit rounding direction for integer division.

/// Direction in which a division result is rounded.
///
/// Every division in the engine names its direction.  The convention is to
/// round against the counterparty: outputs and minted amounts go
/// [`Down`](Rounding::Down), required inputs and consumed reserves go
/// [`Up`](Rounding::Up).
///
/// # Examples
///
/// ```
/// use tmctol_engine::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward positive infinity (ceiling).
    Up,
    /// Toward zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` for [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
