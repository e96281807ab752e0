//! Route selection for buys.

use crate::domain::{Amount, Route};
use crate::error::{EngineError, Result};

/// Picks the route for a buy from the two native quotes.
///
/// A route is viable when its output is positive and at least `min_out`.
/// The curve wins whenever it is viable and the pool is not strictly
/// better; equal outputs go to the curve.
///
/// # Errors
///
/// - [`EngineError::SlippageExceeded`] if neither route is viable and the
///   pool quoted something.
/// - [`EngineError::NoRoute`] if neither route is viable and the pool
///   quoted nothing.
///
/// # Examples
///
/// ```
/// use tmctol_engine::domain::{Amount, Route};
/// use tmctol_engine::router::select_route;
///
/// let r = select_route(Amount::new(10), Amount::new(10), Amount::ZERO);
/// assert_eq!(r, Ok(Route::Curve));
/// ```
pub fn select_route(curve_out: Amount, pool_out: Amount, min_out: Amount) -> Result<Route> {
    let viable = |out: Amount| !out.is_zero() && out >= min_out;
    match (viable(curve_out), viable(pool_out)) {
        (true, false) => Ok(Route::Curve),
        (true, true) if curve_out >= pool_out => Ok(Route::Curve),
        (_, true) => Ok(Route::Pool),
        (false, false) if !pool_out.is_zero() => Err(EngineError::SlippageExceeded),
        (false, false) => Err(EngineError::NoRoute),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(v: u128) -> Amount {
        Amount::new(v)
    }

    #[test]
    fn tie_goes_to_curve() {
        assert_eq!(select_route(a(100), a(100), a(1)), Ok(Route::Curve));
    }

    #[test]
    fn better_pool_wins() {
        assert_eq!(select_route(a(99), a(100), a(1)), Ok(Route::Pool));
    }

    #[test]
    fn better_curve_wins() {
        assert_eq!(select_route(a(101), a(100), a(1)), Ok(Route::Curve));
    }

    #[test]
    fn only_viable_route_wins() {
        assert_eq!(select_route(a(100), a(0), a(0)), Ok(Route::Curve));
        assert_eq!(select_route(a(0), a(100), a(0)), Ok(Route::Pool));
        // curve above minimum, larger pool below it
        assert_eq!(select_route(a(50), a(40), a(45)), Ok(Route::Curve));
        assert_eq!(select_route(a(40), a(50), a(45)), Ok(Route::Pool));
    }

    #[test]
    fn pool_quote_below_minimum_is_slippage() {
        assert_eq!(select_route(a(10), a(20), a(30)), Err(EngineError::SlippageExceeded));
        assert_eq!(select_route(a(0), a(20), a(30)), Err(EngineError::SlippageExceeded));
    }

    #[test]
    fn nothing_quoted_is_no_route() {
        assert_eq!(select_route(a(0), a(0), a(0)), Err(EngineError::NoRoute));
        // a curve quote alone below the minimum still reports no route
        assert_eq!(select_route(a(10), a(0), a(30)), Err(EngineError::NoRoute));
    }
}
