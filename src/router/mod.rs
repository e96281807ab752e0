//! Trade routing.
//!
//! - [`Router`]: owns the engine state and executes buys and sells.
//! - [`select_route`]: the pure curve-versus-pool decision.
//! - [`SharedRouter`]: `Arc<RwLock<Router>>` handle for multi-threaded
//!   callers.

mod dispatch;
mod selection;
mod shared;

pub use dispatch::Router;
pub use selection::select_route;
pub use shared::SharedRouter;
