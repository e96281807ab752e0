//! Fee collection and burning.

mod burner;

pub use burner::FeeBurner;
