//! Data models
//!
//! Read-only views of the backend's catalogue. Optional fields are typed
//! as `Option` and normalized while decoding, so callers never probe
//! nested JSON themselves.

pub mod cart;
pub mod genre;
pub mod product;
pub mod review;

// Re-exports
pub use cart::*;
pub use genre::*;
pub use product::*;
pub use review::*;
