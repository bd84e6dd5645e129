//! gk-core: stable foundation for graphkit.
//!
//! Contains:
//! - ids (stable compact node ids)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GkError, GkResult};
pub use ids::*;
pub use numeric::*;
