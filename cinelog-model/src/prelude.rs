//! Convenience re-exports for downstream crates.

pub use crate::entry::{Entry, EntryPayload};
pub use crate::error::ModelError;
pub use crate::ids::ImdbId;
pub use crate::rating::{Rating, RatingSource};
