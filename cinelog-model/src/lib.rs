//! Core data model definitions shared across cinelog crates.
#![allow(missing_docs)]

pub mod entry;
pub mod error;
pub mod ids;
pub mod prelude;
pub mod rating;

pub use entry::{Entry, EntryPayload};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ImdbId;
pub use rating::{Rating, RatingSource};
