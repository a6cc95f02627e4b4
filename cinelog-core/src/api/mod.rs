//! HTTP client for the tracker's film endpoints
//!
//! Mirrors the page's CRUD calls: deleting and refreshing a film, and
//! replacing or deleting its feedback entry.

pub mod client;
pub mod error;

pub use client::{FilmsApi, FilmsClient};
pub use error::ApiError;
