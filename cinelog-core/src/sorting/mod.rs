//! Sorting module for table columns
//!
//! This module provides:
//! - Row source/sink traits that decouple sorting from the table's storage
//! - Sort key extraction and comparison for display text
//! - Per-column parse strategies and the policy that picks them
//! - The table sorter and its explicit sort state

pub mod keys;
pub mod sorter;
pub mod strategy;
pub mod traits;
pub mod utils;


pub use keys::*;
pub use sorter::*;
pub use strategy::*;
pub use traits::*;
