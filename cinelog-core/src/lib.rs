//! # cinelog core
//!
//! Core library for the cinelog movie tracker: the behaviour behind the
//! tracker's pages, expressed as plain types that can be driven and tested
//! without a browser.
//!
//! ## Overview
//!
//! - **Table sorting**: sort a table by one column, parsing ratings,
//!   percentages, fractions and years from their display text
//! - **Watched filter**: hide films that have already been watched
//! - **Feedback entries**: edit / save / cancel flow for a film's entry
//! - **Search**: validate the menu search bar's IMDb id
//! - **Films API**: typed async client for the backend's film endpoints
//!
//! ## Architecture
//!
//! - [`sorting`]: column policy, sort keys and the [`TableSorter`]
//! - [`table`]: owned in-memory table implementing the sorter's row seams
//! - [`filter`], [`feedback`], [`search`]: page behaviours
//! - [`api`]: reqwest-backed [`FilmsClient`]
//!
//! ## Examples
//!
//! ```
//! use cinelog_core::{Row, SortState, Table, TableSorter};
//!
//! let mut table = Table::new(["Title", "Score"]).with_rows([
//!     Row::new(["Heat", "87%"]),
//!     Row::new(["Cats", "N/A"]),
//!     Row::new(["Ran", "45%"]),
//! ]);
//!
//! let sorter = TableSorter::default();
//! let next = sorter.sort(&mut table, 1, SortState::default()).unwrap();
//!
//! assert_eq!(table.column_values(1), vec!["N/A", "45%", "87%"]);
//! assert!(!next.ascending);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod api;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod search;
pub mod sorting;
pub mod table;

pub use api::{ApiError, FilmsApi, FilmsClient};
pub use cinelog_model as model;
pub use error::{CoreError, Result, SortError};
pub use feedback::{EntryEditor, FeedbackList};
pub use filter::WatchFilter;
pub use search::{parse_search, resolve_search};
pub use sorting::{
    ColumnPolicy, ParseStrategy, RowSink, RowSource, SortPlan, SortState,
    TableSorter,
};
pub use table::{Row, Table};
