//! Watched filter for the movies table

use crate::table::Row;
use serde::{Deserialize, Serialize};

/// Which rows of the movies table are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchFilter {
    #[default]
    All,
    NotWatchedOnly,
}

impl WatchFilter {
    /// Map the "not watched only" checkbox to a filter
    pub fn from_checkbox(checked: bool) -> Self {
        if checked {
            WatchFilter::NotWatchedOnly
        } else {
            WatchFilter::All
        }
    }

    pub fn shows(&self, row: &Row) -> bool {
        match self {
            WatchFilter::All => true,
            WatchFilter::NotWatchedOnly => !row.watched,
        }
    }
}
