use crate::api::ApiError;
use cinelog_model::ModelError;
use thiserror::Error;

/// Failures of a table sort
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("invalid column {column}: row {row} has {width} cells")]
    InvalidColumn {
        column: usize,
        row: usize,
        width: usize,
    },

    #[error("invalid row order: {reason}")]
    InvalidPermutation { reason: String },
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Sort(#[from] SortError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("invalid imdb id")]
    InvalidSearch { input: String },

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("entry {0} not found")]
    EntryNotFound(i64),
}

pub type Result<T> = std::result::Result<T, CoreError>;
