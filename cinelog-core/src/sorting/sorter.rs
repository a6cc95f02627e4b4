//! Column sorting for tables
//!
//! [`TableSorter::sort`] reads one column through [`RowSource`], orders the
//! rows with the column's [`ParseStrategy`](super::ParseStrategy), moves them
//! through [`RowSink`] and returns the flipped [`SortState`].

use super::keys::ColumnKey;
use super::strategy::ColumnPolicy;
use super::traits::{RowSink, RowSource};
use super::utils::stable_sort_indices;
use crate::error::SortError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction to use for the next sort of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub ascending: bool,
}

impl SortState {
    pub fn ascending() -> Self {
        Self { ascending: true }
    }

    pub fn descending() -> Self {
        Self { ascending: false }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self {
            ascending: !self.ascending,
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::ascending()
    }
}

/// Row order computed for one sort, not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPlan {
    pub column: usize,
    pub ascending: bool,
    /// `order[i]` is the current index of the row that moves to position `i`
    pub order: Vec<usize>,
}

impl SortPlan {
    /// Whether applying the plan would leave every row where it is
    pub fn is_identity(&self) -> bool {
        self.order.iter().enumerate().all(|(pos, &idx)| pos == idx)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableSorter {
    policy: ColumnPolicy,
}

impl TableSorter {
    pub fn new(policy: ColumnPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ColumnPolicy {
        &self.policy
    }

    /// Compute the row order for `column` without touching the table.
    ///
    /// Fails with [`SortError::InvalidColumn`] when any row lacks the column.
    pub fn plan<S>(&self, source: &S, column: usize, state: SortState) -> Result<SortPlan, SortError>
    where
        S: RowSource + ?Sized,
    {
        let strategy = self.policy.strategy_for(column);

        // Extract keys once; a missing cell aborts before anything moves
        let keys = (0..source.row_count())
            .map(|row| {
                source
                    .cell(row, column)
                    .map(|text| strategy.key(text.trim()))
                    .ok_or_else(|| SortError::InvalidColumn {
                        column,
                        row,
                        width: source.cell_count(row),
                    })
            })
            .collect::<Result<Vec<ColumnKey>, _>>()?;

        let order = stable_sort_indices(keys.len(), |a, b| {
            keys[a].compare_with_order(&keys[b], state.ascending)
        });

        debug!(
            column,
            ascending = state.ascending,
            %strategy,
            rows = keys.len(),
            "planned table sort"
        );

        Ok(SortPlan {
            column,
            ascending: state.ascending,
            order,
        })
    }

    /// Sort the table's rows by `column` and return the state for the next call.
    ///
    /// On error the table is left as it was and no state change happens.
    pub fn sort<T>(&self, table: &mut T, column: usize, state: SortState) -> Result<SortState, SortError>
    where
        T: RowSource + RowSink + ?Sized,
    {
        let plan = self.plan(&*table, column, state)?;
        if !plan.is_identity() {
            table.reorder(&plan.order)?;
        }
        Ok(state.toggled())
    }
}
