//! Owned, in-memory movies table
//!
//! Stands in for the rendered overview table: a header row plus body rows
//! that carry the film's IMDb ID and watch status next to their cells.

use crate::error::SortError;
use crate::filter::WatchFilter;
use crate::sorting::{RowSink, RowSource, utils::apply_permutation};
use cinelog_model::ImdbId;
use serde::{Deserialize, Serialize};

/// One body row of the table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ImdbId>,
    #[serde(default)]
    pub watched: bool,
    pub cells: Vec<String>,
}

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row {
            key: None,
            watched: false,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_key(mut self, key: ImdbId) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_watched(mut self, watched: bool) -> Self {
        self.watched = watched;
        self
    }

    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Row>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the header whose text matches `name`, ignoring ASCII case
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.columns
            .iter()
            .position(|column| column.trim().eq_ignore_ascii_case(name))
    }

    /// Values of one column, top to bottom; rows without the cell are skipped
    pub fn column_values(&self, column: usize) -> Vec<&str> {
        self.rows.iter().filter_map(|row| row.cell(column)).collect()
    }

    /// Drop the row for a film, e.g. after the backend confirmed its deletion
    pub fn remove_by_key(&mut self, key: &ImdbId) -> Option<Row> {
        let idx = self
            .rows
            .iter()
            .position(|row| row.key.as_ref() == Some(key))?;
        Some(self.rows.remove(idx))
    }

    pub fn visible_rows(&self, filter: WatchFilter) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter().filter(move |row| filter.shows(row))
    }
}

impl RowSource for Table {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_count(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |row| row.cells.len())
    }

    fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.cell(column)
    }
}

impl RowSink for Table {
    fn reorder(&mut self, order: &[usize]) -> Result<(), SortError> {
        apply_permutation(&mut self.rows, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ImdbId {
        ImdbId::new(raw).unwrap()
    }

    fn sample() -> Table {
        Table::new(["Title", "Rating", "Year"]).with_rows([
            Row::new(["Heat", "8.3/10", "1995"]).with_key(id("tt0113277")),
            Row::new(["Alien", "8.5/10", "1979"])
                .with_key(id("tt0078748"))
                .with_watched(true),
        ])
    }

    #[test]
    fn column_index_ignores_case() {
        let table = sample();
        assert_eq!(table.column_index("rating"), Some(1));
        assert_eq!(table.column_index(" YEAR "), Some(2));
        assert_eq!(table.column_index("Director"), None);
    }

    #[test]
    fn remove_by_key_drops_only_that_film() {
        let mut table = sample();
        let removed = table.remove_by_key(&id("tt0113277")).unwrap();

        assert_eq!(removed.cells[0], "Heat");
        assert_eq!(table.column_values(0), vec!["Alien"]);
        assert!(table.remove_by_key(&id("tt0113277")).is_none());
    }

    #[test]
    fn row_source_reports_missing_cells() {
        let table = sample();
        assert_eq!(table.cell(1, 0), Some("Alien"));
        assert_eq!(table.cell(1, 3), None);
        assert_eq!(table.cell(5, 0), None);
        assert_eq!(table.cell_count(0), 3);
        assert_eq!(table.cell_count(5), 0);
    }

    #[test]
    fn deserializes_rows_without_optional_fields() {
        let table: Table = serde_json::from_str(
            r#"{"columns":["Title"],"rows":[{"cells":["Heat"]},{"key":"tt0078748","watched":true,"cells":["Alien"]}]}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].key, None);
        assert_eq!(table.rows()[1].key, Some(id("tt0078748")));
        assert!(table.rows()[1].watched);
    }
}
