//! Per-column parsing policy
//!
//! Every column is read through a [`ParseStrategy`]. A [`ColumnPolicy`] holds
//! the default strategy plus overrides for individual column indices.

use super::keys::{ColumnKey, SortValue, parse_leading_float};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Sentinel the backend renders for missing ratings
pub const NOT_AVAILABLE: &str = "N/A";

/// Column index of the release year in the movies table
pub const YEAR_COLUMN: usize = 2;

/// How the display text of a cell becomes a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStrategy {
    /// `N/A` is zero, then percentages, fractions and plain numbers
    #[default]
    Rating,
    /// Percentages, fractions and plain numbers; `N/A` stays text
    Numeric,
    /// Strict integers only; unparsed cells never reorder
    Integer,
    /// Raw text
    Text,
}

impl ParseStrategy {
    pub const ALL: [ParseStrategy; 4] = [
        ParseStrategy::Rating,
        ParseStrategy::Numeric,
        ParseStrategy::Integer,
        ParseStrategy::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStrategy::Rating => "rating",
            ParseStrategy::Numeric => "numeric",
            ParseStrategy::Integer => "integer",
            ParseStrategy::Text => "text",
        }
    }

    /// Extract the key for one (already trimmed) cell
    pub fn key(&self, cell: &str) -> ColumnKey {
        match self {
            ParseStrategy::Rating => ColumnKey::Value(parse_display_value(cell, true)),
            ParseStrategy::Numeric => {
                ColumnKey::Value(parse_display_value(cell, false))
            }
            ParseStrategy::Integer => ColumnKey::Integer(cell.parse::<i64>().ok()),
            ParseStrategy::Text => ColumnKey::Value(SortValue::text(cell)),
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ParseStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown parse strategy '{s}' (expected rating, numeric, integer or text)"
                )
            })
    }
}

/// Generic rating-style parsing shared by `Rating` and `Numeric`.
///
/// Any rule whose numeric parse fails falls back to the original text.
fn parse_display_value(cell: &str, not_available_is_zero: bool) -> SortValue {
    if not_available_is_zero && cell == NOT_AVAILABLE {
        return SortValue::number(0.0);
    }

    let parsed = if cell.contains('%') {
        parse_leading_float(&cell.replace('%', ""))
    } else if cell.contains('/') {
        let mut parts = cell.split('/').map(parse_leading_float);
        match (parts.next().flatten(), parts.next().flatten()) {
            (Some(numerator), Some(denominator)) if denominator != 0.0 => {
                Some(numerator / denominator)
            }
            _ => None,
        }
    } else {
        parse_leading_float(cell)
    };

    parsed
        .map(SortValue::number)
        .unwrap_or_else(|| SortValue::text(cell))
}

/// Mapping from column index to parse strategy, with a default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPolicy {
    default: ParseStrategy,
    overrides: BTreeMap<usize, ParseStrategy>,
}

impl ColumnPolicy {
    /// One strategy for every column
    pub fn uniform(strategy: ParseStrategy) -> Self {
        Self {
            default: strategy,
            overrides: BTreeMap::new(),
        }
    }

    /// Rating parsing everywhere, strict integers for the year column
    pub fn canonical() -> Self {
        Self::uniform(ParseStrategy::Rating)
            .with_override(YEAR_COLUMN, ParseStrategy::Integer)
    }

    /// Add or replace the strategy for a single column
    pub fn with_override(mut self, column: usize, strategy: ParseStrategy) -> Self {
        self.overrides.insert(column, strategy);
        self
    }

    pub fn default_strategy(&self) -> ParseStrategy {
        self.default
    }

    pub fn overrides(&self) -> impl Iterator<Item = (usize, ParseStrategy)> + '_ {
        self.overrides.iter().map(|(column, strategy)| (*column, *strategy))
    }

    /// Strategy in effect for `column`
    pub fn strategy_for(&self, column: usize) -> ParseStrategy {
        self.overrides
            .get(&column)
            .copied()
            .unwrap_or(self.default)
    }
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(key: ColumnKey) -> Option<f64> {
        match key {
            ColumnKey::Value(value) => value.as_number(),
            ColumnKey::Integer(value) => value.map(|v| v as f64),
        }
    }

    #[test]
    fn rating_treats_not_available_as_zero() {
        assert_eq!(number(ParseStrategy::Rating.key("N/A")), Some(0.0));
    }

    #[test]
    fn numeric_keeps_not_available_as_text() {
        assert_eq!(
            ParseStrategy::Numeric.key("N/A"),
            ColumnKey::Value(SortValue::text("N/A"))
        );
    }

    #[test]
    fn percentages_use_the_leading_number() {
        assert_eq!(number(ParseStrategy::Rating.key("87%")), Some(87.0));
        assert_eq!(number(ParseStrategy::Rating.key("12.5 %")), Some(12.5));
    }

    #[test]
    fn fractions_become_ratios() {
        assert_eq!(number(ParseStrategy::Rating.key("3/5")), Some(0.6));
        assert_eq!(number(ParseStrategy::Rating.key("7/10")), Some(0.7));
    }

    #[test]
    fn broken_fractions_fall_back_to_text() {
        assert_eq!(
            ParseStrategy::Rating.key("5/0"),
            ColumnKey::Value(SortValue::text("5/0"))
        );
        assert_eq!(
            ParseStrategy::Rating.key("and/or"),
            ColumnKey::Value(SortValue::text("and/or"))
        );
    }

    #[test]
    fn plain_values_parse_or_stay_text() {
        assert_eq!(number(ParseStrategy::Rating.key("142 min")), Some(142.0));
        assert_eq!(
            ParseStrategy::Rating.key("Heat"),
            ColumnKey::Value(SortValue::text("Heat"))
        );
    }

    #[test]
    fn integer_strategy_is_strict() {
        assert_eq!(ParseStrategy::Integer.key("1999"), ColumnKey::Integer(Some(1999)));
        assert_eq!(ParseStrategy::Integer.key("1999-2003"), ColumnKey::Integer(None));
        assert_eq!(ParseStrategy::Integer.key("abc"), ColumnKey::Integer(None));
    }

    #[test]
    fn text_strategy_never_parses() {
        assert_eq!(
            ParseStrategy::Text.key("10"),
            ColumnKey::Value(SortValue::text("10"))
        );
    }

    #[test]
    fn canonical_policy_overrides_year_column() {
        let policy = ColumnPolicy::canonical();
        assert_eq!(policy.strategy_for(0), ParseStrategy::Rating);
        assert_eq!(policy.strategy_for(YEAR_COLUMN), ParseStrategy::Integer);
        assert_eq!(policy.strategy_for(7), ParseStrategy::Rating);
    }

    #[test]
    fn strategy_names_round_trip_through_from_str() {
        for strategy in ParseStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<ParseStrategy>(), Ok(strategy));
        }
        assert_eq!(" Integer ".parse::<ParseStrategy>(), Ok(ParseStrategy::Integer));
        assert!("roman".parse::<ParseStrategy>().is_err());
    }
}
