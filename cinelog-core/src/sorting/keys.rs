//! Sort key types for comparing table cells
//!
//! Cells arrive as display text. These types hold the value extracted from
//! that text and define how two extracted values compare.

use ordered_float::OrderedFloat;
use std::borrow::Cow;
use std::cmp::Ordering;

/// A cell value after parsing: either a number or the original text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortValue {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl SortValue {
    pub fn number(value: f64) -> Self {
        SortValue::Number(OrderedFloat(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        SortValue::Text(value.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SortValue::Number(n) => Some(n.into_inner()),
            SortValue::Text(_) => None,
        }
    }

    /// String form used when the two sides are not both numeric.
    ///
    /// Numbers print in their shortest form, so `87.0` compares as `"87"`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            SortValue::Number(n) => Cow::Owned(n.into_inner().to_string()),
            SortValue::Text(text) => Cow::Borrowed(text),
        }
    }

    /// Numeric when both sides are numbers, case-sensitive lexical otherwise
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
            _ => self.as_text().as_ref().cmp(other.as_text().as_ref()),
        }
    }
}

/// Key extracted from a single cell under a column's parse strategy
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnKey {
    Value(SortValue),
    /// Strict integer column; `None` when the cell is not an integer
    Integer(Option<i64>),
}

impl ColumnKey {
    /// Compare two keys of the same column.
    ///
    /// Integer keys only order when both sides parsed; anything involving an
    /// unparsed integer cell is `Equal`, which leaves the pair where it is.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ColumnKey::Value(a), ColumnKey::Value(b)) => a.compare(b),
            (ColumnKey::Integer(Some(a)), ColumnKey::Integer(Some(b))) => {
                a.cmp(b)
            }
            _ => Ordering::Equal,
        }
    }

    /// Compare while honouring the sort direction
    #[inline]
    pub fn compare_with_order(&self, other: &Self, ascending: bool) -> Ordering {
        if ascending {
            self.compare(other)
        } else {
            other.compare(self)
        }
    }
}

/// Parse the longest numeric prefix of `text`, the way browsers' `parseFloat`
/// does: leading whitespace, optional sign, digits with an optional fraction,
/// optional exponent. Trailing garbage is ignored.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut at: usize| {
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits > 0 || frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
