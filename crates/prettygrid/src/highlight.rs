//! Conditional cell styling.
//!
//! A [`Highlighter`] pairs a cell predicate with a [`console::Style`]. The
//! predicate gets the source and the original `(row, col)` of the cell, so it
//! always sees the unformatted value no matter which formatter is active.
//! Highlighters are tried in order and the first match wins.
//!
//! ```
//! use console::Style;
//! use prettygrid::{Highlighter, Highlighters};
//!
//! let highlighters = Highlighters::new()
//!     .with(Highlighter::greater_than(100.0, Style::new().red()))
//!     .with(Highlighter::row(0, Style::new().bold()));
//!
//! let data = vec![vec![5, 500], vec![7, 8]];
//! assert!(highlighters.find(&data, 0, 1).is_some());
//! assert!(highlighters.find(&data, 1, 0).is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use console::Style;

use crate::source::RowSource;
use crate::value::Value;

/// Predicate over an original `(row, col)` cell position.
pub type CellPredicate = Arc<dyn Fn(&dyn RowSource, usize, usize) -> bool + Send + Sync>;

/// A predicate and the style applied to the cells it matches.
#[derive(Clone)]
pub struct Highlighter {
    predicate: CellPredicate,
    style: Style,
}

impl Highlighter {
    /// Creates a highlighter from a `(source, row, col)` predicate.
    pub fn new<F>(predicate: F, style: Style) -> Self
    where
        F: Fn(&dyn RowSource, usize, usize) -> bool + Send + Sync + 'static,
    {
        Highlighter {
            predicate: Arc::new(predicate),
            style,
        }
    }

    /// Matches one cell.
    pub fn cell(row: usize, col: usize, style: Style) -> Self {
        Self::new(move |_, i, j| i == row && j == col, style)
    }

    /// Matches every cell of an original row.
    pub fn row(row: usize, style: Style) -> Self {
        Self::new(move |_, i, _| i == row, style)
    }

    /// Matches every cell of an original column.
    pub fn column(col: usize, style: Style) -> Self {
        Self::new(move |_, _, j| j == col, style)
    }

    /// Matches cells whose source value satisfies `test`.
    pub fn when_value<F>(test: F, style: Style) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(
            move |source, i, j| source.get(i, j).is_some_and(|v| test(&v)),
            style,
        )
    }

    /// Matches numeric cells strictly below `limit`.
    pub fn less_than(limit: f64, style: Style) -> Self {
        Self::when_value(move |v| v.as_f64().is_some_and(|x| x < limit), style)
    }

    /// Matches numeric cells strictly above `limit`.
    pub fn greater_than(limit: f64, style: Style) -> Self {
        Self::when_value(move |v| v.as_f64().is_some_and(|x| x > limit), style)
    }

    /// Matches cells equal to `target`.
    pub fn equal_to(target: impl Into<Value>, style: Style) -> Self {
        let target = target.into();
        Self::when_value(
            move |v| v.try_cmp(&target) == Some(std::cmp::Ordering::Equal),
            style,
        )
    }

    /// The style applied on a match.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Evaluates the predicate.
    pub fn matches(&self, source: &dyn RowSource, row: usize, col: usize) -> bool {
        (self.predicate)(source, row, col)
    }
}

impl fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Highlighter")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Ordered list of highlighters; the first match wins.
#[derive(Clone, Debug, Default)]
pub struct Highlighters {
    list: Vec<Highlighter>,
}

impl Highlighters {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a highlighter.
    pub fn with(mut self, highlighter: Highlighter) -> Self {
        self.list.push(highlighter);
        self
    }

    /// Appends a highlighter in place.
    pub fn push(&mut self, highlighter: Highlighter) {
        self.list.push(highlighter);
    }

    /// Number of highlighters.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Style of the first highlighter matching the cell, if any.
    pub fn find(&self, source: &dyn RowSource, row: usize, col: usize) -> Option<&Style> {
        self.list
            .iter()
            .find(|h| h.matches(source, row, col))
            .map(Highlighter::style)
    }
}

impl FromIterator<Highlighter> for Highlighters {
    fn from_iter<I: IntoIterator<Item = Highlighter>>(iter: I) -> Self {
        Highlighters {
            list: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(style: Option<&Style>) -> Option<String> {
        style.map(|s| s.clone().force_styling(true).apply_to("x").to_string())
    }

    fn data() -> Vec<Vec<f64>> {
        vec![vec![1.0, -2.0, 3.5], vec![0.0, 10.0, -7.25]]
    }

    #[test]
    fn first_match_wins() {
        let highlighters = Highlighters::new()
            .with(Highlighter::cell(1, 1, Style::new().green()))
            .with(Highlighter::column(1, Style::new().red()));
        let data = data();
        let green = Style::new().green();
        let red = Style::new().red();
        assert_eq!(sample(highlighters.find(&data, 1, 1)), sample(Some(&green)));
        assert_eq!(sample(highlighters.find(&data, 0, 1)), sample(Some(&red)));
        assert_eq!(sample(highlighters.find(&data, 0, 0)), None);
    }

    #[test]
    fn value_comparisons() {
        let data = data();
        let negative = Highlighter::less_than(0.0, Style::new());
        assert!(negative.matches(&data, 0, 1));
        assert!(!negative.matches(&data, 1, 0));

        let big = Highlighter::greater_than(5.0, Style::new());
        assert!(big.matches(&data, 1, 1));
        assert!(!big.matches(&data, 0, 2));
    }

    #[test]
    fn equal_to_compares_across_number_kinds() {
        let data = data();
        let ten = Highlighter::equal_to(10, Style::new());
        assert!(ten.matches(&data, 1, 1));
        assert!(!ten.matches(&data, 0, 0));
    }

    #[test]
    fn out_of_range_cells_never_match_value_predicates() {
        let data = data();
        let any = Highlighter::when_value(|_| true, Style::new());
        assert!(!any.matches(&data, 9, 9));
    }

    #[test]
    fn collect_from_iterator() {
        let highlighters: Highlighters = (0..3)
            .map(|r| Highlighter::row(r, Style::new().bold()))
            .collect();
        assert_eq!(highlighters.len(), 3);
    }
}
