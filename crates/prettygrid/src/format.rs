//! Per-column value formatting.
//!
//! A [`FormatterMap`] maps original column indices to transforms of the form
//! `(value, original_row) -> value`, with an optional fallback for every
//! column that has no entry of its own. The transformed value only affects
//! the displayed text; highlighters still see the source value.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::SourceError;
use crate::filter::Visible;
use crate::source::RowSource;
use crate::util::{escape_line_breaks, max_line_width};
use crate::value::Value;

/// A cell transform: `(value, original_row) -> value`.
pub type Formatter = Arc<dyn Fn(&Value, usize) -> Value + Send + Sync>;

/// Column-keyed formatter table.
///
/// Lookup order: exact column, then the all-columns fallback, then identity.
///
/// # Example
///
/// ```
/// use prettygrid::{FormatterMap, Value};
/// use prettygrid::formatters::round;
///
/// let map = FormatterMap::new()
///     .all(round(1))
///     .column(2, |v, row| if row % 2 == 1 { Value::from("odd") } else { v.clone() });
///
/// assert_eq!(map.apply(&Value::from(0.25), 0, 0), Value::from(0.3));
/// assert_eq!(map.apply(&Value::from(0.25), 1, 2), Value::from("odd"));
/// ```
#[derive(Clone, Default)]
pub struct FormatterMap {
    all: Option<Formatter>,
    columns: BTreeMap<usize, Formatter>,
}

impl FormatterMap {
    /// Creates an empty map (every column displays its value unchanged).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transform for one original column.
    pub fn column<F>(mut self, col: usize, f: F) -> Self
    where
        F: Fn(&Value, usize) -> Value + Send + Sync + 'static,
    {
        self.columns.insert(col, Arc::new(f));
        self
    }

    /// Sets the same transform for several original columns.
    pub fn for_columns<F, I>(mut self, cols: I, f: F) -> Self
    where
        F: Fn(&Value, usize) -> Value + Send + Sync + 'static,
        I: IntoIterator<Item = usize>,
    {
        let f: Formatter = Arc::new(f);
        for col in cols {
            self.columns.insert(col, Arc::clone(&f));
        }
        self
    }

    /// Sets the fallback transform for columns without their own entry.
    pub fn all<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, usize) -> Value + Send + Sync + 'static,
    {
        self.all = Some(Arc::new(f));
        self
    }

    /// The transform that applies to an original column, if any.
    pub fn get(&self, col: usize) -> Option<&Formatter> {
        self.columns.get(&col).or(self.all.as_ref())
    }

    /// Returns `true` if no transform is configured.
    pub fn is_empty(&self) -> bool {
        self.all.is_none() && self.columns.is_empty()
    }

    /// Applies the transform for `col` to a value from original row `row`.
    pub fn apply(&self, value: &Value, row: usize, col: usize) -> Value {
        match self.get(col) {
            Some(f) => f(value, row),
            None => value.clone(),
        }
    }
}

impl fmt::Debug for FormatterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterMap")
            .field("all", &self.all.is_some())
            .field("columns", &self.columns.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A visible cell after formatting.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Original row index.
    pub row: usize,
    /// Original column index.
    pub col: usize,
    /// Source value, before any transform.
    pub value: Value,
    /// Display text. Contains `\n` only when line breaks are enabled.
    pub text: String,
    /// Display width of the widest line of `text`.
    pub width: usize,
}

impl Cell {
    /// Physical lines of the cell text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Number of physical lines.
    pub fn height(&self) -> usize {
        self.lines().count()
    }
}

/// Turns raw text into display text, splitting or escaping line breaks.
pub(crate) fn display_text(raw: &str, linebreaks: bool) -> String {
    if linebreaks {
        raw.replace("\r\n", "\n")
    } else {
        escape_line_breaks(raw)
    }
}

/// Reads and formats every visible cell, row by row.
pub fn format_cells(
    source: &dyn RowSource,
    visible: &Visible,
    formatters: &FormatterMap,
    linebreaks: bool,
) -> Result<Vec<Vec<Cell>>, SourceError> {
    let mut cells = Vec::with_capacity(visible.rows.len());
    for &row in &visible.rows {
        let mut line = Vec::with_capacity(visible.cols.len());
        for &col in &visible.cols {
            let value = source.value(row, col)?;
            let shown = formatters.apply(&value, row, col).to_string();
            let text = display_text(&shown, linebreaks);
            let width = max_line_width(&text);
            line.push(Cell {
                row,
                col,
                value,
                text,
                width,
            });
        }
        cells.push(line);
    }
    Ok(cells)
}

/// Ready-made transforms for [`FormatterMap`].
pub mod formatters {
    use super::Value;

    /// Rounds floats to `digits` decimal places. Other values pass through.
    pub fn round(digits: u32) -> impl Fn(&Value, usize) -> Value + Send + Sync + 'static {
        let scale = 10f64.powi(digits as i32);
        move |value, _| match value {
            Value::Float(x) if x.is_finite() => Value::Float((x * scale).round() / scale),
            other => other.clone(),
        }
    }

    /// Renders numbers with exactly `digits` decimal places.
    ///
    /// Non-finite floats and non-numeric values pass through.
    pub fn fixed(digits: usize) -> impl Fn(&Value, usize) -> Value + Send + Sync + 'static {
        move |value, _| match value.as_f64() {
            Some(x) if x.is_finite() => Value::Text(format!("{:.*}", digits, x)),
            _ => value.clone(),
        }
    }
}
