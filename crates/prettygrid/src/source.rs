//! Data sources.
//!
//! The engine reads data exclusively through the [`RowSource`] trait: a row
//! count, a column count and random access to individual cells. Grids of
//! anything convertible into a [`Value`] implement it out of the box, and
//! [`MapSource`] adapts key/value collections into a two-column table.

use crate::error::{SourceError, TableError};
use crate::header::Header;
use crate::value::Value;

/// Read-only, random-access view of tabular data.
///
/// Implementations must be deterministic for the duration of a render: the
/// same `(row, col)` must yield the same value every time it is asked for.
///
/// # Example
///
/// ```
/// use prettygrid::{RowSource, SourceError, Value};
///
/// struct Squares(usize);
///
/// impl RowSource for Squares {
///     fn num_rows(&self) -> usize { self.0 }
///     fn num_cols(&self) -> usize { 2 }
///     fn value(&self, row: usize, col: usize) -> Result<Value, SourceError> {
///         match col {
///             0 => Ok(Value::from(row)),
///             1 => Ok(Value::from(row * row)),
///             _ => Err(SourceError::OutOfBounds { row, col }),
///         }
///     }
/// }
///
/// assert_eq!(Squares(4).get(3, 1), Some(Value::from(9usize)));
/// ```
pub trait RowSource {
    /// Number of rows.
    fn num_rows(&self) -> usize;

    /// Number of columns.
    fn num_cols(&self) -> usize;

    /// The value at `(row, col)`, using original zero-based indices.
    fn value(&self, row: usize, col: usize) -> Result<Value, SourceError>;

    /// Convenience accessor for predicates: the value, or `None` on error.
    fn get(&self, row: usize, col: usize) -> Option<Value> {
        self.value(row, col).ok()
    }
}

impl<S: RowSource + ?Sized> RowSource for &S {
    fn num_rows(&self) -> usize {
        (**self).num_rows()
    }

    fn num_cols(&self) -> usize {
        (**self).num_cols()
    }

    fn value(&self, row: usize, col: usize) -> Result<Value, SourceError> {
        (**self).value(row, col)
    }
}

impl<T: Clone + Into<Value>> RowSource for [Vec<T>] {
    fn num_rows(&self) -> usize {
        self.len()
    }

    /// Column count is taken from the first row.
    fn num_cols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn value(&self, row: usize, col: usize) -> Result<Value, SourceError> {
        self.get(row)
            .and_then(|cells| cells.get(col))
            .cloned()
            .map(Into::into)
            .ok_or(SourceError::OutOfBounds { row, col })
    }
}

impl<T: Clone + Into<Value>> RowSource for Vec<Vec<T>> {
    fn num_rows(&self) -> usize {
        self.as_slice().num_rows()
    }

    fn num_cols(&self) -> usize {
        self.as_slice().num_cols()
    }

    fn value(&self, row: usize, col: usize) -> Result<Value, SourceError> {
        self.as_slice().value(row, col)
    }
}

impl<T: Clone + Into<Value>, const N: usize> RowSource for [[T; N]] {
    fn num_rows(&self) -> usize {
        self.len()
    }

    fn num_cols(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            N
        }
    }

    fn value(&self, row: usize, col: usize) -> Result<Value, SourceError> {
        self.get(row)
            .and_then(|cells| cells.get(col))
            .cloned()
            .map(Into::into)
            .ok_or(SourceError::OutOfBounds { row, col })
    }
}

impl<T: Clone + Into<Value>, const N: usize, const M: usize> RowSource for [[T; N]; M] {
    fn num_rows(&self) -> usize {
        self.as_slice().num_rows()
    }

    fn num_cols(&self) -> usize {
        self.as_slice().num_cols()
    }

    fn value(&self, row: usize, col: usize) -> Result<Value, SourceError> {
        self.as_slice().value(row, col)
    }
}

/// A key/value collection rendered as a `Keys` / `Values` table.
///
/// Entries keep the iteration order of the collection they were built from,
/// unless sorted order is requested, in which case keys must be mutually
/// comparable (see [`Value::try_cmp`]).
///
/// # Example
///
/// ```
/// use prettygrid::{MapSource, RowSource};
/// use std::collections::HashMap;
///
/// let months: HashMap<i32, &str> = [(2, "Feb"), (1, "Jan"), (3, "Mar")].into();
/// let source = MapSource::new(months, true).unwrap();
///
/// assert_eq!(source.get(0, 1).unwrap().to_string(), "Jan");
/// assert_eq!(source.num_cols(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSource {
    entries: Vec<(Value, Value)>,
}

impl MapSource {
    /// Builds a source from key/value pairs, optionally sorting by key.
    ///
    /// Returns [`TableError::UnsortableKeys`] if `sort_keys` is set and two
    /// keys cannot be ordered.
    pub fn new<I, K, V>(entries: I, sort_keys: bool) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut entries: Vec<(Value, Value)> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if sort_keys {
            // Every key comparable with the first one makes the sort total.
            if let Some((first, _)) = entries.first() {
                for (key, _) in &entries {
                    ensure_comparable(first, key)?;
                }
            }
            entries.sort_by(|a, b| a.0.try_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        }

        Ok(MapSource { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `Keys` / `Values` header, with a sub-header naming the value type
    /// of each column (`Any` when a column mixes types).
    pub fn header(&self) -> Header {
        let key_type = common_type(self.entries.iter().map(|(k, _)| k));
        let value_type = common_type(self.entries.iter().map(|(_, v)| v));
        Header::new(["Keys", "Values"]).sub_header([key_type, value_type])
    }
}

impl RowSource for MapSource {
    fn num_rows(&self) -> usize {
        self.entries.len()
    }

    fn num_cols(&self) -> usize {
        2
    }

    fn value(&self, row: usize, col: usize) -> Result<Value, SourceError> {
        let (key, value) = self
            .entries
            .get(row)
            .ok_or(SourceError::OutOfBounds { row, col })?;
        match col {
            0 => Ok(key.clone()),
            1 => Ok(value.clone()),
            _ => Err(SourceError::OutOfBounds { row, col }),
        }
    }
}

fn ensure_comparable(a: &Value, b: &Value) -> Result<(), TableError> {
    match a.try_cmp(b) {
        Some(_) => Ok(()),
        None => Err(TableError::UnsortableKeys {
            left: a.to_string(),
            right: b.to_string(),
        }),
    }
}

fn common_type<'a>(mut values: impl Iterator<Item = &'a Value>) -> &'static str {
    let Some(first) = values.next() else {
        return "Any";
    };
    let name = first.type_name();
    if values.all(|v| v.type_name() == name) {
        name
    } else {
        "Any"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions() {
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_cols(), 3);
        assert_eq!(grid.value(1, 2).unwrap(), Value::Int(6));
    }

    #[test]
    fn empty_grid_has_no_columns() {
        let grid: Vec<Vec<i32>> = Vec::new();
        assert_eq!(grid.num_rows(), 0);
        assert_eq!(grid.num_cols(), 0);
    }

    #[test]
    fn ragged_grid_reports_out_of_bounds() {
        let grid = vec![vec![1, 2, 3], vec![4]];
        let err = grid.value(1, 2).unwrap_err();
        assert!(matches!(err, SourceError::OutOfBounds { row: 1, col: 2 }));
        assert_eq!(grid.get(1, 2), None);
    }

    #[test]
    fn array_grid() {
        let grid = [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.num_cols(), 2);
        assert_eq!(grid.value(2, 0).unwrap(), Value::Float(5.0));
    }

    #[test]
    fn map_source_keeps_insertion_order() {
        let source = MapSource::new(vec![(3, "c"), (1, "a"), (2, "b")], false).unwrap();
        let keys: Vec<String> = (0..source.num_rows())
            .map(|r| source.value(r, 0).unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["3", "1", "2"]);
    }

    #[test]
    fn map_source_sorts_keys() {
        let source = MapSource::new(vec![(3, "c"), (1, "a"), (2, "b")], true).unwrap();
        let values: Vec<String> = (0..source.num_rows())
            .map(|r| source.value(r, 1).unwrap().to_string())
            .collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn map_source_rejects_unsortable_keys() {
        let entries: Vec<(Value, Value)> = vec![
            (Value::from(1), Value::from("one")),
            (Value::from("two"), Value::from(2)),
        ];
        let err = MapSource::new(entries, true).unwrap_err();
        assert!(matches!(err, TableError::UnsortableKeys { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn map_source_unsorted_accepts_mixed_keys() {
        let entries: Vec<(Value, Value)> = vec![
            (Value::from(1), Value::from("one")),
            (Value::from("two"), Value::from(2)),
        ];
        assert!(MapSource::new(entries, false).is_ok());
    }

    #[test]
    fn map_header_names_types() {
        let source = MapSource::new(vec![(1, "Jan"), (2, "Feb")], true).unwrap();
        let header = source.header();
        assert_eq!(header.rows()[0], vec!["Keys", "Values"]);
        assert_eq!(header.rows()[1], vec!["Int", "String"]);
    }
}
