//! Row and column filters.
//!
//! Filters decide which original rows and columns are shown. They never
//! renumber anything: formatters, highlighters and `hlines` keep referring to
//! original indices.

use std::fmt;
use std::sync::Arc;

use crate::source::RowSource;

/// Predicate over an original row or column index.
///
/// The whole source is passed in, so a row filter may look at any cell.
pub type IndexPredicate = Arc<dyn Fn(&dyn RowSource, usize) -> bool + Send + Sync>;

/// An ordered set of predicates combined with AND.
///
/// An empty set keeps everything.
///
/// # Example
///
/// ```
/// use prettygrid::FilterSet;
///
/// let even = FilterSet::new().with(|_, i| i % 2 == 0);
/// let grid = vec![vec![1], vec![2], vec![3]];
/// assert_eq!(even.apply(&grid, 3), vec![0, 2]);
/// ```
#[derive(Clone, Default)]
pub struct FilterSet {
    predicates: Vec<IndexPredicate>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate.
    pub fn with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn RowSource, usize) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Arc::new(predicate));
        self
    }

    /// Adds a predicate in place.
    pub fn push<F>(&mut self, predicate: F)
    where
        F: Fn(&dyn RowSource, usize) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Arc::new(predicate));
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if the set has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns `true` if every predicate accepts `index`.
    pub fn keeps(&self, source: &dyn RowSource, index: usize) -> bool {
        self.predicates.iter().all(|p| p(source, index))
    }

    /// The accepted indices in `0..count`, in increasing order.
    pub fn apply(&self, source: &dyn RowSource, count: usize) -> Vec<usize> {
        (0..count).filter(|&i| self.keeps(source, i)).collect()
    }
}

impl fmt::Debug for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSet")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// Original indices of the rows and columns that survived filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visible {
    /// Strictly increasing original row indices.
    pub rows: Vec<usize>,
    /// Strictly increasing original column indices.
    pub cols: Vec<usize>,
}

/// Runs the row and column filters against a source.
pub fn visible(source: &dyn RowSource, rows: &FilterSet, cols: &FilterSet) -> Visible {
    let visible = Visible {
        rows: rows.apply(source, source.num_rows()),
        cols: cols.apply(source, source.num_cols()),
    };
    log::trace!(
        "filters kept {}/{} rows and {}/{} columns",
        visible.rows.len(),
        source.num_rows(),
        visible.cols.len(),
        source.num_cols()
    );
    visible
}
