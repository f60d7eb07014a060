//! Table headers.

use crate::error::TableError;

/// One or more header label rows.
///
/// The first row is the header proper; any following rows are sub-headers,
/// drawn below it and above the header separator.
///
/// # Example
///
/// ```
/// use prettygrid::Header;
///
/// let header = Header::new(["Name", "Size"]).sub_header(["", "bytes"]);
/// assert_eq!(header.rows().len(), 2);
///
/// let auto = Header::auto(3);
/// assert_eq!(auto.rows()[0], vec!["Col. 1", "Col. 2", "Col. 3"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    rows: Vec<Vec<String>>,
}

impl Header {
    /// Creates a header with a single label row.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(labels: I) -> Self {
        Header {
            rows: vec![labels.into_iter().map(Into::into).collect()],
        }
    }

    /// Creates a header from a matrix of label rows.
    pub fn from_rows<S, R, I>(rows: I) -> Self
    where
        S: Into<String>,
        R: IntoIterator<Item = S>,
        I: IntoIterator<Item = R>,
    {
        Header {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Generated `Col. 1 … Col. n` header.
    pub fn auto(num_cols: usize) -> Self {
        Header::new((1..=num_cols).map(|i| format!("Col. {}", i)))
    }

    /// Appends a sub-header row.
    pub fn sub_header<S: Into<String>, I: IntoIterator<Item = S>>(mut self, labels: I) -> Self {
        self.rows
            .push(labels.into_iter().map(Into::into).collect());
        self
    }

    /// All label rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of label rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no label rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checks that every label row has exactly `num_cols` labels.
    pub fn validate(&self, num_cols: usize) -> Result<(), TableError> {
        for (row, labels) in self.rows.iter().enumerate() {
            if labels.len() != num_cols {
                return Err(TableError::HeaderColumns {
                    row,
                    expected: num_cols,
                    actual: labels.len(),
                });
            }
        }
        Ok(())
    }

    /// The label at `(row, col)`, or an empty string.
    pub(crate) fn label(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|labels| labels.get(col))
            .map_or("", String::as_str)
    }
}
