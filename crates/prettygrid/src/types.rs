//! Column alignment and per-column header paint.

use console::Style;
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    Left,
    /// Center text; an odd leftover space goes to the right.
    Center,
    /// Right-align text (pad on the left).
    Right,
}

/// Alignment for a whole table.
///
/// Either one [`Align`] broadcast to every column, or one entry per
/// original column (before any filtering).
///
/// Deserializes from either form:
///
/// ```
/// use prettygrid::{Align, Alignment};
///
/// let all: Alignment = serde_json::from_str(r#""center""#).unwrap();
/// assert_eq!(all, Alignment::All(Align::Center));
///
/// let each: Alignment = serde_json::from_str(r#"["left", "right"]"#).unwrap();
/// assert_eq!(each.get(1), Align::Right);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alignment {
    /// Same alignment for every column.
    All(Align),
    /// One alignment per original column.
    PerColumn(Vec<Align>),
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::All(Align::Right)
    }
}

impl Alignment {
    /// Alignment of an original column.
    ///
    /// Columns beyond a per-column vector fall back to right alignment;
    /// [`validate`](Self::validate) rejects such vectors before rendering.
    pub fn get(&self, col: usize) -> Align {
        match self {
            Alignment::All(align) => *align,
            Alignment::PerColumn(aligns) => aligns.get(col).copied().unwrap_or(Align::Right),
        }
    }

    /// Checks a per-column vector against the number of original columns.
    pub fn validate(&self, num_cols: usize) -> Result<(), TableError> {
        match self {
            Alignment::PerColumn(aligns) if aligns.len() != num_cols => {
                Err(TableError::AlignmentLength {
                    expected: num_cols,
                    actual: aligns.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl From<Align> for Alignment {
    fn from(align: Align) -> Self {
        Alignment::All(align)
    }
}

impl From<Vec<Align>> for Alignment {
    fn from(aligns: Vec<Align>) -> Self {
        Alignment::PerColumn(aligns)
    }
}

impl<const N: usize> From<[Align; N]> for Alignment {
    fn from(aligns: [Align; N]) -> Self {
        Alignment::PerColumn(aligns.to_vec())
    }
}

/// Paint for a header row.
///
/// Like [`Alignment`], either one style for every column or one per original
/// column.
#[derive(Clone, Debug)]
pub enum ColumnStyles {
    /// Same style for every column.
    All(Style),
    /// One style per original column.
    PerColumn(Vec<Style>),
}

impl Default for ColumnStyles {
    fn default() -> Self {
        ColumnStyles::All(Style::new())
    }
}

impl ColumnStyles {
    /// Style of an original column, `None` past the end of a per-column
    /// vector.
    pub fn get(&self, col: usize) -> Option<&Style> {
        match self {
            ColumnStyles::All(style) => Some(style),
            ColumnStyles::PerColumn(styles) => styles.get(col),
        }
    }

    /// Checks a per-column vector against the number of original columns.
    /// `option` names the setting in the error.
    pub fn validate(&self, option: &'static str, num_cols: usize) -> Result<(), TableError> {
        match self {
            ColumnStyles::PerColumn(styles) if styles.len() != num_cols => {
                Err(TableError::StyleLength {
                    option,
                    expected: num_cols,
                    actual: styles.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl From<Style> for ColumnStyles {
    fn from(style: Style) -> Self {
        ColumnStyles::All(style)
    }
}

impl From<Vec<Style>> for ColumnStyles {
    fn from(styles: Vec<Style>) -> Self {
        ColumnStyles::PerColumn(styles)
    }
}

impl<const N: usize> From<[Style; N]> for ColumnStyles {
    fn from(styles: [Style; N]) -> Self {
        ColumnStyles::PerColumn(styles.to_vec())
    }
}
