//! Fitting a table into a bounded screen area.
//!
//! Cropping works on the widths and heights measured before anything is
//! dropped. Horizontally, columns are admitted left to right while the line
//! still fits, leaving room for a trailing ` ⋯` marker. Vertically, the header
//! and the first data row are always kept; further rows are admitted while
//! the line budget allows, leaving one line for a `⋮` marker row.

use serde::{Deserialize, Serialize};

/// Which directions may be cropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropPolicy {
    /// Never crop.
    None,
    /// Crop columns only.
    Horizontal,
    /// Crop rows only.
    Vertical,
    /// Crop rows and columns.
    #[default]
    Both,
}

impl CropPolicy {
    /// Returns `true` if columns may be dropped.
    pub fn horizontal(self) -> bool {
        matches!(self, CropPolicy::Horizontal | CropPolicy::Both)
    }

    /// Returns `true` if rows may be dropped.
    pub fn vertical(self) -> bool {
        matches!(self, CropPolicy::Vertical | CropPolicy::Both)
    }
}

/// Available display area, in terminal lines and cells.
///
/// A dimension that is zero or negative is unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenArea {
    pub rows: i64,
    pub cols: i64,
}

impl ScreenArea {
    /// An area of `rows` lines by `cols` cells.
    pub fn new(rows: i64, cols: i64) -> Self {
        ScreenArea { rows, cols }
    }

    /// No limit in either direction. Used for files and pipes.
    pub fn unlimited() -> Self {
        ScreenArea { rows: 0, cols: 0 }
    }

    /// Size of the controlling terminal, or unlimited if there is none.
    pub fn detect() -> Self {
        match terminal_size::terminal_size() {
            Some((width, height)) => ScreenArea::new(i64::from(height.0), i64::from(width.0)),
            None => ScreenArea::unlimited(),
        }
    }

    /// Line limit, if any.
    pub fn row_limit(&self) -> Option<usize> {
        usize::try_from(self.rows).ok().filter(|&n| n > 0)
    }

    /// Cell limit, if any.
    pub fn col_limit(&self) -> Option<usize> {
        usize::try_from(self.cols).ok().filter(|&n| n > 0)
    }
}

impl From<(i64, i64)> for ScreenArea {
    fn from((rows, cols): (i64, i64)) -> Self {
        ScreenArea::new(rows, cols)
    }
}

/// Display cells taken by the ` ⋯` marker after the last admitted column.
pub const COLUMN_MARKER_WIDTH: usize = 2;

/// Screen lines left free around the table for the command line and the
/// prompt that follows it.
pub const RESERVED_LINES: usize = 3;

/// Cells one column adds to a line: two padding spaces and the glyph that
/// follows it.
pub fn column_span(width: usize) -> usize {
    width + 3
}

/// Result of fitting one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fit {
    /// Number of leading visible columns or rows emitted.
    pub count: usize,
    /// A continuation marker follows the last emitted column or row.
    pub more: bool,
}

impl Fit {
    fn all(count: usize) -> Self {
        Fit { count, more: false }
    }
}

/// Decides how many visible columns fit in the width of `area`.
///
/// `widths` are the content widths of the visible data columns and
/// `fixed_width` the cells used before the first of them: the left border
/// plus the row-number column when shown.
pub fn fit_columns(widths: &[usize], fixed_width: usize, area: ScreenArea, policy: CropPolicy) -> Fit {
    let limit = match area.col_limit() {
        Some(limit) if policy.horizontal() => limit,
        _ => return Fit::all(widths.len()),
    };

    let full = fixed_width + widths.iter().map(|&w| column_span(w)).sum::<usize>();
    if full <= limit {
        return Fit::all(widths.len());
    }

    let budget = limit.saturating_sub(COLUMN_MARKER_WIDTH);
    let mut used = fixed_width;
    let mut count = 0;
    for &width in widths {
        if used + column_span(width) > budget {
            break;
        }
        used += column_span(width);
        count += 1;
    }
    log::debug!("{} of {} columns fit in {} cells", count, widths.len(), limit);
    Fit { count, more: true }
}

/// Decides how many visible rows fit in the height of `area`.
///
/// `heights` are the physical lines of each visible data row, `rules` tell
/// whether a rule line follows each of them, and `fixed_lines` counts the
/// top line, header rows, header separator and bottom line. The first row is
/// always kept.
pub fn fit_rows(
    heights: &[usize],
    rules: &[bool],
    fixed_lines: usize,
    area: ScreenArea,
    policy: CropPolicy,
) -> Fit {
    let count = heights.len();
    let limit = match area.row_limit() {
        Some(limit) if policy.vertical() && count > 0 => limit,
        _ => return Fit::all(count),
    };

    let rule = |i: usize| usize::from(rules.get(i).copied().unwrap_or(false));
    let available = limit.saturating_sub(RESERVED_LINES);

    // A rule after the final row is never drawn.
    let full = fixed_lines + heights.iter().sum::<usize>() + (0..count - 1).map(rule).sum::<usize>();
    if full <= available {
        return Fit::all(count);
    }

    // One line goes to the marker row.
    let budget = available.saturating_sub(fixed_lines + 1);
    let mut used = heights[0] + rule(0);
    let mut admitted = 1;
    for i in 1..count {
        let cost = heights[i] + rule(i);
        if used + cost > budget {
            break;
        }
        used += cost;
        admitted += 1;
    }
    log::debug!("{} of {} rows fit in {} lines", admitted, count, limit);
    Fit {
        count: admitted,
        more: admitted < count,
    }
}
