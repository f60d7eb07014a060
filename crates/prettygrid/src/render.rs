//! The render pass.
//!
//! Rendering is one linear pass over the stages
//!
//! ```text
//! validate → filter → format → measure → crop → draw
//! ```
//!
//! Everything up to and including drawing happens in memory. The sink only
//! sees the finished text, so a rejected configuration or a failing source
//! never leaves partial output behind.

use std::io::Write;
use std::iter;

use console::Style;

use crate::crop::{self, column_span, ScreenArea};
use crate::error::Result;
use crate::filter;
use crate::format::{display_text, format_cells};
use crate::header::Header;
use crate::source::RowSource;
use crate::table::Table;
use crate::util::{align_text, display_width, max_line_width, pad_center, pad_left};

/// Label of the row-number column.
pub const ROW_NUMBER_LABEL: &str = "Row";

/// Trailing text of every line when columns were cropped.
pub const COLUMN_MARKER: &str = " ⋯";

/// Centered in every column of the row drawn when rows were cropped.
pub const ROW_MARKER: &str = "⋮";

/// Renders `source` with the options in `table` and writes it to `sink`.
///
/// Without a `header`, columns are labeled `Col. 1 … Col. n`. A supplied
/// header must have one label per source column in every row.
///
/// The screen area is `table`'s configured one, or unlimited.
///
/// # Example
///
/// ```
/// use prettygrid::{render, Table};
///
/// let mut out = Vec::new();
/// render(&mut out, &vec![vec![1, 2], vec![3, 4]], None, &Table::new()).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "┌────────┬────────┐\n\
///      │ Col. 1 │ Col. 2 │\n\
///      ├────────┼────────┤\n\
///      │      1 │      2 │\n\
///      │      3 │      4 │\n\
///      └────────┴────────┘\n"
/// );
/// ```
pub fn render<W, S>(sink: &mut W, source: &S, header: Option<&Header>, table: &Table) -> Result<()>
where
    W: Write + ?Sized,
    S: RowSource + ?Sized,
{
    let area = table.screen_size.unwrap_or_else(ScreenArea::unlimited);
    let text = layout(&source, header, table, area)?;
    sink.write_all(text.as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Builds the complete table text for `area`.
pub(crate) fn layout(
    source: &dyn RowSource,
    header: Option<&Header>,
    table: &Table,
    area: ScreenArea,
) -> Result<String> {
    table.style.validate()?;
    let num_cols = source.num_cols();
    table.alignment.validate(num_cols)?;
    table.header_style.validate("header_style", num_cols)?;
    table.subheader_style.validate("subheader_style", num_cols)?;
    let auto;
    let header = match header {
        Some(header) => {
            header.validate(num_cols)?;
            header
        }
        None => {
            auto = Header::auto(num_cols);
            &auto
        }
    };

    let visible = filter::visible(source, &table.row_filters, &table.col_filters);
    let cells = format_cells(source, &visible, &table.formatters, table.linebreaks)?;

    let labels: Vec<Vec<String>> = if table.noheader {
        Vec::new()
    } else {
        (0..header.len())
            .map(|r| {
                visible
                    .cols
                    .iter()
                    .map(|&c| display_text(header.label(r, c), table.linebreaks))
                    .collect()
            })
            .collect()
    };

    // Widths are measured over every visible cell, before cropping.
    let mut widths = vec![0; visible.cols.len()];
    for row in &labels {
        for (j, label) in row.iter().enumerate() {
            widths[j] = widths[j].max(max_line_width(label));
        }
    }
    for row in &cells {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.width);
        }
    }
    if table.same_column_size {
        let widest = widths.iter().copied().max().unwrap_or(0);
        widths.fill(widest);
    }

    let rownum = table.show_row_number.then(|| {
        let digits = visible.rows.last().map_or(1, |&r| (r + 1).to_string().len());
        let label = if table.noheader {
            0
        } else {
            display_width(ROW_NUMBER_LABEL)
        };
        digits.max(label)
    });
    log::debug!(
        "{} rows, {} columns visible; widths {:?}, row numbers {:?}",
        visible.rows.len(),
        visible.cols.len(),
        widths,
        rownum
    );

    let fixed_width = 1 + rownum.map_or(0, column_span);
    let cols = crop::fit_columns(&widths, fixed_width, area, table.crop);

    let header_heights: Vec<usize> = labels
        .iter()
        .map(|row| row[..cols.count].iter().map(|l| line_count(l)).max().unwrap_or(1))
        .collect();
    let heights: Vec<usize> = cells
        .iter()
        .map(|row| row[..cols.count].iter().map(|c| c.height()).max().unwrap_or(1))
        .collect();
    let rules: Vec<bool> = visible
        .rows
        .iter()
        .map(|r| table.style.row_lines || table.hlines.contains(r))
        .collect();

    let style = &table.style;
    let mut fixed_lines = usize::from(style.top_line) + usize::from(style.bottom_line);
    if !table.noheader {
        fixed_lines += header_heights.iter().sum::<usize>() + usize::from(style.header_line);
    }
    let rows = crop::fit_rows(&heights, &rules, fixed_lines, area, table.crop);
    log::debug!(
        "emitting {} columns (more: {}) and {} rows (more: {})",
        cols.count,
        cols.more,
        rows.count,
        rows.more
    );

    let mut canvas = Canvas {
        out: String::new(),
        table,
        spans: rownum
            .into_iter()
            .chain(widths[..cols.count].iter().copied())
            .collect(),
        more_cols: cols.more,
    };

    if style.top_line {
        canvas.rule(Rule::Top);
    }

    if !table.noheader {
        let plain = Style::new();
        for (r, row) in labels.iter().enumerate() {
            let paints = if r == 0 {
                &table.header_style
            } else {
                &table.subheader_style
            };
            for k in 0..header_heights[r] {
                let mut texts = Vec::with_capacity(canvas.spans.len());
                if let Some(width) = rownum {
                    let label = if r == 0 && k == 0 { ROW_NUMBER_LABEL } else { "" };
                    texts.push(paint_text(&table.rownum_header_style, &pad_left(label, width)));
                }
                for (j, label) in row[..cols.count].iter().enumerate() {
                    let line = label.split('\n').nth(k).unwrap_or("");
                    let col = visible.cols[j];
                    let paint = paints.get(col).unwrap_or(&plain);
                    let align = table.alignment.get(col);
                    texts.push(paint_text(paint, &align_text(line, widths[j], align)));
                }
                canvas.line(&texts);
            }
        }
        if style.header_line {
            canvas.rule(Rule::Middle);
        }
    }

    for (i, row) in cells[..rows.count].iter().enumerate() {
        let row = &row[..cols.count];
        let paints: Vec<&Style> = row
            .iter()
            .map(|c| {
                table
                    .highlighters
                    .find(source, c.row, c.col)
                    .unwrap_or(&table.text_style)
            })
            .collect();

        for k in 0..heights[i] {
            let mut texts = Vec::with_capacity(canvas.spans.len());
            if let Some(width) = rownum {
                let number = if k == 0 {
                    (visible.rows[i] + 1).to_string()
                } else {
                    String::new()
                };
                texts.push(paint_text(&table.text_style, &pad_left(&number, width)));
            }
            for (j, cell) in row.iter().enumerate() {
                let line = cell.lines().nth(k).unwrap_or("");
                let padded = align_text(line, widths[j], table.alignment.get(cell.col));
                texts.push(paint_text(paints[j], &padded));
            }
            canvas.line(&texts);
        }

        let followed = i + 1 < rows.count || rows.more;
        if rules[i] && followed {
            canvas.rule(Rule::Middle);
        }
    }

    if rows.more {
        canvas.marker_row();
    }
    if style.bottom_line {
        canvas.rule(Rule::Bottom);
    }

    log::trace!("layout produced {} bytes", canvas.out.len());
    Ok(canvas.out)
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

fn paint_text(style: &Style, text: &str) -> String {
    style.apply_to(text).to_string()
}

/// Kind of horizontal rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule {
    Top,
    Middle,
    Bottom,
}

/// Output buffer plus what every line needs to know about the column layout.
struct Canvas<'a> {
    out: String,
    table: &'a Table,
    /// Content widths of the emitted columns, row-number column first.
    spans: Vec<usize>,
    more_cols: bool,
}

impl Canvas<'_> {
    fn border(&self, glyph: char) -> String {
        self.table.border_style.apply_to(glyph).to_string()
    }

    fn rule(&mut self, rule: Rule) {
        let style = &self.table.style;
        let (left, junction, right) = match rule {
            Rule::Top => (style.top_left, style.top_junction, style.top_right),
            Rule::Middle => (style.left_junction, style.cross, style.right_junction),
            Rule::Bottom => (style.bottom_left, style.bottom_junction, style.bottom_right),
        };

        let mut line = String::new();
        line.push(left);
        for (i, &width) in self.spans.iter().enumerate() {
            if i > 0 {
                line.push(junction);
            }
            line.extend(iter::repeat(style.horizontal).take(width + 2));
        }
        if self.more_cols {
            if !self.spans.is_empty() {
                line.push(junction);
            }
            line.push_str(COLUMN_MARKER);
        } else {
            line.push(right);
        }

        let painted = self.table.border_style.apply_to(line).to_string();
        self.out.push_str(&painted);
        self.out.push('\n');
    }

    /// Draws one physical line from cell texts already padded to their
    /// column widths.
    fn line(&mut self, texts: &[String]) {
        let style = &self.table.style;
        let mut line = self.border(style.left_border);
        for (i, text) in texts.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.border(style.column));
            }
            line.push(' ');
            line.push_str(text);
            line.push(' ');
        }
        if self.more_cols {
            if !texts.is_empty() {
                line.push_str(&self.border(style.column));
            }
            line.push_str(&self.table.border_style.apply_to(COLUMN_MARKER).to_string());
        } else {
            line.push_str(&self.border(style.right_border));
        }

        self.out.push_str(&line);
        self.out.push('\n');
    }

    fn marker_row(&mut self) {
        let texts: Vec<String> = self
            .spans
            .iter()
            .map(|&width| pad_center(ROW_MARKER, width))
            .collect();
        self.line(&texts);
    }
}
