//! The table builder.
//!
//! A [`Table`] carries every rendering option. It is built once, cloned and
//! selectively overridden for later calls; it holds no data and no header,
//! both are passed to each render call.
//!
//! ```
//! use console::Style;
//! use prettygrid::{Align, Highlighter, Table, TableStyle};
//!
//! let table = Table::new()
//!     .style(TableStyle::MYSQL)
//!     .alignment([Align::Left, Align::Right])
//!     .highlighter(Highlighter::less_than(0.0, Style::new().red()));
//!
//! let text = table
//!     .render_to_string(&vec![vec!["cpu", "-1.5"], vec!["mem", "2"]], None)
//!     .unwrap();
//! assert!(text.starts_with("+--------+--------+\n"));
//! ```

use std::collections::BTreeSet;
use std::io::{self, Write};

use console::Style;

use crate::config::TableConfig;
use crate::crop::{CropPolicy, ScreenArea};
use crate::error::Result;
use crate::filter::FilterSet;
use crate::format::FormatterMap;
use crate::header::Header;
use crate::highlight::{Highlighter, Highlighters};
use crate::render::{layout, render};
use crate::source::{MapSource, RowSource};
use crate::style::TableStyle;
use crate::types::{Alignment, ColumnStyles};
use crate::value::Value;

/// Rendering options for a table.
#[derive(Clone, Debug)]
pub struct Table {
    pub(crate) style: TableStyle,
    pub(crate) alignment: Alignment,
    pub(crate) crop: CropPolicy,
    pub(crate) row_filters: FilterSet,
    pub(crate) col_filters: FilterSet,
    pub(crate) formatters: FormatterMap,
    pub(crate) highlighters: Highlighters,
    pub(crate) hlines: BTreeSet<usize>,
    pub(crate) linebreaks: bool,
    pub(crate) noheader: bool,
    pub(crate) same_column_size: bool,
    pub(crate) screen_size: Option<ScreenArea>,
    pub(crate) show_row_number: bool,
    pub(crate) border_style: Style,
    pub(crate) header_style: ColumnStyles,
    pub(crate) subheader_style: ColumnStyles,
    pub(crate) rownum_header_style: Style,
    pub(crate) text_style: Style,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            style: TableStyle::default(),
            alignment: Alignment::default(),
            crop: CropPolicy::default(),
            row_filters: FilterSet::new(),
            col_filters: FilterSet::new(),
            formatters: FormatterMap::new(),
            highlighters: Highlighters::new(),
            hlines: BTreeSet::new(),
            linebreaks: false,
            noheader: false,
            same_column_size: false,
            screen_size: None,
            show_row_number: false,
            border_style: Style::new(),
            header_style: ColumnStyles::default(),
            subheader_style: ColumnStyles::default(),
            rownum_header_style: Style::new(),
            text_style: Style::new(),
        }
    }
}

impl Table {
    /// Creates a table with default options: `unicode` style, right
    /// alignment, cropping in both directions, unlimited screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from serializable options.
    pub fn from_config(config: &TableConfig) -> Self {
        Table {
            style: config.style.style(),
            alignment: config.alignment.clone(),
            crop: config.crop,
            hlines: config.hlines.iter().copied().collect(),
            linebreaks: config.linebreaks,
            noheader: config.noheader,
            same_column_size: config.same_column_size,
            screen_size: config.screen_size,
            show_row_number: config.show_row_number,
            ..Table::default()
        }
    }

    /// The serializable part of the options.
    pub fn config(&self) -> TableConfig {
        TableConfig {
            style: self.style.into(),
            alignment: self.alignment.clone(),
            crop: self.crop,
            hlines: self.hlines.iter().copied().collect(),
            linebreaks: self.linebreaks,
            noheader: self.noheader,
            same_column_size: self.same_column_size,
            screen_size: self.screen_size,
            show_row_number: self.show_row_number,
        }
    }

    /// Set the border style.
    pub fn style(mut self, style: impl Into<TableStyle>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the alignment: one [`Align`](crate::Align) for every column or one
    /// per original column.
    pub fn alignment(mut self, alignment: impl Into<Alignment>) -> Self {
        self.alignment = alignment.into();
        self
    }

    /// Set the crop policy.
    pub fn crop(mut self, crop: CropPolicy) -> Self {
        self.crop = crop;
        self
    }

    /// Add a row predicate. Rows must pass every predicate to be shown.
    pub fn filter_rows<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn RowSource, usize) -> bool + Send + Sync + 'static,
    {
        self.row_filters.push(predicate);
        self
    }

    /// Add a column predicate. Columns must pass every predicate to be shown.
    pub fn filter_columns<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn RowSource, usize) -> bool + Send + Sync + 'static,
    {
        self.col_filters.push(predicate);
        self
    }

    /// Replace all row predicates.
    pub fn row_filters(mut self, filters: FilterSet) -> Self {
        self.row_filters = filters;
        self
    }

    /// Replace all column predicates.
    pub fn column_filters(mut self, filters: FilterSet) -> Self {
        self.col_filters = filters;
        self
    }

    /// Set the cell formatters.
    pub fn formatters(mut self, formatters: FormatterMap) -> Self {
        self.formatters = formatters;
        self
    }

    /// Append a highlighter. Earlier highlighters take precedence.
    pub fn highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighters.push(highlighter);
        self
    }

    /// Replace all highlighters.
    pub fn highlighters(mut self, highlighters: Highlighters) -> Self {
        self.highlighters = highlighters;
        self
    }

    /// Draw an extra rule after each of these original rows.
    pub fn hlines<I: IntoIterator<Item = usize>>(mut self, rows: I) -> Self {
        self.hlines = rows.into_iter().collect();
        self
    }

    /// Split cells and headers at embedded line breaks.
    pub fn linebreaks(mut self, enable: bool) -> Self {
        self.linebreaks = enable;
        self
    }

    /// Suppress the header and its separator.
    pub fn noheader(mut self, enable: bool) -> Self {
        self.noheader = enable;
        self
    }

    /// Give every data column the width of the widest one.
    pub fn same_column_size(mut self, enable: bool) -> Self {
        self.same_column_size = enable;
        self
    }

    /// Bound the output to an area of `(rows, cols)`.
    pub fn screen_size(mut self, area: impl Into<ScreenArea>) -> Self {
        self.screen_size = Some(area.into());
        self
    }

    /// Prepend a `Row` column with one-based original row numbers.
    pub fn show_row_number(mut self, enable: bool) -> Self {
        self.show_row_number = enable;
        self
    }

    /// Paint border glyphs and continuation markers.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Paint the first header row: one style for every column or one per
    /// original column.
    pub fn header_style(mut self, styles: impl Into<ColumnStyles>) -> Self {
        self.header_style = styles.into();
        self
    }

    /// Paint the sub-header rows, like [`header_style`](Self::header_style).
    pub fn subheader_style(mut self, styles: impl Into<ColumnStyles>) -> Self {
        self.subheader_style = styles.into();
        self
    }

    /// Paint the `Row` label of the row-number column.
    pub fn rownum_header_style(mut self, style: Style) -> Self {
        self.rownum_header_style = style;
        self
    }

    /// Paint cells no highlighter matches.
    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Get the border style.
    pub fn get_style(&self) -> &TableStyle {
        &self.style
    }

    /// Get the alignment.
    pub fn get_alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// Render `source` with generated `Col. i` headers.
    pub fn render<W, S>(&self, sink: &mut W, source: &S) -> Result<()>
    where
        W: Write + ?Sized,
        S: RowSource + ?Sized,
    {
        render(sink, source, None, self)
    }

    /// Render `source` under `header`.
    pub fn render_with_header<W, S>(&self, sink: &mut W, source: &S, header: &Header) -> Result<()>
    where
        W: Write + ?Sized,
        S: RowSource + ?Sized,
    {
        render(sink, source, Some(header), self)
    }

    /// Render to a string instead of a sink.
    pub fn render_to_string<S>(&self, source: &S, header: Option<&Header>) -> Result<String>
    where
        S: RowSource + ?Sized,
    {
        let area = self.screen_size.unwrap_or_else(ScreenArea::unlimited);
        layout(&source, header, self, area)
    }

    /// Render to standard output.
    ///
    /// Without a configured screen size the terminal size is used, and the
    /// output is unbounded when stdout is not a terminal.
    pub fn print<S>(&self, source: &S) -> Result<()>
    where
        S: RowSource + ?Sized,
    {
        self.write_to_screen(&mut io::stdout().lock(), &source, None)
    }

    /// Render to standard output under `header`. See [`print`](Self::print).
    pub fn print_with_header<S>(&self, source: &S, header: &Header) -> Result<()>
    where
        S: RowSource + ?Sized,
    {
        self.write_to_screen(&mut io::stdout().lock(), &source, Some(header))
    }

    /// Render key/value pairs to standard output. See
    /// [`render_map`](Self::render_map) and [`print`](Self::print).
    pub fn print_map<I, K, V>(&self, entries: I, sort_keys: bool) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let source = MapSource::new(entries, sort_keys)?;
        self.write_to_screen(&mut io::stdout().lock(), &source, Some(&source.header()))
    }

    fn write_to_screen<W: Write>(
        &self,
        sink: &mut W,
        source: &dyn RowSource,
        header: Option<&Header>,
    ) -> Result<()> {
        let area = self.screen_size.unwrap_or_else(ScreenArea::detect);
        let text = layout(source, header, self, area)?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Render key/value pairs as a `Keys` / `Values` table.
    ///
    /// With `sort_keys`, entries are shown in ascending key order and keys
    /// that cannot be ordered are a configuration error. Otherwise they keep
    /// the iteration order of `entries`.
    pub fn render_map<W, I, K, V>(&self, sink: &mut W, entries: I, sort_keys: bool) -> Result<()>
    where
        W: Write + ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let source = MapSource::new(entries, sort_keys)?;
        render(sink, &source, Some(&source.header()), self)
    }
}
