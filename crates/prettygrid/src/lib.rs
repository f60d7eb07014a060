//! # prettygrid - Text Tables for Terminals and Files
//!
//! `prettygrid` lays out rows and columns of values as fixed-width text with
//! box-drawing borders. It measures real display widths, so wide characters
//! and border glyphs line up, and it can crop a table to fit a terminal.
//!
//! ## Core Concepts
//!
//! - [`RowSource`]: random access to the data, implemented for grids and
//!   [`MapSource`]
//! - [`Table`]: builder holding every rendering option
//! - [`TableStyle`]: border glyphs and line toggles, with predefined styles
//! - [`FilterSet`], [`FormatterMap`], [`Highlighter`]: per-row, per-column
//!   and per-cell callbacks, always addressed by original indices
//! - [`CropPolicy`] and [`ScreenArea`]: which directions are cropped, and to
//!   what size
//! - [`TableConfig`]: the serializable options, loadable from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use prettygrid::Table;
//!
//! let data = vec![vec![1, 2, 3], vec![4, 5, 6]];
//! let text = Table::new().render_to_string(&data, None).unwrap();
//!
//! assert_eq!(
//!     text,
//!     "┌────────┬────────┬────────┐\n\
//!      │ Col. 1 │ Col. 2 │ Col. 3 │\n\
//!      ├────────┼────────┼────────┤\n\
//!      │      1 │      2 │      3 │\n\
//!      │      4 │      5 │      6 │\n\
//!      └────────┴────────┴────────┘\n"
//! );
//! ```
//!
//! ## Filtering, Formatting and Highlighting
//!
//! Callbacks receive original row and column indices, no matter what was
//! filtered out before them. Highlighters see the source value, not the
//! formatted one:
//!
//! ```rust
//! use console::Style;
//! use prettygrid::{formatters, FormatterMap, Highlighter, Table};
//!
//! let data = vec![vec![0.5, -1.25], vec![2.0, 3.75], vec![-4.0, 5.5]];
//!
//! let table = Table::new()
//!     .filter_rows(|_, row| row != 1)
//!     .formatters(FormatterMap::new().all(formatters::fixed(1)))
//!     .highlighter(Highlighter::less_than(0.0, Style::new().red()));
//!
//! let text = table.render_to_string(&data, None).unwrap();
//! assert!(text.contains("    5.5 │\n"));
//! assert!(!text.contains("3.8"));
//! ```
//!
//! ## Cropping
//!
//! With a bounded [`ScreenArea`], columns that do not fit are replaced by a
//! ` ⋯` marker and rows that do not fit by a `⋮` row. The header and the
//! first data row are always shown.
//!
//! ```rust
//! use prettygrid::Table;
//!
//! let data: Vec<Vec<i32>> = (0..6).map(|r| (0..4).map(|c| r * 4 + c).collect()).collect();
//! let text = Table::new().screen_size((10, 30)).render_to_string(&data, None).unwrap();
//!
//! assert!(text.lines().all(|line| line.ends_with(" ⋯")));
//! assert!(text.contains("⋮"));
//! ```
//!
//! ## Errors
//!
//! Every inconsistency in the options is reported as a [`TableError`] before
//! anything is written. See [`TableError::is_configuration`].
//!
//! ## Logging
//!
//! Layout decisions are logged through the [`log`] facade at `debug` level.
//! No logger is installed by this crate.

pub mod config;
pub mod crop;
mod error;
pub mod filter;
pub mod format;
mod header;
pub mod highlight;
pub mod prelude;
mod render;
pub mod source;
pub mod style;
mod table;
mod types;
pub mod util;
mod value;

// Error types
pub use error::{Result, SourceError, TableError};

// Data model
pub use header::Header;
pub use source::{MapSource, RowSource};
pub use value::Value;

// Options
pub use config::{StyleChoice, TableConfig};
pub use crop::{CropPolicy, ScreenArea};
pub use style::{StyleName, TableStyle};
pub use table::Table;
pub use types::{Align, Alignment, ColumnStyles};

// Pipeline stages
pub use filter::{FilterSet, IndexPredicate, Visible};
pub use format::{formatters, Cell, Formatter, FormatterMap};
pub use highlight::{CellPredicate, Highlighter, Highlighters};
pub use render::{render, COLUMN_MARKER, ROW_MARKER, ROW_NUMBER_LABEL};
