//! Convenient imports for building and rendering tables.
//!
//! ```rust
//! use prettygrid::prelude::*;
//!
//! let table = Table::new()
//!     .style(TableStyle::ASCII_ROUNDED)
//!     .alignment(Align::Left)
//!     .highlighter(Highlighter::row(0, Style::new().bold()));
//!
//! let text = table.render_to_string(&vec![vec!["a", "b"]], None).unwrap();
//! assert!(text.starts_with(".--------.--------.\n"));
//! ```

// Builder and options
pub use crate::{
    Align, Alignment, ColumnStyles, CropPolicy, ScreenArea, StyleName, Table, TableConfig,
    TableStyle,
};

// Data
pub use crate::{Header, MapSource, RowSource, Value};

// Callbacks
pub use crate::{formatters, FilterSet, FormatterMap, Highlighter, Highlighters};

// Errors
pub use crate::{SourceError, TableError};

// Re-export console::Style for convenience
pub use console::Style;
