//! Border styles.
//!
//! A [`TableStyle`] is plain data: the glyph used in every border slot and
//! which horizontal lines are drawn. The named styles are associated
//! constants, and custom styles are usually derived from one of them with
//! struct update syntax or the `with_*` helpers:
//!
//! ```
//! use prettygrid::TableStyle;
//!
//! let open_bottom = TableStyle { bottom_line: false, ..TableStyle::SIMPLE };
//! assert_eq!(open_bottom, TableStyle::SIMPLE.with_bottom_line(false));
//! ```
//!
//! Slot layout for the default style:
//!
//! ```text
//! top_left ┌───┬───┐ top_right          (top_junction ┬)
//! left_border │ a │ b │ right_border    (column │)
//! left_junction ├───┼───┤ right_junction (cross ┼)
//! bottom_left └───┴───┘ bottom_right    (bottom_junction ┴)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::error::TableError;

/// Glyphs and line toggles describing how a table's borders are drawn.
///
/// When deserialized, missing fields are taken from [`TableStyle::UNICODE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub top_junction: char,
    pub left_junction: char,
    pub right_junction: char,
    pub cross: char,
    pub bottom_junction: char,
    /// Separator between two cells of the same line.
    pub column: char,
    pub left_border: char,
    pub right_border: char,
    /// Fill glyph of horizontal lines.
    pub horizontal: char,
    /// Draw the line above the header.
    pub top_line: bool,
    /// Draw the line between header and body.
    pub header_line: bool,
    /// Draw the line below the last row.
    pub bottom_line: bool,
    /// Draw a line between every two data rows.
    pub row_lines: bool,
}

impl TableStyle {
    /// Light box-drawing characters. This is the default style.
    pub const UNICODE: TableStyle = TableStyle {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        top_junction: '┬',
        left_junction: '├',
        right_junction: '┤',
        cross: '┼',
        bottom_junction: '┴',
        column: '│',
        left_border: '│',
        right_border: '│',
        horizontal: '─',
        top_line: true,
        header_line: true,
        bottom_line: true,
        row_lines: false,
    };

    /// Light box-drawing characters with rounded corners.
    pub const UNICODE_ROUNDED: TableStyle = TableStyle {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..TableStyle::UNICODE
    };

    /// Heavy box-drawing characters.
    pub const HEAVY: TableStyle = TableStyle {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        top_junction: '┳',
        left_junction: '┣',
        right_junction: '┫',
        cross: '╋',
        bottom_junction: '┻',
        column: '┃',
        left_border: '┃',
        right_border: '┃',
        horizontal: '━',
        ..TableStyle::UNICODE
    };

    /// Double-line box-drawing characters.
    pub const DOUBLE: TableStyle = TableStyle {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        top_junction: '╦',
        left_junction: '╠',
        right_junction: '╣',
        cross: '╬',
        bottom_junction: '╩',
        column: '║',
        left_border: '║',
        right_border: '║',
        horizontal: '═',
        ..TableStyle::UNICODE
    };

    /// ASCII box drawn with dots and colons.
    pub const ASCII_DOTS: TableStyle = TableStyle {
        top_left: '.',
        top_right: '.',
        bottom_left: ':',
        bottom_right: ':',
        top_junction: '.',
        left_junction: ':',
        right_junction: ':',
        cross: ':',
        bottom_junction: ':',
        column: ':',
        left_border: ':',
        right_border: ':',
        horizontal: '.',
        ..TableStyle::UNICODE
    };

    /// ASCII box with rounded-looking corners.
    pub const ASCII_ROUNDED: TableStyle = TableStyle {
        top_left: '.',
        top_right: '.',
        bottom_left: '\'',
        bottom_right: '\'',
        top_junction: '.',
        left_junction: ':',
        right_junction: ':',
        cross: '+',
        bottom_junction: '\'',
        column: '|',
        left_border: '|',
        right_border: '|',
        horizontal: '-',
        ..TableStyle::UNICODE
    };

    /// No visible borders; a blank line separates header and body.
    pub const BORDERLESS: TableStyle = TableStyle {
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
        top_junction: ' ',
        left_junction: ' ',
        right_junction: ' ',
        cross: ' ',
        bottom_junction: ' ',
        column: ' ',
        left_border: ' ',
        right_border: ' ',
        horizontal: ' ',
        top_line: false,
        header_line: true,
        bottom_line: false,
        row_lines: false,
    };

    /// Only dashed horizontal rules, one per column.
    pub const COMPACT: TableStyle = TableStyle {
        horizontal: '-',
        top_line: true,
        bottom_line: true,
        ..TableStyle::BORDERLESS
    };

    /// Markdown (GitHub flavored) table.
    pub const MARKDOWN: TableStyle = TableStyle {
        left_junction: '|',
        right_junction: '|',
        cross: '|',
        column: '|',
        left_border: '|',
        right_border: '|',
        horizontal: '-',
        ..TableStyle::BORDERLESS
    };

    /// The `+---+` boxes of SQL command line clients.
    pub const MYSQL: TableStyle = TableStyle {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        top_junction: '+',
        left_junction: '+',
        right_junction: '+',
        cross: '+',
        bottom_junction: '+',
        column: '|',
        left_border: '|',
        right_border: '|',
        horizontal: '-',
        ..TableStyle::UNICODE
    };

    /// Double rules (`=`) above, below and under the header.
    pub const SIMPLE: TableStyle = TableStyle {
        top_left: '=',
        top_right: '=',
        bottom_left: '=',
        bottom_right: '=',
        left_junction: '=',
        right_junction: '=',
        horizontal: '=',
        top_line: true,
        bottom_line: true,
        ..TableStyle::BORDERLESS
    };

    /// Toggle the line above the header.
    pub fn with_top_line(mut self, enable: bool) -> Self {
        self.top_line = enable;
        self
    }

    /// Toggle the line between header and body.
    pub fn with_header_line(mut self, enable: bool) -> Self {
        self.header_line = enable;
        self
    }

    /// Toggle the line below the last row.
    pub fn with_bottom_line(mut self, enable: bool) -> Self {
        self.bottom_line = enable;
        self
    }

    /// Toggle lines between all data rows.
    pub fn with_row_lines(mut self, enable: bool) -> Self {
        self.row_lines = enable;
        self
    }

    /// Every glyph slot with its name.
    pub fn glyphs(&self) -> [(&'static str, char); 13] {
        [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_left", self.bottom_left),
            ("bottom_right", self.bottom_right),
            ("top_junction", self.top_junction),
            ("left_junction", self.left_junction),
            ("right_junction", self.right_junction),
            ("cross", self.cross),
            ("bottom_junction", self.bottom_junction),
            ("column", self.column),
            ("left_border", self.left_border),
            ("right_border", self.right_border),
            ("horizontal", self.horizontal),
        ]
    }

    /// Checks that every glyph is exactly one terminal cell wide.
    pub fn validate(&self) -> Result<(), TableError> {
        for (slot, glyph) in self.glyphs() {
            let width = glyph.width().unwrap_or(0);
            if width != 1 {
                return Err(TableError::InvalidGlyph { slot, glyph, width });
            }
        }
        Ok(())
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle::UNICODE
    }
}

/// Names of the predefined styles, as used in configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleName {
    #[default]
    Unicode,
    UnicodeRounded,
    Heavy,
    Double,
    AsciiDots,
    AsciiRounded,
    Borderless,
    Compact,
    Markdown,
    Mysql,
    Simple,
}

impl StyleName {
    /// All predefined style names.
    pub const ALL: [StyleName; 11] = [
        StyleName::Unicode,
        StyleName::UnicodeRounded,
        StyleName::Heavy,
        StyleName::Double,
        StyleName::AsciiDots,
        StyleName::AsciiRounded,
        StyleName::Borderless,
        StyleName::Compact,
        StyleName::Markdown,
        StyleName::Mysql,
        StyleName::Simple,
    ];

    /// The style this name refers to.
    pub fn style(self) -> TableStyle {
        match self {
            StyleName::Unicode => TableStyle::UNICODE,
            StyleName::UnicodeRounded => TableStyle::UNICODE_ROUNDED,
            StyleName::Heavy => TableStyle::HEAVY,
            StyleName::Double => TableStyle::DOUBLE,
            StyleName::AsciiDots => TableStyle::ASCII_DOTS,
            StyleName::AsciiRounded => TableStyle::ASCII_ROUNDED,
            StyleName::Borderless => TableStyle::BORDERLESS,
            StyleName::Compact => TableStyle::COMPACT,
            StyleName::Markdown => TableStyle::MARKDOWN,
            StyleName::Mysql => TableStyle::MYSQL,
            StyleName::Simple => TableStyle::SIMPLE,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            StyleName::Unicode => "unicode",
            StyleName::UnicodeRounded => "unicode_rounded",
            StyleName::Heavy => "heavy",
            StyleName::Double => "double",
            StyleName::AsciiDots => "ascii_dots",
            StyleName::AsciiRounded => "ascii_rounded",
            StyleName::Borderless => "borderless",
            StyleName::Compact => "compact",
            StyleName::Markdown => "markdown",
            StyleName::Mysql => "mysql",
            StyleName::Simple => "simple",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleName {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        StyleName::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| TableError::InvalidConfig(format!("unknown table style '{}'", s)))
    }
}

impl From<StyleName> for TableStyle {
    fn from(name: StyleName) -> Self {
        name.style()
    }
}
