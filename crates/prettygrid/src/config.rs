//! Serializable table options.
//!
//! [`TableConfig`] is the plain-data half of a [`Table`](crate::Table): every
//! option that can be written down in a file. Callbacks (filters, formatters,
//! highlighters) and paint styles are added on the builder afterwards.
//!
//! ```
//! use prettygrid::{Align, CropPolicy, StyleName, Table, TableConfig};
//!
//! let config = TableConfig::from_yaml(
//!     r#"
//! style: markdown
//! alignment: [left, right]
//! crop: none
//! show_row_number: true
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.crop, CropPolicy::None);
//! assert_eq!(config.alignment.get(0), Align::Left);
//!
//! let table = Table::from_config(&config);
//! assert_eq!(table.config().style.style(), StyleName::Markdown.style());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crop::{CropPolicy, ScreenArea};
use crate::error::{Result, TableError};
use crate::style::{StyleName, TableStyle};
use crate::types::Alignment;

/// A border style given by name or spelled out glyph by glyph.
///
/// A custom style only needs the fields that differ from the default
/// `unicode` style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleChoice {
    Named(StyleName),
    Custom(TableStyle),
}

impl StyleChoice {
    /// The border style this choice resolves to.
    pub fn style(&self) -> TableStyle {
        match self {
            StyleChoice::Named(name) => name.style(),
            StyleChoice::Custom(style) => *style,
        }
    }
}

impl Default for StyleChoice {
    fn default() -> Self {
        StyleChoice::Named(StyleName::default())
    }
}

impl From<StyleName> for StyleChoice {
    fn from(name: StyleName) -> Self {
        StyleChoice::Named(name)
    }
}

impl From<TableStyle> for StyleChoice {
    /// Uses the name of a predefined style when `style` is one.
    fn from(style: TableStyle) -> Self {
        StyleName::ALL
            .into_iter()
            .find(|name| name.style() == style)
            .map_or(StyleChoice::Custom(style), StyleChoice::Named)
    }
}

/// Table options that can be loaded from YAML or JSON.
///
/// Every field is optional in the document; missing ones keep their
/// defaults. Unknown fields are rejected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub style: StyleChoice,
    pub alignment: Alignment,
    pub crop: CropPolicy,
    /// Original rows followed by an extra rule.
    pub hlines: Vec<usize>,
    pub linebreaks: bool,
    pub noheader: bool,
    pub same_column_size: bool,
    /// Cropping bounds. `None` means unlimited when rendering to a sink and
    /// the terminal size when printing.
    pub screen_size: Option<ScreenArea>,
    pub show_row_number: bool,
}

impl TableConfig {
    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration file. Files ending in `.json` are parsed as
    /// JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        config.map_err(|err| match err {
            TableError::InvalidConfig(message) => {
                TableError::InvalidConfig(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Align;

    #[test]
    fn empty_document_gives_defaults() {
        let config = TableConfig::from_yaml("{}").unwrap();
        assert_eq!(config, TableConfig::default());
        assert_eq!(config.crop, CropPolicy::Both);
        assert_eq!(config.alignment, Alignment::All(Align::Right));
    }

    #[test]
    fn json_document() {
        let config = TableConfig::from_json(
            r#"{"style": "mysql", "hlines": [0, 2], "screen_size": {"rows": 10, "cols": 30}}"#,
        )
        .unwrap();
        assert_eq!(config.style, StyleChoice::Named(StyleName::Mysql));
        assert_eq!(config.hlines, vec![0, 2]);
        assert_eq!(config.screen_size, Some(ScreenArea::new(10, 30)));
    }

    #[test]
    fn custom_style_fills_in_defaults() {
        let config = TableConfig::from_yaml("style:\n  horizontal: '='\n  row_lines: true\n").unwrap();
        let style = config.style.style();
        assert_eq!(style.horizontal, '=');
        assert!(style.row_lines);
        assert_eq!(style.top_left, TableStyle::UNICODE.top_left);
    }

    #[test]
    fn unknown_style_name_is_rejected() {
        let err = TableConfig::from_yaml("style: sparkly").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = TableConfig::from_yaml("colour: red").unwrap_err();
        assert!(matches!(err, TableError::InvalidConfig(_)));
    }

    #[test]
    fn named_style_is_recognized() {
        assert_eq!(
            StyleChoice::from(TableStyle::HEAVY),
            StyleChoice::Named(StyleName::Heavy)
        );
        let custom = TableStyle::HEAVY.with_row_lines(true);
        assert_eq!(StyleChoice::from(custom), StyleChoice::Custom(custom));
    }

    #[test]
    fn yaml_round_trip() {
        let config = TableConfig {
            style: StyleName::Simple.into(),
            noheader: true,
            ..TableConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(TableConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn file_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = TableConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("table.json"));

        let missing = TableConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, TableError::Io(_)));
    }
}
