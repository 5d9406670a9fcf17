use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Error;

fn default_staging_dir() -> PathBuf {
    PathBuf::from("yomi_tmp")
}

/// How many lines make up one dump entry.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// zh-ru dump: headword, pinyin, meaning.
    #[default]
    ThreeLine,
    /// ru-zh dump: headword, meaning.
    TwoLine,
}

/// Han script handling, selected by `--type`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    #[default]
    Simplified,
    Traditional,
    /// Only entries whose traditional form differs, for use next to a
    /// simplified dictionary.
    TraditionalAddon,
}

impl ConversionMode {
    pub fn needs_converter(self) -> bool {
        self != ConversionMode::Simplified
    }
}

impl TryFrom<u8> for ConversionMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ConversionMode::Simplified),
            1 => Ok(ConversionMode::Traditional),
            2 => Ok(ConversionMode::TraditionalAddon),
            other => Err(Error::InvalidConversionMode(other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Keep entries without pinyin.
    #[serde(default)]
    pub extended: bool,

    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub mode: ConversionMode,

    #[serde(default = "default_staging_dir")]
    pub staging_dir: PathBuf,

    // None → `<stem>_yomichan.zip` in the working directory
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            extended: false,
            layout: Layout::default(),
            mode: ConversionMode::default(),
            staging_dir: default_staging_dir(),
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_u8() {
        assert_eq!(ConversionMode::try_from(0).unwrap(), ConversionMode::Simplified);
        assert_eq!(ConversionMode::try_from(1).unwrap(), ConversionMode::Traditional);
        assert_eq!(ConversionMode::try_from(2).unwrap(), ConversionMode::TraditionalAddon);
        assert!(matches!(
            ConversionMode::try_from(3),
            Err(Error::InvalidConversionMode(3))
        ));
    }

    #[test]
    fn test_defaults_from_empty_json() {
        let opts: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ExportOptions::default());
        assert_eq!(opts.staging_dir, PathBuf::from("yomi_tmp"));
        assert_eq!(opts.layout, Layout::ThreeLine);
    }

    #[test]
    fn test_partial_json() {
        let opts: ExportOptions =
            serde_json::from_str(r#"{"layout": "two_line", "mode": "traditional_addon"}"#).unwrap();
        assert_eq!(opts.layout, Layout::TwoLine);
        assert_eq!(opts.mode, ConversionMode::TraditionalAddon);
        assert!(!opts.extended);
    }
}
