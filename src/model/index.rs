use serde::{Deserialize, Serialize};

use super::options::{ConversionMode, ExportOptions, Layout};

/// Yomichan dictionary format version written to `index.json`.
pub const FORMAT_VERSION: u32 = 3;

const BKRS_URL: &str = "https://bkrs.info/";

/// Contents of `index.json`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct YomiIndex {
    pub title: String,
    pub format: u32,
    pub revision: String,
    pub sequenced: bool,
    pub url: String,
    pub description: String,
}

impl YomiIndex {
    pub fn new(revision: impl Into<String>, title: DictionaryTitle) -> Self {
        YomiIndex {
            title: title.title,
            format: FORMAT_VERSION,
            revision: revision.into(),
            sequenced: true,
            url: BKRS_URL.to_string(),
            description: title.description,
        }
    }
}

/// Display title, description and archive stem for one export flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryTitle {
    pub title: String,
    /// Latin-only name used for the archive file.
    pub stem: String,
    pub description: String,
}

impl DictionaryTitle {
    pub fn for_options(options: &ExportOptions) -> Self {
        // The ru-zh dump ignores mode/extended in its naming
        if options.layout == Layout::TwoLine {
            return DictionaryTitle {
                title: "БРуКС".to_string(),
                stem: "BRuKS".to_string(),
                description: "Большой русско-китайский словарь, compiled with bkrs2yomi".to_string(),
            };
        }

        let mut title = "大БКРС".to_string();
        let mut stem = "BKRS".to_string();

        match options.mode {
            ConversionMode::Simplified => stem.push_str("-Simpl"),
            ConversionMode::Traditional => stem.push_str("-Trad"),
            ConversionMode::TraditionalAddon => {
                stem.push_str("-Trad-Addon");
                title.push_str("-t");
            }
        }

        if options.extended {
            stem.push_str("-Extended");
        }

        DictionaryTitle {
            title,
            stem,
            description: "Большой китайско-русский словарь, compiled with bkrs2yomi".to_string(),
        }
    }

    pub fn archive_name(&self) -> String {
        format!("{}_yomichan.zip", self.stem)
    }
}
