use std::collections::HashMap;
use std::fs;
use std::path::Path;

use zhconv::{zhconv, Variant};

use crate::error::{Error, Result};

/// Converts text between Han script variants.
pub trait ScriptConverter {
    fn convert(&self, text: &str) -> Result<String>;
}

/// Returns text unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityConverter;

impl ScriptConverter for IdentityConverter {
    fn convert(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Simplified to traditional with the tables bundled in `zhconv`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZhconvConverter;

impl ScriptConverter for ZhconvConverter {
    fn convert(&self, text: &str) -> Result<String> {
        Ok(zhconv(text, Variant::ZhHant))
    }
}

// Loaded in this order; phrases win over single characters.
const S2T_FILES: [&str; 2] = ["STPhrases.txt", "STCharacters.txt"];

/// Simplified to traditional conversion driven by OpenCC dictionary files.
///
/// Each dictionary line is `source<TAB>candidate [candidate...]`; the first
/// candidate is used. Conversion is greedy longest match from left to right.
#[derive(Debug, Default, Clone)]
pub struct OpenCcTable {
    table: HashMap<String, String>,
    // Longest key, in chars
    max_key: usize,
}

impl OpenCcTable {
    /// Loads `STPhrases.txt` and `STCharacters.txt` from `dir`. At least one
    /// of them has to exist.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut table = OpenCcTable::default();
        let mut loaded = 0usize;

        for name in S2T_FILES {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            let text = fs::read_to_string(&path)?;
            table.load_str(&text);
            loaded += 1;
            tracing::debug!("Loaded {} ({} keys total)", path.display(), table.len());
        }

        if loaded == 0 {
            return Err(Error::ScriptTableMissing {
                dir: dir.to_path_buf(),
            });
        }

        Ok(table)
    }

    /// Adds mappings from dictionary text. Existing keys are not overwritten.
    pub fn load_str(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, candidates)) = line.split_once('\t') else {
                continue;
            };
            let Some(first) = candidates.split_whitespace().next() else {
                continue;
            };

            if key.is_empty() || self.table.contains_key(key) {
                continue;
            }

            self.max_key = self.max_key.max(key.chars().count());
            self.table.insert(key.to_string(), first.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl ScriptConverter for OpenCcTable {
    fn convert(&self, text: &str) -> Result<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let start = chars[i].0;
            let longest = self.max_key.min(chars.len() - i);

            let hit = (1..=longest).rev().find_map(|n| {
                let end = chars.get(i + n).map_or(text.len(), |(pos, _)| *pos);
                self.table.get(&text[start..end]).map(|value| (n, value))
            });

            match hit {
                Some((n, value)) => {
                    out.push_str(value);
                    i += n;
                }
                None => {
                    out.push(chars[i].1);
                    i += 1;
                }
            }
        }

        Ok(out)
    }
}
