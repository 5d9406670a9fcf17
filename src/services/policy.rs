use crate::model::entry::BkrsEntry;
use crate::model::options::ConversionMode;
use crate::services::script::ScriptConverter;

/// Decides what happens to each completed entry.
pub struct ConversionPolicy<'a> {
    pub mode: ConversionMode,
    pub extended: bool,
    pub converter: &'a dyn ScriptConverter,
}

impl<'a> ConversionPolicy<'a> {
    pub fn new(mode: ConversionMode, extended: bool, converter: &'a dyn ScriptConverter) -> Self {
        ConversionPolicy {
            mode,
            extended,
            converter,
        }
    }

    /// Returns the entry to emit, or `None` when it is dropped.
    pub fn apply(&self, mut entry: BkrsEntry) -> Option<BkrsEntry> {
        if !self.extended && !entry.has_reading() {
            return None;
        }

        match self.mode {
            ConversionMode::Simplified => Some(entry),
            ConversionMode::Traditional => {
                entry.expression = self.convert(&entry.expression);
                Some(entry)
            }
            ConversionMode::TraditionalAddon => {
                let traditional = self.convert(&entry.expression);
                // Same spelling is already covered by the simplified dictionary
                if traditional == entry.expression {
                    return None;
                }
                entry.expression = traditional;
                Some(entry)
            }
        }
    }

    // Conversion failures keep the original text
    fn convert(&self, text: &str) -> String {
        match self.converter.convert(text) {
            Ok(converted) => converted,
            Err(e) => {
                tracing::warn!("Script conversion failed for {:?}: {}", text, e);
                text.to_string()
            }
        }
    }
}
