use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::entry::BkrsEntry;

/// One row of a Yomichan `term_bank_<N>.json` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YomiTerm {
    pub expression: String,
    pub reading: String,
    pub definition_tags: Vec<String>,
    pub rules: Vec<String>,
    pub score: i64,
    pub glossary: Vec<String>,
    pub sequence: i64,
    pub term_tags: Vec<String>,
}

impl From<BkrsEntry> for YomiTerm {
    fn from(entry: BkrsEntry) -> Self {
        YomiTerm {
            expression: entry.expression,
            reading: entry.pinyin,
            glossary: vec![entry.meaning],
            ..Default::default()
        }
    }
}

// Term banks are positional: each term is an 8-element array, tag lists are
// space-joined strings.
impl Serialize for YomiTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_tuple(8)?;
        row.serialize_element(&self.expression)?;
        row.serialize_element(&self.reading)?;
        row.serialize_element(&self.definition_tags.join(" "))?;
        row.serialize_element(&self.rules.join(" "))?;
        row.serialize_element(&self.score)?;
        row.serialize_element(&self.glossary)?;
        row.serialize_element(&self.sequence)?;
        row.serialize_element(&self.term_tags.join(" "))?;
        row.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_entry() {
        let term = YomiTerm::from(BkrsEntry {
            expression: "搁浅".into(),
            pinyin: "gēqiǎn".into(),
            meaning: "сесть на мель".into(),
        });

        assert_eq!(term.expression, "搁浅");
        assert_eq!(term.reading, "gēqiǎn");
        assert_eq!(term.glossary, vec!["сесть на мель".to_string()]);
        assert_eq!(term.score, 0);
        assert_eq!(term.sequence, 0);
        assert!(term.rules.is_empty());
    }

    #[test]
    fn test_serializes_as_positional_row() {
        let term = YomiTerm {
            expression: "好".into(),
            reading: "hǎo".into(),
            definition_tags: vec!["adj".into(), "common".into()],
            rules: vec![],
            score: 5,
            glossary: vec!["хороший".into()],
            sequence: 12,
            term_tags: vec!["hsk1".into()],
        };

        let value = serde_json::to_value(&term).unwrap();
        assert_eq!(
            value,
            json!(["好", "hǎo", "adj common", "", 5, ["хороший"], 12, "hsk1"])
        );
    }
}
