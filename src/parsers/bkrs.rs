use crate::model::entry::BkrsEntry;
use crate::model::options::Layout;
use crate::parsers::markup;

/// What a single dump line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// Two-line layout only: emitted straight from the second line, before
    /// the raw line is stored as pinyin. Skips the reading filter and script
    /// conversion.
    Immediate(BkrsEntry),
    /// Third line of a group. Goes through the conversion policy.
    Complete(BkrsEntry),
}

/// Groups dump lines into entries.
///
/// Groups are separated by blank lines or `#` comments; either one resets
/// the parser and drops whatever was collected so far.
#[derive(Debug, Default)]
pub struct RecordParser {
    layout: Layout,
    slot: usize,
    current: BkrsEntry,
}

impl RecordParser {
    pub fn new(layout: Layout) -> Self {
        RecordParser {
            layout,
            slot: 0,
            current: BkrsEntry::default(),
        }
    }

    pub fn feed(&mut self, line: &str) -> Option<Parsed> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            self.reset();
            return None;
        }

        let mut out = None;

        match self.slot {
            0 => self.current.expression = line.to_string(),
            1 => {
                if self.layout == Layout::TwoLine {
                    self.current.meaning = markup::clean(line);
                    out = Some(Parsed::Immediate(self.current.clone()));
                }
                self.current.pinyin = line.to_string();
            }
            2 => {
                self.current.meaning = markup::clean(line);
                out = Some(Parsed::Complete(self.current.clone()));
            }
            // Extra lines are ignored until the next separator
            _ => {}
        }

        self.slot += 1;
        out
    }

    fn reset(&mut self) {
        self.slot = 0;
        self.current = BkrsEntry::default();
    }
}

/// Parses a whole dump held in memory.
pub fn parse(text: &str, layout: Layout) -> Vec<Parsed> {
    let mut parser = RecordParser::new(layout);
    text.lines().filter_map(|line| parser.feed(line)).collect()
}
