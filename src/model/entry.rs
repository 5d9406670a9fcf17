/// Reading used by the dump when an entry has no pinyin.
pub const NO_READING: &str = "_";

/// An entry being assembled from consecutive dump lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BkrsEntry {
    pub expression: String,
    // Raw second line. In the zh-ru dump this is pinyin or `_`.
    pub pinyin: String,
    // Already cleaned of markup by the time the entry is emitted.
    pub meaning: String,
}

impl BkrsEntry {
    pub fn has_reading(&self) -> bool {
        self.pinyin != NO_READING
    }
}
