use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::model::term::YomiTerm;

/// Terms per `term_bank_<N>.json` file.
pub const TERM_BANK_SIZE: usize = 10_000;

pub fn term_bank_name(index: usize) -> String {
    format!("term_bank_{index}.json")
}

/// Buffers terms and writes them out as numbered term banks.
pub struct TermBankWriter {
    dir: PathBuf,
    capacity: usize,
    batch: Vec<YomiTerm>,
    next_index: usize,
    total: usize,
}

impl TermBankWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_capacity(dir, TERM_BANK_SIZE)
    }

    pub fn with_capacity(dir: impl Into<PathBuf>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        TermBankWriter {
            dir: dir.into(),
            capacity,
            batch: Vec::with_capacity(capacity),
            next_index: 1,
            total: 0,
        }
    }

    pub fn push(&mut self, term: YomiTerm) -> Result<()> {
        self.batch.push(term);

        if self.batch.len() == self.capacity {
            self.flush()?;
        }

        Ok(())
    }

    /// Writes the last partial bank. Returns `(terms written, banks written)`.
    pub fn finish(mut self) -> Result<(usize, usize)> {
        if !self.batch.is_empty() {
            self.flush()?;
        }

        Ok((self.total, self.next_index - 1))
    }

    /// Terms written to disk so far.
    pub fn written(&self) -> usize {
        self.total
    }

    fn flush(&mut self) -> Result<()> {
        let path = self.dir.join(term_bank_name(self.next_index));
        let json = serde_json::to_vec(&self.batch)?;
        fs::write(&path, json)?;

        self.total += self.batch.len();
        tracing::debug!(
            "Wrote {} ({} terms, {} total)",
            path.display(),
            self.batch.len(),
            self.total
        );

        self.batch.clear();
        self.next_index += 1;
        Ok(())
    }
}
