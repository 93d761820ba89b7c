//! Single responsibility principle: a journal and its persistence.
//!
//! [`Journal`] only manages its entries. Writing a journal somewhere is a
//! separate concern handled by [`PersistenceManager`], so a change in
//! storage never touches the journal.

use std::fmt;
use std::io::Write;

use dp_core::{Error, Result};

/// An ordered list of numbered entries.
///
/// Entry numbers come from a running counter and are never reused, so
/// removing an entry leaves a gap in the numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` as the next numbered entry.
    pub fn add_entry(&mut self, text: &str) {
        self.count += 1;
        tracing::trace!(number = self.count, "journal entry added");
        self.entries.push(format!("{}: {}", self.count, text));
    }

    /// Remove and return the entry at position `pos`.
    pub fn remove_entry(&mut self, pos: usize) -> Result<String> {
        let size = self.entries.len();
        if pos >= size {
            return Err(Error::IndexOutOfRange { index: pos, size });
        }
        tracing::trace!(pos, "journal entry removed");
        Ok(self.entries.remove(pos))
    }

    /// The entries, formatted as `"<number>: <text>"`.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the journal holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join("\n"))
    }
}

/// Writes journals to output sinks.
pub struct PersistenceManager;

impl PersistenceManager {
    /// Write the text of `journal` to `writer`.
    pub fn save_to_writer<W: Write>(journal: &Journal, writer: &mut W) -> Result<()> {
        write!(writer, "{journal}")?;
        writer.flush()?;
        tracing::debug!(entries = journal.len(), "journal saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Journal {
        let mut j = Journal::new();
        j.add_entry("I play tennis today");
        j.add_entry("I go shopping in the evening");
        j
    }

    #[test]
    fn entries_are_numbered() {
        let j = sample();
        assert_eq!(
            j.to_string(),
            "1: I play tennis today\n2: I go shopping in the evening"
        );
    }

    #[test]
    fn empty_journal_displays_nothing() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.to_string(), "");
    }

    #[test]
    fn numbers_are_not_reused_after_removal() {
        let mut j = sample();
        assert_eq!(j.remove_entry(0).unwrap(), "1: I play tennis today");
        j.add_entry("read a book");
        assert_eq!(j.entries(), ["2: I go shopping in the evening", "3: read a book"]);
    }

    #[test]
    fn remove_out_of_range() {
        let mut j = sample();
        assert_eq!(
            j.remove_entry(2),
            Err(Error::IndexOutOfRange { index: 2, size: 2 })
        );
        assert_eq!(j.len(), 2);
    }

    #[test]
    fn remove_from_empty_journal() {
        let mut j = Journal::new();
        assert_eq!(
            j.remove_entry(0),
            Err(Error::IndexOutOfRange { index: 0, size: 0 })
        );
        assert!(j.is_empty());
    }

    #[test]
    fn save_to_writer_writes_display_text() {
        let j = sample();
        let mut out = Vec::new();
        PersistenceManager::save_to_writer(&j, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), j.to_string());
    }

    #[test]
    fn save_to_failing_writer_reports_io() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let err = PersistenceManager::save_to_writer(&sample(), &mut Broken).unwrap_err();
        assert_eq!(err, Error::Io("disk full".into()));
    }
}
