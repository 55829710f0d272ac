use std::io::{self, Write};

use crate::diag::Report;
use crate::entry::{Addr, LabelEntry};
use crate::error::Error;

/// Sentinel for callers that want lookups encoded as a plain integer.
/// Never collides with an address, since every [`Addr`] is non-negative.
pub const NOT_FOUND: i64 = -1;

/// Flat, append-only directory of `label -> address` pairs for one assembly run.
///
/// Entries keep insertion order and every label text is unique.
/// Storage grows on demand; nothing is ever removed except by an explicit
/// shrinking [`grow`](LabelTable::grow).
#[derive(Debug, Default)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
    report: Report,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(report: Report) -> Self {
        LabelTable {
            report,
            ..Self::default()
        }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabelEntry> {
        self.entries.iter()
    }
}

// ----------------------------------------------------------------------------
// Insert & Growth

impl LabelTable {
    /// Binds `label` to `address` unless the label is already defined.
    ///
    /// A duplicate leaves the table untouched and yields [`Error::Duplicate`].
    /// Allocation failures yield [`Error::Alloc`] with every existing entry intact.
    pub fn insert(&mut self, label: &str, address: Addr) -> Result<(), Error> {
        if self.exists(label) {
            return Err(self.report.raise(Error::Duplicate(label.to_string())));
        }

        // The stored name never aliases the caller's buffer.
        let mut owned = String::new();
        owned
            .try_reserve_exact(label.len())
            .map_err(|e| self.report.raise(e.into()))?;
        owned.push_str(label);

        if self.entries.len() >= self.entries.capacity() {
            self.grow(self.entries.len() + 1)?;
        }

        self.entries.push(LabelEntry::new(owned, address));
        Ok(())
    }

    /// Makes room for at least `min_capacity` entries.
    ///
    /// The backing store may end up larger than requested.
    /// Passing less than [`len`](LabelTable::len) truncates the table to the
    /// first `min_capacity` entries; `insert` never does this.
    pub fn grow(&mut self, min_capacity: usize) -> Result<(), Error> {
        let len = self.entries.len();
        if min_capacity < len {
            self.entries.truncate(min_capacity);
            self.entries.shrink_to(min_capacity);
            return Ok(());
        }

        self.entries
            .try_reserve(min_capacity - len)
            .map_err(|e| self.report.raise(e.into()))
    }
}

// ----------------------------------------------------------------------------
// Lookup

impl LabelTable {
    pub fn lookup(&self, label: &str) -> Option<Addr> {
        self.entries
            .iter()
            .find(|entry| entry.label() == label)
            .map(LabelEntry::address)
    }

    pub fn lookup_or_sentinel(&self, label: &str) -> i64 {
        self.lookup(label).map_or(NOT_FOUND, i64::from)
    }

    pub fn exists(&self, label: &str) -> bool {
        self.entries.iter().any(|entry| entry.label() == label)
    }

    /// Like [`lookup`](LabelTable::lookup), but a miss is an [`Error::UndefinedLabel`].
    pub fn resolve(&self, label: &str) -> Result<Addr, Error> {
        self.lookup(label)
            .ok_or_else(|| Error::UndefinedLabel(label.to_string()))
    }
}

// ----------------------------------------------------------------------------
// Dump

impl LabelTable {
    pub fn dump(&self) -> Result<(), Error> {
        self.dump_to(io::stdout().lock())
    }

    pub fn dump_to<W: Write>(&self, mut out: W) -> Result<(), Error> {
        writeln!(out, "There are {} labels in the table:", self.entries.len())?;
        for entry in &self.entries {
            writeln!(out, "{}", entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LabelTable {
    type Item = &'a LabelEntry;
    type IntoIter = std::slice::Iter<'a, LabelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
