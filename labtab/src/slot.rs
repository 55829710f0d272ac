use std::io::{self, Write};

use crate::diag::Report;
use crate::entry::Addr;
use crate::error::Error;
use crate::table::LabelTable;

/// A table reference that may not have been initialized yet.
///
/// Every operation other than [`initialize`](LabelSlot::initialize) fails with
/// [`Error::NoTable`] while the slot is absent.
#[derive(Debug, Default)]
pub struct LabelSlot {
    table: Option<LabelTable>,
    report: Report,
}

impl LabelSlot {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_report(report: Report) -> Self {
        LabelSlot {
            table: None,
            report,
        }
    }

    /// Installs an empty table, discarding any previous one.
    pub fn initialize(&mut self) {
        self.table = Some(LabelTable::with_report(self.report.clone()));
    }

    pub fn teardown(&mut self) -> Option<LabelTable> {
        self.table.take()
    }

    pub fn is_initialized(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Result<&LabelTable, Error> {
        match &self.table {
            Some(table) => Ok(table),
            None => Err(self.report.raise(Error::NoTable)),
        }
    }

    pub fn table_mut(&mut self) -> Result<&mut LabelTable, Error> {
        match &mut self.table {
            Some(table) => Ok(table),
            None => Err(self.report.raise(Error::NoTable)),
        }
    }
}

impl LabelSlot {
    pub fn insert(&mut self, label: &str, address: Addr) -> Result<(), Error> {
        self.table_mut()?.insert(label, address)
    }

    pub fn lookup(&self, label: &str) -> Result<Option<Addr>, Error> {
        Ok(self.table()?.lookup(label))
    }

    pub fn exists(&self, label: &str) -> Result<bool, Error> {
        Ok(self.table()?.exists(label))
    }

    pub fn grow(&mut self, min_capacity: usize) -> Result<(), Error> {
        self.table_mut()?.grow(min_capacity)
    }

    pub fn dump(&self) -> Result<(), Error> {
        self.dump_to(io::stdout().lock())
    }

    /// An absent slot is listed as such, never as an empty table.
    pub fn dump_to<W: Write>(&self, mut out: W) -> Result<(), Error> {
        match &self.table {
            Some(table) => table.dump_to(out),
            None => {
                writeln!(out, "Label table does not exist.")?;
                Err(Error::NoTable)
            }
        }
    }
}
