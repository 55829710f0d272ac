mod diag;
mod entry;
mod error;
mod slot;
mod table;

pub use diag::{Captured, Report};
pub use entry::{Addr, LabelEntry};
pub use error::{Error, Severity};
pub use slot::LabelSlot;
pub use table::{LabelTable, NOT_FOUND};
