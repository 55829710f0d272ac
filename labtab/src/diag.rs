use std::cell::RefCell;
use std::rc::Rc;

use color_print::ceprintln;

use crate::error::{Error, Severity};

/// Where the table sends its one-line diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Report {
    #[default]
    Stderr,
    Quiet,
    /// Keeps the uncoloured lines in memory instead of printing them.
    Capture(Captured),
}

/// Shared buffer behind [`Report::Capture`]; clones see the same lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured(Rc<RefCell<Vec<String>>>);

impl Captured {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn take(&self) -> Vec<String> {
        self.0.borrow_mut().drain(..).collect()
    }
}

impl Report {
    pub(crate) fn emit(&self, err: &Error) {
        let fatal = match err.severity() {
            Severity::Fatal => true,
            Severity::Rejected => false,
            // lookup misses belong to the caller
            Severity::Missing => return,
        };
        match self {
            Report::Stderr if fatal => ceprintln!("<red,bold>error</>: {}", err),
            Report::Stderr => ceprintln!("<yellow,bold>warn</>: {}", err),
            Report::Quiet => {}
            Report::Capture(buf) => {
                let tag = if fatal { "error" } else { "warn" };
                buf.0.borrow_mut().push(format!("{}: {}", tag, err));
            }
        }
    }

    /// Emits `err` and hands it back, for use in `map_err` / `return Err(..)`.
    pub(crate) fn raise(&self, err: Error) -> Error {
        self.emit(&err);
        err
    }
}
