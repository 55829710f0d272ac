use color_print::cprintln;
use indexmap::IndexMap;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("Label table: {0}")]
    Table(#[from] labtab::Error),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),
}

// ----------------------------------------------------------------------------
// Diagnostic

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Note,
}

impl Level {
    pub fn print(self, msg: impl Display) {
        match self {
            Level::Error => cprintln!("<red,bold>error</>: {}", msg),
            Level::Warn => cprintln!("<yellow,bold>warn</>: {}", msg),
            Level::Note => cprintln!("<green,bold>note</>: {}", msg),
        }
    }

    /// `print` followed by the `file:line` the message points at.
    pub fn diag(
        self,
        msg: impl Display,
        files: &IndexMap<String, Vec<String>>,
        file: &str,
        line_idx: usize,
    ) {
        self.print(msg);

        let line_no = line_idx + 1;
        let raw = files
            .get(file)
            .and_then(|lines| lines.get(line_idx))
            .map_or("", String::as_str);

        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_no);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_no, raw);
        cprintln!("      <blue>|</>");
    }
}
