use std::fmt;

/// Program counter value a label is bound to.
pub type Addr = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    label: String,
    address: Addr,
}

impl LabelEntry {
    pub(crate) fn new(label: String, address: Addr) -> Self {
        LabelEntry { label, address }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn address(&self) -> Addr {
        self.address
    }
}

impl fmt::Display for LabelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label: {}, address: {}", self.label, self.address)
    }
}
