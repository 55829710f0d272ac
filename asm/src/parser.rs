// ----------------------------------------------------------------------------
// Line

/// One source line, split into its label definition and instruction text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub label: Option<&'a str>,
    pub code: Option<&'a str>,
}

impl<'a> Line<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let code = match raw.split_once(';') {
            Some((code, _comment)) => code,
            None => raw,
        }
        .trim();

        // main:
        let (label, rest) = match code.split_once(char::is_whitespace) {
            Some((head, rest)) if head.ends_with(':') => (Some(head), rest.trim()),
            None if code.ends_with(':') => (Some(code), ""),
            _ => (None, code),
        };
        let label = label
            .map(|head| &head[..head.len() - 1])
            .filter(|key| !key.is_empty());

        Line {
            label,
            code: Some(rest).filter(|rest| !rest.is_empty()),
        }
    }

    /// Whether this line occupies a program counter slot.
    pub fn is_op(&self) -> bool {
        self.code.is_some()
    }
}
