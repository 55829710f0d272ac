use color_print::cprintln;
use indexmap::IndexMap;
use labtab::{Addr, LabelSlot};

use crate::error::{Error, Level};
use crate::parser::Line;

/// Source lines per input file, in command-line order.
pub type Files = IndexMap<String, Vec<String>>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Collected {
    /// PC after the last instruction of the last file.
    pub pc: Addr,
    pub labels: usize,
    pub redefined: usize,
}

/// Pass 1: binds each label to the PC of the instruction that follows it.
///
/// A redefinition is warned about and keeps the first address.
/// Any other table failure is printed and returned.
pub fn collect(files: &Files, labels: &mut LabelSlot) -> Result<Collected, Error> {
    let mut out = Collected::default();
    // label -> (file, line_idx) of its first definition
    let mut defined: IndexMap<&str, (&str, usize)> = IndexMap::new();

    for (path, lines) in files {
        for (idx, raw) in lines.iter().enumerate() {
            let line = Line::parse(raw);
            if let Some(key) = line.label {
                match labels.insert(key, out.pc) {
                    Ok(()) => {
                        defined.insert(key, (path.as_str(), idx));
                        out.labels += 1;
                    }
                    Err(labtab::Error::Duplicate(name)) => {
                        out.redefined += 1;
                        Level::Warn.diag(Error::RedefinedLabel(name), files, path, idx);
                        if let Some(&(file, line_idx)) = defined.get(key) {
                            Level::Note.diag(
                                "Already defined here. The first address is kept.",
                                files,
                                file,
                                line_idx,
                            );
                        }
                    }
                    Err(err) => {
                        let err = Error::from(err);
                        Level::Error.diag(&err, files, path, idx);
                        return Err(err);
                    }
                }
            }
            if line.is_op() {
                out.pc += 1;
            }
        }
    }
    Ok(out)
}

/// Pass 2: looks up every requested name and returns the ones left undefined.
pub fn resolve(names: &[String], labels: &LabelSlot) -> Result<Vec<String>, Error> {
    let mut undefined = vec![];
    for name in names {
        match labels.lookup(name)? {
            Some(addr) => cprintln!("  <g>{}</> = 0x{:04X} ({})", name, addr, addr),
            None => {
                Level::Error.print(Error::UndefinedLabel(name.clone()));
                undefined.push(name.clone());
            }
        }
    }
    Ok(undefined)
}

#[cfg(test)]
mod tests {
    use super::{collect, resolve, Files};
    use crate::error::Error;
    use labtab::{LabelSlot, Report};

    fn files(srcs: &[(&str, &str)]) -> Files {
        srcs.iter()
            .map(|(path, src)| (path.to_string(), src.lines().map(str::to_string).collect()))
            .collect()
    }

    fn table() -> LabelSlot {
        let mut slot = LabelSlot::with_report(Report::Quiet);
        slot.initialize();
        slot
    }

    macro_rules! case {
        ($name:ident, [$(($path:expr, $src:expr)),*], pc: $pc:expr, {$($label:expr => $addr:expr),*}) => {
            #[test]
            fn $name() {
                let files = files(&[$(($path, $src)),*]);
                let mut labels = table();
                let got = collect(&files, &mut labels).unwrap();
                assert_eq!(got.pc, $pc);
                $(assert_eq!(labels.lookup($label).unwrap(), $addr, "{}", $label);)*
            }
        };
    }

    case!(
        single_file,
        [("main.asm", "start:\n  nop\nloop: add a0 a1 a2\n  jump loop\nend:")],
        pc: 3,
        {"start" => Some(0), "loop" => Some(1), "end" => Some(3)}
    );
    case!(
        label_only_lines_take_no_slot,
        [("main.asm", "a:\nb:\nc: nop\nd:")],
        pc: 1,
        {"a" => Some(0), "b" => Some(0), "c" => Some(0), "d" => Some(1)}
    );
    case!(
        comments_and_blanks,
        [("main.asm", "; header\n\nx: ; entry\n  nop ; idle\n\ny:")],
        pc: 1,
        {"x" => Some(0), "y" => Some(1)}
    );
    case!(
        pc_runs_across_files,
        [("a.asm", "first: nop\nnop"), ("b.asm", "mid: nop\ntail:")],
        pc: 3,
        {"first" => Some(0), "mid" => Some(2), "tail" => Some(3)}
    );
    case!(
        label_case_matters,
        [("main.asm", "loop: nop\nLOOP: nop")],
        pc: 2,
        {"loop" => Some(0), "LOOP" => Some(1), "Loop" => None}
    );

    #[test]
    fn redefinition_keeps_first_address() {
        let files = files(&[("dup.asm", "LOOP: nop\nLOOP: halt\nEND:")]);
        let mut labels = table();
        let got = collect(&files, &mut labels).unwrap();
        assert_eq!(got.labels, 2);
        assert_eq!(got.redefined, 1);
        assert_eq!(got.pc, 2);
        assert_eq!(labels.lookup("LOOP").unwrap(), Some(0));
        assert_eq!(labels.lookup("END").unwrap(), Some(2));
    }

    #[test]
    fn redefinition_across_files() {
        let files = files(&[("a.asm", "shared: nop"), ("b.asm", "nop\nshared: nop")]);
        let mut labels = table();
        let got = collect(&files, &mut labels).unwrap();
        assert_eq!(got.redefined, 1);
        assert_eq!(labels.lookup("shared").unwrap(), Some(0));
    }

    #[test]
    fn collect_without_table_fails() {
        let files = files(&[("main.asm", "x: nop")]);
        let mut labels = LabelSlot::with_report(Report::Quiet);
        let err = collect(&files, &mut labels).unwrap_err();
        assert!(matches!(err, Error::Table(labtab::Error::NoTable)));
    }

    #[test]
    fn resolve_lists_undefined() {
        let files = files(&[("main.asm", "main: nop\nexit: halt")]);
        let mut labels = table();
        collect(&files, &mut labels).unwrap();

        let names = ["main", "missing", "exit", "gone"].map(String::from);
        let undefined = resolve(&names, &labels).unwrap();
        assert_eq!(undefined, ["missing", "gone"]);

        assert!(resolve(&names[..1], &labels).unwrap().is_empty());
        assert!(resolve(&[], &labels).unwrap().is_empty());
    }

    #[test]
    fn resolve_without_table_fails() {
        let labels = LabelSlot::with_report(Report::Quiet);
        let err = resolve(&["main".to_string()], &labels).unwrap_err();
        assert!(matches!(err, Error::Table(labtab::Error::NoTable)));
    }
}
