mod error;
mod parser;
mod pass;

use labtab::{LabelSlot, Report};

use crate::error::{Error, Level};
use crate::pass::Files;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    #[clap(default_value = "main.asm")]
    input: Vec<String>,

    /// Resolve a label after collecting (repeatable)
    #[clap(short, long)]
    lookup: Vec<String>,

    /// Dump the label table
    #[clap(short, long)]
    dump: bool,
}

fn read_files(paths: &[String]) -> Result<Files, Error> {
    use std::io::BufRead;

    let mut files = Files::new();
    for path in paths {
        println!("  < {}", path);
        let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.clone(), e))?;
        let lines = std::io::BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(Error::FileRead)?;
        files.insert(path.clone(), lines);
    }
    Ok(files)
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Label Scanner");

    println!("1. Read Files");
    let files = read_files(&args.input).unwrap_or_else(|err| {
        Level::Error.print(err);
        std::process::exit(1);
    });

    // Located diagnostics are printed here, so the table itself stays quiet.
    let mut labels = LabelSlot::with_report(Report::Quiet);
    labels.initialize();

    println!("2. Collect Labels");
    let collected = match pass::collect(&files, &mut labels) {
        Ok(collected) => collected,
        Err(_) => std::process::exit(1),
    };
    println!(
        "  - found #{} labels ({} re-defined) over {} instructions",
        collected.labels, collected.redefined, collected.pc
    );

    println!("3. Resolve Labels");
    let mut failed = match pass::resolve(&args.lookup, &labels) {
        Ok(undefined) => !undefined.is_empty(),
        Err(err) => {
            Level::Error.print(err);
            std::process::exit(1);
        }
    };

    if args.dump {
        if let Err(err) = labels.dump() {
            Level::Error.print(Error::from(err));
            failed = true;
        }
    }

    labels.teardown();
    if failed {
        std::process::exit(1);
    }
}
