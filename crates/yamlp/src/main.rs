use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use yamlp::driver::{self, Options};

/// Filtering utility for YAML documents.
///
/// Reads a YAML document from a file or standard input and writes the
/// portion selected by PATH to standard output.
#[derive(Parser)]
#[command(name = "yamlp", version)]
struct Cli {
    /// Force flow style on the output document's containers.
    #[arg(short = 'F')]
    flow: bool,

    /// Shallow filter mode. Accepted for compatibility; the current engine
    /// always returns full subtrees.
    #[arg(short = 'S')]
    shallow: bool,

    /// Line wrap width; no wrapping if omitted.
    #[arg(short = 'W', value_name = "WIDTH")]
    width: Option<i32>,

    /// File to read the YAML document from; standard input if omitted.
    #[arg(short = 'f', value_name = "FILE")]
    file: Option<PathBuf>,

    /// The path marking the portion of the document to return.
    #[arg(value_name = "PATH")]
    path: Option<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    let width = match cli.width {
        Some(0) => {
            eprintln!("Invalid value for wrap width '0'");
            return ExitCode::from(1);
        }
        Some(width) => width,
        None => -1,
    };

    let path_text = match cli.path.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            eprintln!("Empty path");
            return ExitCode::from(3);
        }
    };
    let mut path = match yamlpath::Path::parse(path_text) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Invalid path: '{path_text}'");
            eprintln!(
                "               {}^ {} [at position {}]",
                " ".repeat(err.pos),
                err.message,
                err.pos
            );
            return ExitCode::from(3);
        }
    };

    let input = match &cli.file {
        Some(file) => match fs::read(file) {
            Ok(input) => input,
            Err(err) => {
                eprintln!("Unable to open file '{}' ({})", file.display(), err);
                return ExitCode::from(2);
            }
        },
        None => {
            let mut input = Vec::new();
            if let Err(err) = io::stdin().read_to_end(&mut input) {
                eprintln!("Unable to read standard input ({err})");
                return ExitCode::from(2);
            }
            input
        }
    };

    // -S has no counterpart in the current filter; full subtrees are always
    // returned.
    let _ = cli.shallow;

    let options = Options {
        flow: cli.flow,
        width,
    };
    let stdout = io::stdout();
    if let Err(err) = driver::filter_stream(&input, &mut path, stdout.lock(), options) {
        eprintln!("{err}");
        return ExitCode::from(4);
    }
    ExitCode::SUCCESS
}
