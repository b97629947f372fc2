use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use cpncalc::{evaluate_line, logging, repl::Repl};
use log::LevelFilter;

/// cpncalc evaluates arithmetic written in Cambridge Polish Notation, such as
/// `( * ( + 4 5 8 3 -10 ) 7 ( / 6 4 ) 18 )`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate every line of this file instead of reading from the console.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Diagnostics to show on stderr: off, error, warn, info, debug or trace.
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Leave out the banner and the prompt.
    #[arg(short, long)]
    quiet: bool,

    /// Evaluate this expression, print the result and exit.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.log_level) {
        eprintln!("Failed to set up logging: {e}");
    }

    if let Some(expression) = &args.expression {
        return match evaluate_line(expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let result = if let Some(path) = &args.file {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        };
        Repl::new(BufReader::new(file), io::stdout().lock()).interactive(false)
                                                             .run()
    } else {
        Repl::new(io::stdin().lock(), io::stdout().lock()).interactive(!args.quiet)
                                                           .run()
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
