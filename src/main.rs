use std::{env, fs, io, path::PathBuf, process};

use clap::Parser;
use classhub::{
    console::{Console, ConsoleConfig, Outcome},
    host::StdoutHost,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// ClassHub is a small expression console with variables and a library of
/// math functions. Type `help()` to list them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells classhub to read commands from a file, one per line, instead of
    /// taking a single command.
    #[arg(short, long)]
    file: bool,

    /// Print how long each command took to evaluate.
    #[arg(short = 't', long)]
    show_execution_time: bool,

    /// Do not print the start-up hint.
    #[arg(short, long)]
    quiet: bool,

    /// A command to run, or a path with `--file`. Starts an interactive
    /// console when omitted.
    contents: Option<String>,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let config = ConsoleConfig { show_execution_time: args.show_execution_time };
    let mut console = Console::new(StdoutHost, config);

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                process::exit(1);
            });
            for line in script.lines() {
                console.submit(line);
            }
        },
        None if args.file => {
            eprintln!("No input file given. Usage: classhub --file <path>");
            process::exit(1);
        },
        Some(command) => {
            console.submit(&command);
        },
        None => {
            if !args.quiet {
                console.greet();
            }
            if let Err(e) = run_interactive(&mut console) {
                eprintln!("Console failed: {e}");
                process::exit(1);
            }
        },
    }
}

/// Where the interactive history is kept between runs.
fn history_path() -> Option<PathBuf> {
    env::var("HOME").ok().map(|home| PathBuf::from(home).join(".classhub_history"))
}

/// Reads lines with editing and history until end of input or interrupt.
fn run_interactive(console: &mut Console<StdoutHost>) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    let history = history_path();

    if let Some(path) = &history
       && path.exists()
       && let Err(e) = editor.load_history(path)
    {
        tracing::warn!(path = %path.display(), error = %e, "could not load history");
    }

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if console.submit(&line) != Outcome::Ignored {
                    editor.add_history_entry(line.as_str())?;
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &history
       && let Err(e) = editor.save_history(path)
    {
        tracing::warn!(path = %path.display(), error = %e, "could not save history");
    }
    Ok(())
}
