use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use calcx::{
    session::{Reply, Session, SessionError},
    settings::{AngleMode, Precision, Settings},
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// calcx is a scientific calculator. Give it an expression, a file of
/// lines, or nothing to start an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Executes every line of this file in one session.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Interprets and returns angles in radians instead of degrees.
    #[arg(short, long)]
    radians: bool,

    /// Number of fractional digits shown, from 0 to 15.
    #[arg(short, long)]
    precision: Option<Precision>,

    /// An expression or `:command` to execute once.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let angle_mode = if args.radians { AngleMode::Radians } else { AngleMode::Degrees };
    let settings = Settings { angle_mode,
                              precision: args.precision.unwrap_or_default() };
    let mut session = Session::with_settings(settings);

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        return run_script(&mut session, &script);
    }

    if let Some(expression) = &args.expression {
        return match session.execute(expression) {
            Ok(reply) => {
                print_reply(&reply);
                ExitCode::SUCCESS
            },
            Err(e) => {
                report(expression, &e, None);
                ExitCode::FAILURE
            },
        };
    }

    run_interactive(&mut session)
}

/// Runs each line in turn; every failing line is reported and the script
/// carries on.
fn run_script(session: &mut Session, script: &str) -> ExitCode {
    let mut failed = false;
    for (number, line) in script.lines().enumerate() {
        match session.execute(line) {
            Ok(Reply::Quit) => break,
            Ok(reply) => print_reply(&reply),
            Err(e) => {
                report(line, &e, Some(number + 1));
                failed = true;
            },
        }
    }
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn run_interactive(session: &mut Session) -> ExitCode {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("calcx {}. Type :help for commands, :quit to leave.",
                 env!("CARGO_PKG_VERSION"));
    }
    info!(interactive, "starting session");

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            if let Err(e) = io::stdout().flush() {
                warn!(%e, "could not flush the prompt");
            }
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
            None => break,
        };
        match session.execute(&line) {
            Ok(Reply::Quit) => break,
            Ok(reply) => print_reply(&reply),
            Err(e) => report(&line, &e, None),
        }
    }
    ExitCode::SUCCESS
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Value(text) | Reply::Message(text) => println!("{text}"),
        Reply::Silent | Reply::Quit => {},
    }
}

/// Prints an error, underlining the offending character when its position
/// is known.
fn report(line: &str, error: &SessionError, line_number: Option<usize>) {
    if let Some(position) = error.position() {
        eprintln!("  {line}");
        eprintln!("  {}^", " ".repeat(position));
    }
    match line_number {
        Some(n) => eprintln!("Error on line {n}: {error}"),
        None => eprintln!("Error: {error}"),
    }
}
