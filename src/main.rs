use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use common::{SearchTrace, SolveError, solve_puzzle};

#[derive(Parser, Debug)]
#[command(name = "pegs", version)]
#[command(about = "Solve the 15 hole triangular peg solitaire puzzle")]
struct Args {
    /// Hole that starts out empty (1 to 15)
    #[arg(allow_negative_numbers = true)]
    start: i64,

    /// Hole the last peg has to end up in (1 to 15), anywhere if omitted
    #[arg(allow_negative_numbers = true)]
    end: Option<i64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Don't highlight the jump on each board
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format_timestamp(None)
    .target(env_logger::Target::Stderr)
    .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match solve_puzzle(args.start, args.end) {
        Ok(trace) => {
            log::info!("solved in {} jumps", trace.steps().len());
            print_trace(&mut out, &trace)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(SolveError::NoSolution) => {
            writeln!(out, "No solution can be found.")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ SolveError::InvalidConfiguration(_)) => Err(e.into()),
    }
}

fn print_trace(out: &mut impl Write, trace: &SearchTrace) -> io::Result<()> {
    writeln!(out, "Initial Board")?;
    writeln!(out, "{}", trace.initial())?;

    for step in trace.steps() {
        writeln!(out)?;
        writeln!(out, "{}", step.jump)?;
        writeln!(out, "{}", step.board.render_with_jump(step.jump))?;
    }

    out.flush()
}
