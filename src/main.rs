use clap::Parser;
use colored::Colorize;
use langtons_ant::prelude::*;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if args.plain {
        colored::control::set_override(false);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut rng = args.rng();

    // Build grid and ant
    let grid = args.grid()?;
    let mut automaton =
        Automaton::from_grid(grid, args.start.as_deref(), args.direction, &mut rng)?;

    // Run simulation
    let runner = args.runner();
    let mut out = std::io::stdout().lock();
    runner.run(&mut automaton, &mut out)?;

    // Print results
    writeln!(out, "{}", runner.summary(&automaton))?;

    Ok(())
}
