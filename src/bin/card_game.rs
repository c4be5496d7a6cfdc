use anyhow::Context;
use card_game_combinatorics::{
    parser::parse_test_cases, resolve_bound, solve_batch, BatchReport, CombinatoricsEngine,
};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, Level};

/// Card Game solver: sums the maximum of every K-subset, modulo 1,000,000,007
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file with the test cases (reads standard input when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Binomial table bound; defaults to the largest N in the input
    #[arg(short, long)]
    bound: Option<usize>,

    /// Solve test cases on all cores
    #[arg(long)]
    parallel: bool,

    /// Cross-check small cases against exhaustive subset enumeration
    #[arg(long)]
    verify: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading input file {:?}", path)),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("reading standard input")?;
            Ok(content)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<u8> {
    let content = read_input(args.input.as_ref())?;
    let cases = parse_test_cases(&content).context("malformed input")?;
    info!("parsed {} test cases", cases.len());

    let bound = resolve_bound(&cases, args.bound)?;

    let start = Instant::now();
    let engine = CombinatoricsEngine::precompute(bound)?;
    info!("precomputed binomial table up to {} in {:?}", engine.bound(), start.elapsed());

    let report = BatchReport::from_results(solve_batch(&engine, &cases, args.parallel, args.verify));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &report.answers {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    for line in &report.failures {
        eprintln!("{}", line);
    }

    info!("solved {} test cases in {:?}", cases.len(), start.elapsed());
    Ok(report.exit_code())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    debug!("args: {args:?}");

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
