use anyhow::{anyhow, Context};
use card_game_combinatorics::parser::{parse_pair, parse_subarray_cases};
use card_game_combinatorics::puzzles::{
    concat::largest_concatenation,
    egg_drop::min_trials,
    interleave::is_interleaving,
    knapsack::{solve_binary, solve_unbounded, Item},
    primes::sieve,
    subarray::max_subarray_sum_mod,
};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing::{debug, Level};

/// Small textbook puzzles, one per subcommand
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fewest drops that always find the lowest breaking floor
    EggDrop {
        #[arg(long, default_value_t = 2)]
        eggs: usize,

        #[arg(long, default_value_t = 36)]
        floors: usize,
    },

    /// Count (and optionally list) the primes up to a limit
    Primes {
        #[arg(long)]
        max: usize,

        /// Print every prime, not just the count
        #[arg(long)]
        list: bool,
    },

    /// 0/1 and unbounded knapsack; stdin: `capacity count`, then `weight value` per item
    Knapsack,

    /// Best subarray sum modulo M; stdin: `T`, then per case `N M` and N values
    MaxSubarrayMod,

    /// Arrange numbers so their concatenation is largest
    Concat { values: Vec<u64> },

    /// Check whether C interleaves A and B
    Interleave { a: String, b: String, c: String },
}

fn read_stdin() -> anyhow::Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("reading standard input")?;
    Ok(content)
}

/// Non-blank lines of the input, numbered from 1
fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
}

fn next_pair<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> anyhow::Result<(usize, usize)> {
    let (line_no, line) = lines
        .next()
        .ok_or_else(|| anyhow!("unexpected end of input, expected {}", what))?;
    parse_pair(line).ok_or_else(|| anyhow!("line {}: expected {}", line_no, what))
}

fn knapsack(content: &str) -> anyhow::Result<()> {
    let mut lines = numbered_lines(content);
    let (capacity, count) = next_pair(&mut lines, "`capacity count`")?;
    let items = (0..count)
        .map(|_| {
            next_pair(&mut lines, "`weight value`")
                .map(|(weight, value)| Item::new(weight, value as u64))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    debug!("knapsack: capacity {}, {} items", capacity, items.len());

    println!("{}", solve_binary(&items, capacity)?);
    println!("{}", solve_unbounded(&items, capacity)?);
    Ok(())
}

fn max_subarray_mod(content: &str) -> anyhow::Result<()> {
    let cases = parse_subarray_cases(content).context("malformed input")?;
    debug!("max-subarray-mod: {} cases", cases.len());
    for (values, m) in &cases {
        println!("{}", max_subarray_sum_mod(values, *m)?);
    }
    Ok(())
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::EggDrop { eggs, floors } => {
            let trials = min_trials(eggs, floors)?;
            println!(
                "Number of trials: {} for {} eggs and {} floors",
                trials, eggs, floors
            );
        }
        Command::Primes { max, list } => {
            let primes = sieve(max);
            if list {
                for p in &primes {
                    println!("{}", p);
                }
            }
            println!("{} primes up to {}", primes.len(), max);
        }
        Command::Knapsack => knapsack(&read_stdin()?)?,
        Command::MaxSubarrayMod => max_subarray_mod(&read_stdin()?)?,
        Command::Concat { values } => println!("{}", largest_concatenation(&values)),
        Command::Interleave { a, b, c } => println!("{}", is_interleaving(&a, &b, &c)),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
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

    run(args.command)
}
