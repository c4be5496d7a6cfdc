use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Input Generator for Card Game batches.
///
/// Writes a file in the format read by `card-game`:
///
/// <T>
/// <N> <K>
/// <N space-separated weights>
/// ... (T cases)
///
/// Each case draws N uniformly in [1, max_n], K in [1, N] and weights in
/// [0, max_weight], so duplicates appear whenever max_weight is small.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random test batches for the Card Game solver"
)]
struct Args {
    /// Number of test cases (T)
    #[arg(long)]
    cases: usize,

    /// Largest item count per case
    #[arg(long)]
    max_n: usize,

    /// Largest weight value
    #[arg(long, default_value_t = 2_000_000_000)]
    max_weight: u64,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path to write the batch (mandatory)
    #[arg(long)]
    output: PathBuf,
}

/// A single random case as (K, weights)
fn generate_case<R: Rng>(max_n: usize, max_weight: u64, rng: &mut R) -> (usize, Vec<u64>) {
    let n = rng.gen_range(1..=max_n);
    let k = rng.gen_range(1..=n);
    let weights = (0..n).map(|_| rng.gen_range(0..=max_weight)).collect();
    (k, weights)
}

/// Write one case as its header line and weight row
fn write_case<W: Write>(writer: &mut W, k: usize, weights: &[u64]) -> io::Result<()> {
    writeln!(writer, "{} {}", weights.len(), k)?;
    for (i, val) in weights.iter().enumerate() {
        if i > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{}", val)?;
    }
    writeln!(writer)
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.max_n == 0 {
        eprintln!("Error: max_n must be positive.");
        std::process::exit(1);
    }

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let seed: u64 = rand::thread_rng().gen();
            StdRng::seed_from_u64(seed)
        }
    };

    let mut writer = BufWriter::new(File::create(&args.output)?);
    writeln!(writer, "{}", args.cases)?;

    let mut largest_n = 0;
    let mut total_items = 0;
    for _ in 0..args.cases {
        let (k, weights) = generate_case(args.max_n, args.max_weight, &mut rng);
        largest_n = largest_n.max(weights.len());
        total_items += weights.len();
        write_case(&mut writer, k, &weights)?;
    }
    writer.flush()?;

    // Stats go to stdout, never into the generated file
    println!("Generated batch:");
    println!("  cases = {}", args.cases);
    println!("  max_n = {}", args.max_n);
    println!("  max_weight = {}", args.max_weight);
    if let Some(seed) = args.seed {
        println!("  seed = {}", seed);
    }
    println!("  largest N = {}, total items = {}", largest_n, total_items);
    println!("  output file: {:?}", args.output);

    Ok(())
}
