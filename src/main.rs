use std::io::Write;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::info;

use lecuyer::{gen_bytes, new_std_gen, randoms_r, RandomGen, StdGen};

/// Maximum depth for printing split trees.
const MAX_SPLIT_DEPTH: u32 = 12;

/// Inspect and sample the combined-LCG generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print raw generator outputs
    Next {
        /// Seed; the global generator is used when omitted
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i32>,

        /// Number of outputs
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Sample integers from a closed range
    Range {
        /// Seed; the global generator is used when omitted
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i32>,

        /// Lower bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        lo: i64,

        /// Upper bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        hi: i64,

        /// Number of samples
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Sample floats from an interval
    Float {
        /// Seed; the global generator is used when omitted
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i32>,

        /// Lower bound
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        lo: f64,

        /// Upper bound
        #[arg(long, allow_hyphen_values = true, default_value_t = 1.0)]
        hi: f64,

        /// Number of samples
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Print random bytes as hex
    Bytes {
        /// Seed; the global generator is used when omitted
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i32>,

        /// Number of bytes
        #[arg(long, default_value_t = 32)]
        len: usize,
    },
    /// Print the tree of states produced by repeated splitting
    Split {
        /// Seed; the global generator is used when omitted
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i32>,

        /// Depth of the tree
        #[arg(long, default_value_t = 3)]
        depth: u32,
    },
    /// Show the generator state a string parses to
    Parse {
        /// Text holding "s1 s2" or any string to hash into a seed
        text: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Next { seed, count } => {
            let mut gen = starting_gen(seed);
            for _ in 0..count {
                let (x, next) = gen.next();
                writeln!(out, "{}", x)?;
                gen = next;
            }
        }
        Commands::Range {
            seed,
            lo,
            hi,
            count,
        } => {
            for x in randoms_r(lo, hi, starting_gen(seed)).take(count) {
                writeln!(out, "{}", x)?;
            }
        }
        Commands::Float {
            seed,
            lo,
            hi,
            count,
        } => {
            if lo.is_nan() || hi.is_nan() {
                bail!("interval bounds must be numbers (got {} and {})", lo, hi);
            }
            for x in randoms_r(lo, hi, starting_gen(seed)).take(count) {
                writeln!(out, "{}", x)?;
            }
        }
        Commands::Bytes { seed, len } => {
            let (bytes, _) = gen_bytes(len, starting_gen(seed));
            let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
            writeln!(out, "{}", hex)?;
        }
        Commands::Split { seed, depth } => {
            if depth > MAX_SPLIT_DEPTH {
                bail!(
                    "depth must be <= {} (got {})",
                    MAX_SPLIT_DEPTH,
                    depth
                );
            }
            write_split_tree(&mut out, starting_gen(seed), depth, 0)?;
        }
        Commands::Parse { text } => {
            let (gen, rest) = StdGen::parse_prefix(&text);
            writeln!(out, "{}", gen)?;
            if !rest.is_empty() {
                info!("unconsumed input: {:?}", rest);
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn starting_gen(seed: Option<i32>) -> StdGen {
    match seed {
        Some(seed) => StdGen::new(seed),
        None => new_std_gen(),
    }
}

fn write_split_tree(out: &mut impl Write, gen: StdGen, depth: u32, indent: usize) -> Result<()> {
    writeln!(out, "{:indent$}{}", "", gen, indent = indent * 2)?;
    if depth == 0 {
        return Ok(());
    }
    let (left, right) = gen.split();
    write_split_tree(out, left, depth - 1, indent + 1)?;
    write_split_tree(out, right, depth - 1, indent + 1)
}
