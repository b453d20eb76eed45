//! Int Lattice CLI
//!
//! Demonstration and inspection of exact integer lattices.
//!
//! # Usage
//! ```bash
//! # Reference demonstration (default)
//! int-lattice demo
//!
//! # GCD membership filter
//! int-lattice check --basis '[[2, 0], [1, 2]]' --point '[3, 2]'
//!
//! # Exact Gram-Schmidt
//! int-lattice orthogonalize --basis '[[3, 1], [2, 2]]'
//! int-lattice orthogonalize --basis '[[3, 1], [2, 2]]' --inner 0 1
//!
//! # Random lattice self-check
//! int-lattice random --rank 8 --dim 8 --bits 16 --seed 42
//! ```

mod commands;
mod demo;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "int-lattice")]
#[command(about = "Exact integer lattices: GCD membership filter and rational Gram-Schmidt")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference demonstration
    Demo,

    /// Test whether a vector passes the lattice membership filter
    Check {
        /// Basis as a JSON array of integer arrays
        #[arg(long)]
        basis: String,

        /// Candidate point as a JSON integer array
        #[arg(long)]
        point: String,
    },

    /// Orthogonalize a basis with exact Gram-Schmidt
    Orthogonalize {
        /// Basis as a JSON array of integer arrays
        #[arg(long)]
        basis: String,

        /// Print only the inner product of orthogonal vectors I and J
        #[arg(long, num_args = 2, value_names = ["I", "J"])]
        inner: Option<Vec<usize>>,
    },

    /// Orthogonalize a random lattice and verify the result
    Random {
        /// Number of basis vectors
        #[arg(long, default_value = "8")]
        rank: usize,

        /// Ambient dimension
        #[arg(long, default_value = "8")]
        dim: usize,

        /// Maximum entry bit size
        #[arg(long, default_value = "16")]
        bits: usize,

        /// RNG seed (fresh entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo::run_demo(),
        Commands::Check { basis, point } => commands::run_check(&basis, &point),
        Commands::Orthogonalize { basis, inner } => {
            let inner = inner.map(|pair| (pair[0], pair[1]));
            commands::run_orthogonalize(&basis, inner)
        }
        Commands::Random {
            rank,
            dim,
            bits,
            seed,
        } => commands::run_random(rank, dim, bits, seed),
    }
}
