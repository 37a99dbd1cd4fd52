//! Proves and verifies that a private vector is orthogonal to a public one.
//!
//! Exit status: 0 when the proof verifies, 1 when it does not, 2 when the
//! pipeline fails before a proof can be checked.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ipzk::config::{DemoConfig, DEFAULT_DIMENSION};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// Inner-product-zero zk-SNARK demo.
#[derive(Parser, Debug)]
#[command(name = "ipzk", version, about)]
struct Args {
    /// Length of the public and private vectors.
    #[arg(long, env = "IPZK_DIMENSION", default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,

    /// Seed for deterministic randomness.
    #[arg(long, env = "IPZK_SEED")]
    seed: Option<u64>,

    /// Negate the private element at this index, breaking the relation.
    #[arg(long, env = "IPZK_FLIP")]
    flip: Option<usize>,
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        DemoConfig {
            dimension: args.dimension,
            seed: args.seed,
            flip: args.flip,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from(Args::parse());
    let result = run(&config);
    match &result {
        Ok(true) => println!("Verified!"),
        Ok(false) => println!("Failed to verify!"),
        Err(err) => eprintln!("error: {err:#}"),
    }
    ExitCode::from(exit_status(&result))
}

/// 0 verified, 1 rejected by the verifier, 2 pipeline error.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn run(config: &DemoConfig) -> anyhow::Result<bool> {
    let outcome = match config.seed {
        Some(seed) => ipzk::run(config, &mut ChaCha20Rng::seed_from_u64(seed)),
        None => ipzk::run(config, &mut rand::thread_rng()),
    }
    .with_context(|| format!("inner product demo (dimension {})", config.dimension))?;

    tracing::info!(
        constraints = outcome.num_constraints,
        variables = outcome.num_variables,
        proof_bytes = outcome.proof_size,
        key = %hex::encode(outcome.fingerprint),
        "proof checked"
    );
    Ok(outcome.verified)
}
