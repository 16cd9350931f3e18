// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod output;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use codeclaim_sdk::{ClaimConfig, ReductionPolicy};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "codeclaim", version, about = "Zero-knowledge proofs for claim-once codes")]
struct Cli {
    /// Directory holding the proving key, verification key and manifest
    /// [env: CODECLAIM_ARTIFACTS, default: ./artifacts]
    #[arg(long, global = true, value_name = "DIR")]
    artifacts: Option<PathBuf>,

    /// How inputs at or above the field modulus are handled: reduce | strict
    /// [env: CODECLAIM_REDUCTION, default: reduce]
    #[arg(long, global = true, value_name = "POLICY")]
    reduction: Option<ReductionPolicy>,

    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Development Groth16 setup for the claim circuit
    Setup {
        /// Overwrite existing artifacts
        #[arg(long)]
        force: bool,
    },
    /// Prove knowledge of a secret code and nullifier
    Prove {
        /// Secret code (decimal or 0x hex)
        secret: String,
        /// Nullifier (decimal or 0x hex)
        nullifier: String,
        /// Output file [default: proof_<unix_ms>.json]
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Generate the reference test vectors
    TestVectors {
        /// Output file [default: <artifacts>/vectors/test_vectors.json]
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Proofs generated in parallel
        #[arg(long, default_value_t = 2)]
        jobs: usize,
    },
    /// Check a saved proof bundle against the verification key
    Verify {
        /// Bundle written by `prove`
        bundle: PathBuf,
    },
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    output::set_json_mode(cli.json);

    let config = ClaimConfig::from_env()?
        .with_artifacts_dir(cli.artifacts)
        .with_reduction(cli.reduction);

    match cli.command {
        Cmd::Setup { force } => commands::setup::run(&config, force)?,
        Cmd::Prove { secret, nullifier, out } => {
            commands::prove::run(&config, secret, nullifier, out).await?
        }
        Cmd::TestVectors { out, jobs } => commands::test_vectors::run(&config, out, jobs).await?,
        Cmd::Verify { bundle } => commands::verify::run(&config, &bundle)?,
    }
    Ok(())
}
