//! # mintgate CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mintgate_cli::credential::{run_credential, CredentialArgs};
use mintgate_cli::keys::{run_keygen, KeygenArgs};
use mintgate_cli::token::{run_token, TokenArgs};

/// Mintgate Ledger CLI
///
/// Off-boundary tooling for the authorization-gated issuance ledger:
/// gatekeeper key management, credential issuance/verification, and
/// token identifier encoding.
#[derive(Parser, Debug)]
#[command(name = "mintgate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a gatekeeper secp256k1 keypair.
    Keygen(KeygenArgs),

    /// Issue or verify signed mint credentials.
    Credential(CredentialArgs),

    /// Encode or decode token identifiers.
    Token(TokenArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Keygen(args) => run_keygen(&args),
        Commands::Credential(args) => run_credential(&args),
        Commands::Token(args) => run_token(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
