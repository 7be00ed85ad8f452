//! # Credential Subcommand
//!
//! Gatekeeper-side credential issuance and standalone verification.
//!
//! `issue` signs a claim with a private key file produced by `keygen` and
//! emits the credential as a JSON document for handoff to the author.
//! `verify` checks a credential document against a gatekeeper address
//! without any registry state.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use mintgate_core::{Address, MintClaim, ResourceId};
use mintgate_credential::{CredentialBuilder, MintCredential};
use mintgate_crypto::GatekeeperKeyPair;

/// Arguments for the `mintgate credential` subcommand.
#[derive(Args, Debug)]
pub struct CredentialArgs {
    #[command(subcommand)]
    pub command: CredentialCommand,
}

/// Credential subcommands.
#[derive(Subcommand, Debug)]
pub enum CredentialCommand {
    /// Sign a claim into a credential JSON document.
    Issue {
        /// Path to the gatekeeper private key file (hex-encoded 32 bytes).
        #[arg(long)]
        key: PathBuf,
        /// The resource number the author may mint for.
        #[arg(long)]
        resource: u64,
        /// Declared per-resource mint ceiling.
        #[arg(long)]
        allowed_mints: u8,
        /// The author address (0x-prefixed hex).
        #[arg(long)]
        author: String,
        /// Free-text creation date, captured on first mint.
        #[arg(long, default_value = "")]
        date_created: String,
        /// Free-text description, captured on first mint.
        #[arg(long, default_value = "")]
        description: String,
        /// Write the credential here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Verify a credential document against a gatekeeper address.
    Verify {
        /// The expected gatekeeper address (0x-prefixed hex).
        #[arg(long)]
        gatekeeper: String,
        /// Path to the credential JSON document.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Execute the credential subcommand.
pub fn run_credential(args: &CredentialArgs) -> Result<u8> {
    match &args.command {
        CredentialCommand::Issue {
            key,
            resource,
            allowed_mints,
            author,
            date_created,
            description,
            output,
        } => cmd_issue(
            key,
            *resource,
            *allowed_mints,
            author,
            date_created,
            description,
            output.as_deref(),
        ),
        CredentialCommand::Verify { gatekeeper, file } => cmd_verify(gatekeeper, file),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_issue(
    key_path: &Path,
    resource: u64,
    allowed_mints: u8,
    author: &str,
    date_created: &str,
    description: &str,
    output: Option<&Path>,
) -> Result<u8> {
    if !key_path.exists() {
        bail!("private key file not found: {}", key_path.display());
    }

    let sk_hex = std::fs::read_to_string(key_path)
        .with_context(|| format!("failed to read private key: {}", key_path.display()))?;
    let keypair = GatekeeperKeyPair::from_hex(&sk_hex)
        .map_err(|e| anyhow::anyhow!("invalid private key: {e}"))?;

    let author = Address::from_hex(author).map_err(|e| anyhow::anyhow!("invalid author: {e}"))?;

    let builder = CredentialBuilder::new(keypair);
    let credential = builder
        .issue(MintClaim::new(
            ResourceId(resource),
            allowed_mints,
            author,
            date_created,
            description,
        ))
        .map_err(|e| anyhow::anyhow!("signing failed: {e}"))?;

    let json = serde_json::to_string_pretty(&credential)
        .context("failed to serialize credential")?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write credential: {}", path.display()))?;
            println!("OK: credential written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(0)
}

fn cmd_verify(gatekeeper: &str, file_path: &Path) -> Result<u8> {
    if !file_path.exists() {
        bail!("credential file not found: {}", file_path.display());
    }

    let gatekeeper =
        Address::from_hex(gatekeeper).map_err(|e| anyhow::anyhow!("invalid gatekeeper: {e}"))?;

    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read credential: {}", file_path.display()))?;
    let credential: MintCredential = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse credential: {}", file_path.display()))?;

    if credential.verifies_against(gatekeeper) {
        println!("OK: credential is valid for gatekeeper {gatekeeper}");
        Ok(0)
    } else {
        println!("FAIL: credential does not verify against {gatekeeper}");
        Ok(1)
    }
}
