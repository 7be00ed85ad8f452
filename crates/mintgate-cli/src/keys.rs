//! # Keygen Subcommand
//!
//! Gatekeeper keypair generation. Writes the private key as a hex file
//! and the derived address alongside it; the address is what registry
//! deployments get configured with.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use mintgate_crypto::GatekeeperKeyPair;

/// Arguments for the `mintgate keygen` subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Output directory for the keypair files.
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Prefix for the key filenames.
    #[arg(long, default_value = "gatekeeper")]
    pub prefix: String,
}

/// Execute the keygen subcommand.
pub fn run_keygen(args: &KeygenArgs) -> Result<u8> {
    cmd_keygen(&args.output, &args.prefix)
}

fn cmd_keygen(output_dir: &Path, prefix: &str) -> Result<u8> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let keypair = GatekeeperKeyPair::generate();
    let sk_hex: String = keypair
        .to_bytes()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    let address = keypair.address();

    let key_path = output_dir.join(format!("{prefix}.key"));
    let addr_path = output_dir.join(format!("{prefix}.addr"));

    std::fs::write(&key_path, &sk_hex)
        .with_context(|| format!("failed to write private key: {}", key_path.display()))?;
    std::fs::write(&addr_path, address.to_hex())
        .with_context(|| format!("failed to write address: {}", addr_path.display()))?;

    println!("OK: generated gatekeeper keypair");
    println!("  Private key: {}", key_path.display());
    println!("  Address file: {}", addr_path.display());
    println!("  Address: {address}");

    Ok(0)
}
