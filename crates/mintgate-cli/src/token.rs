//! # Token Subcommand
//!
//! Token identifier codec tooling: encode a `(resource, sequence)` pair
//! or recover the pair from an identifier.

use anyhow::Result;
use clap::{Args, Subcommand};

use mintgate_core::{decode_token_id, encode_token_id, ResourceId, TokenId};

/// Arguments for the `mintgate token` subcommand.
#[derive(Args, Debug)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token codec subcommands.
#[derive(Subcommand, Debug)]
pub enum TokenCommand {
    /// Encode a resource number and sequence into a token identifier.
    Encode {
        /// The resource number.
        #[arg(long)]
        resource: u64,
        /// The 1-based mint sequence number.
        #[arg(long)]
        sequence: u32,
    },

    /// Decode a token identifier into its resource and sequence.
    Decode {
        /// The token identifier.
        #[arg(value_name = "TOKEN_ID")]
        token_id: u128,
    },
}

/// Execute the token subcommand.
pub fn run_token(args: &TokenArgs) -> Result<u8> {
    match &args.command {
        TokenCommand::Encode { resource, sequence } => {
            match encode_token_id(ResourceId(*resource), *sequence) {
                Ok(token_id) => {
                    println!("{token_id}");
                    Ok(0)
                }
                Err(e) => {
                    println!("FAIL: {e}");
                    Ok(1)
                }
            }
        }
        TokenCommand::Decode { token_id } => match decode_token_id(TokenId(*token_id)) {
            Ok((resource, sequence)) => {
                println!("resource: {}", resource.0);
                println!("sequence: {sequence}");
                Ok(0)
            }
            Err(e) => {
                println!("FAIL: {e}");
                Ok(1)
            }
        },
    }
}
