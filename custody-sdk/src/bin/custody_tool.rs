// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Offline helper around the custody wire format: encrypt a request body,
//! open a webhook payload, sign and verify transaction parameters.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser};
use custody_sdk::{CryptoProvider, Payload, RsaCryptoProvider};
use envelope::codec;
use log::{debug, info};
use tokio::fs;

#[derive(Parser)]
#[command(name = "custody-tool")]
#[command(bin_name = "custody-tool")]
#[command(author, version, about, long_about = None)]
enum Cli {
    /// Encrypt a JSON request body with the caller private key
    Seal(SealArgs),

    /// Decrypt a ciphertext produced by the platform, e.g. a webhook body
    Open(OpenArgs),

    /// Transaction signature of the parameters in a JSON file
    Sign(SignArgs),

    /// Check a transaction signature
    Verify(VerifyArgs),
}

#[derive(Args)]
struct SealArgs {
    /// path of the JSON object to encrypt
    #[arg(short, long)]
    file_path: String,

    /// PEM file of the caller private key
    #[arg(short, long)]
    private_key: String,
}

#[derive(Args)]
struct OpenArgs {
    /// path of the file holding the base64url ciphertext
    #[arg(short, long)]
    file_path: String,

    /// PEM file of the platform public key
    #[arg(long)]
    public_key: String,
}

#[derive(Args)]
struct SignArgs {
    /// path of the JSON object to sign
    #[arg(short, long)]
    file_path: String,

    /// PEM file of the signing private key
    #[arg(short, long)]
    sign_key: String,
}

#[derive(Args)]
struct VerifyArgs {
    /// path of the signed JSON object
    #[arg(short, long)]
    file_path: String,

    /// base64 signature
    #[arg(short = 'g', long)]
    signature: String,

    /// PEM file of the public half of the signing key
    #[arg(long)]
    public_key: String,
}

async fn read_text(path: &str) -> Result<String> {
    let text = fs::read_to_string(path)
        .await
        .with_context(|| format!("read {path}"))?;
    Ok(text.trim().to_string())
}

async fn read_payload(path: &str) -> Result<Payload> {
    let raw = fs::read(path).await.with_context(|| format!("read {path}"))?;
    codec::parse_payload(&raw).with_context(|| format!("{path} is not a JSON object"))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse() {
        Cli::Seal(args) => {
            let key = envelope::parse_private_key(&read_text(&args.private_key).await?)?;
            let payload = read_payload(&args.file_path).await?;
            let text = codec::to_canonical_json(&payload)?;
            debug!("sealing {} bytes", text.len());
            println!("{}", codec::private_encrypt(text.as_bytes(), &key)?);
        }
        Cli::Open(args) => {
            let key = envelope::parse_public_key(&read_text(&args.public_key).await?)?;
            let plaintext = codec::public_decrypt(&read_text(&args.file_path).await?, &key)?;
            let payload = codec::parse_payload(&plaintext)?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Cli::Sign(args) => {
            let sign_key = read_text(&args.sign_key).await?;
            let provider = RsaCryptoProvider::from_pem(None, None, Some(&sign_key))?;
            let payload = read_payload(&args.file_path).await?;
            let text = envelope::signing::canonical_string(&payload);
            info!("canonical string: {text}");
            println!("{}", provider.sign(&text)?);
        }
        Cli::Verify(args) => {
            let public_key = read_text(&args.public_key).await?;
            let provider = RsaCryptoProvider::from_pem(None, Some(&public_key), None)?;
            let payload = read_payload(&args.file_path).await?;
            let text = envelope::signing::canonical_string(&payload);
            if !provider.verify(&text, &args.signature)? {
                bail!("signature does not match");
            }
            info!("signature OK");
        }
    }

    Ok(())
}
