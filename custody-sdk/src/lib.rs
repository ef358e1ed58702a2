// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! # Custody SDK
//!
//! Client for the custody platform's two HTTP product lines:
//! - [`waas`]: wallet-as-a-service (users, accounts, billing, coins,
//!   transfers, callbacks)
//! - [`mpc`]: multi-party-computation wallets (wallets, deposits,
//!   withdrawals, Web3 transactions, auto sweep, workspace, TRON resources,
//!   callbacks)
//!
//! Every call is one request/response round trip. Parameters travel
//! encrypted inside the secure envelope implemented by the `envelope` crate
//! and responses are decrypted before they are returned. Retries are left
//! to the caller; the `request_id` of a transaction makes resubmission safe.
//!
//! ```no_run
//! # async fn example() -> custody_sdk::Result<()> {
//! use custody_sdk::{config::MpcConfig, mpc::MpcClient};
//!
//! let client = MpcClient::new(MpcConfig::from_file("/etc/custody/mpc.toml")?)?;
//! let chains = client.workspace().get_support_main_chain().await?;
//! println!("{chains}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod enums;

pub mod error;
pub use error::*;

pub mod models;
pub use models::FromMapping;

pub mod mpc;
mod params;
pub mod transport;
pub mod waas;

pub use envelope::{CryptoProvider, Payload, RsaCryptoProvider};
