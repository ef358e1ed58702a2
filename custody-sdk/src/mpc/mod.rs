// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Multi-party-computation wallet API.
//!
//! All endpoints live under `{domain}api/mpc/`. Withdrawals and Web3
//! transactions can carry a transaction signature made with a dedicated
//! signing key, see [`sign`].

use std::{sync::Arc, time::Duration};

use log::info;

use crate::{config::MpcConfig, transport::Transport, CryptoProvider, Result, RsaCryptoProvider};

pub mod auto_sweep;
pub mod deposit;
pub mod notify;
pub mod sign;
pub mod tron_resource;
pub mod wallet;
pub mod web3;
pub mod withdraw;
pub mod workspace;

pub use auto_sweep::AutoSweepApi;
pub use deposit::DepositApi;
pub use notify::NotifyApi;
pub use sign::{generate_web3_sign, generate_withdraw_sign};
pub use tron_resource::TronResourceApi;
pub use wallet::WalletApi;
pub use web3::Web3Api;
pub use withdraw::WithdrawApi;
pub use workspace::WorkspaceApi;

/// Every MPC path is relative to this prefix.
pub(crate) const PATH_PREFIX: &str = "api/mpc/";

/// Field that asks for a transaction signature on withdrawals and Web3
/// transactions.
pub(crate) const NEED_TRANSACTION_SIGN: &str = "need_transaction_sign";

pub struct MpcClient {
    transport: Transport,
}

impl MpcClient {
    /// Client with the in-process RSA provider. The signing key is optional
    /// and only checked when a signature is requested.
    pub fn new(config: MpcConfig) -> Result<Self> {
        config.validate()?;
        let provider = RsaCryptoProvider::from_pem(
            Some(config.rsa_private_key.as_str()),
            Some(config.waas_public_key.as_str()),
            Some(config.sign_private_key.as_str()),
        )?;
        Self::with_provider(config, Arc::new(provider))
    }

    pub fn with_provider(config: MpcConfig, provider: Arc<dyn CryptoProvider>) -> Result<Self> {
        config.validate_endpoint()?;
        let transport = Transport::new(
            &config.app_id,
            &config.url_for(""),
            "utf-8",
            Duration::from_secs(config.timeout_secs),
            provider,
        )?;
        info!("MPC client for app {} at {}", config.app_id, config.domain);

        Ok(Self { transport })
    }

    pub fn wallet(&self) -> WalletApi<'_> {
        WalletApi::new(&self.transport)
    }

    pub fn deposit(&self) -> DepositApi<'_> {
        DepositApi::new(&self.transport)
    }

    pub fn withdraw(&self) -> WithdrawApi<'_> {
        WithdrawApi::new(&self.transport)
    }

    pub fn web3(&self) -> Web3Api<'_> {
        Web3Api::new(&self.transport)
    }

    pub fn auto_sweep(&self) -> AutoSweepApi<'_> {
        AutoSweepApi::new(&self.transport)
    }

    pub fn workspace(&self) -> WorkspaceApi<'_> {
        WorkspaceApi::new(&self.transport)
    }

    pub fn tron_resource(&self) -> TronResourceApi<'_> {
        TronResourceApi::new(&self.transport)
    }

    pub fn notify(&self) -> NotifyApi<'_> {
        NotifyApi::new(&self.transport)
    }
}
