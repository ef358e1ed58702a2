// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Wallet-as-a-service API.

use std::{sync::Arc, time::Duration};

use log::info;

use crate::{config::WaasConfig, transport::Transport, CryptoProvider, Result, RsaCryptoProvider};

pub mod account;
pub mod billing;
pub mod coin;
pub mod notify;
pub mod transfer;
pub mod user;

pub use account::AccountApi;
pub use billing::BillingApi;
pub use coin::CoinApi;
pub use notify::AsyncNotifyApi;
pub use transfer::TransferApi;
pub use user::UserApi;

pub struct WaasClient {
    transport: Transport,
}

impl WaasClient {
    /// Client with the in-process RSA provider built from the configured
    /// keys.
    pub fn new(config: WaasConfig) -> Result<Self> {
        config.validate()?;
        let provider = RsaCryptoProvider::from_pem(
            Some(config.private_key.as_str()),
            Some(config.public_key.as_str()),
            None,
        )?;
        Self::with_provider(config, Arc::new(provider))
    }

    /// Client whose key operations are delegated to `provider`. The key
    /// fields of `config` are ignored.
    pub fn with_provider(config: WaasConfig, provider: Arc<dyn CryptoProvider>) -> Result<Self> {
        config.validate_endpoint()?;
        let transport = Transport::new(
            &config.app_id,
            &config.url_for(""),
            &config.charset,
            Duration::from_secs(config.timeout_secs),
            provider,
        )?;
        info!("WaaS client for app {} at {}", config.app_id, config.host);

        Ok(Self { transport })
    }

    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(&self.transport)
    }

    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(&self.transport)
    }

    pub fn billing(&self) -> BillingApi<'_> {
        BillingApi::new(&self.transport)
    }

    pub fn coin(&self) -> CoinApi<'_> {
        CoinApi::new(&self.transport)
    }

    pub fn transfer(&self) -> TransferApi<'_> {
        TransferApi::new(&self.transport)
    }

    pub fn async_notify(&self) -> AsyncNotifyApi<'_> {
        AsyncNotifyApi::new(&self.transport)
    }
}
