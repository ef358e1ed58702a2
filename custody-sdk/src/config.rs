// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Client configuration.
//!
//! Both configurations are plain values. They can be built in code (every
//! field is public and [`Default`] fills in the platform defaults) or loaded
//! from a file in any format the `config` crate supports. Clients validate
//! the configuration once, when they are constructed.

use std::fmt;

use config::{Config, File};
use log::debug;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::{Error, Result};

pub const DEFAULT_HOST: &str = "https://openapi.chainup.com/";
pub const DEFAULT_VERSION: &str = "v2";
pub const DEFAULT_CHARSET: &str = "utf-8";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Wallet-as-a-service API.
#[derive(Clone, Deserialize, PartialEq)]
pub struct WaasConfig {
    pub app_id: String,

    /// Caller private key, encrypts requests.
    #[serde(default)]
    pub private_key: Zeroizing<String>,

    /// Platform public key, opens responses and notifications.
    #[serde(default)]
    pub public_key: Zeroizing<String>,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_charset")]
    pub charset: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WaasConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            private_key: Zeroizing::default(),
            public_key: Zeroizing::default(),
            host: default_host(),
            version: default_version(),
            charset: default_charset(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WaasConfig {
    /// Load `WaasConfig` from a configuration file. Supported formats are all
    /// formats supported by the `config` crate.
    pub fn from_file(config_path: &str) -> Result<Self> {
        let c = Config::builder()
            .set_default("host", DEFAULT_HOST)
            .and_then(|b| b.set_default("version", DEFAULT_VERSION))
            .and_then(|b| b.set_default("charset", DEFAULT_CHARSET))
            .and_then(|b| b.set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64))
            .and_then(|b| b.add_source(File::with_name(config_path)).build())
            .map_err(|e| Error::Configuration(format!("read config {config_path} failed: {e}")))?;

        let mut config: Self = c
            .try_deserialize()
            .map_err(|e| Error::Configuration(format!("invalid config: {e}")))?;
        config.host = with_trailing_slash(&config.host);
        config.validate()?;
        debug!("loaded WaaS config for app {}", config.app_id);
        Ok(config)
    }

    /// Fail fast on a configuration that cannot work with the default crypto
    /// provider.
    pub fn validate(&self) -> Result<()> {
        self.validate_endpoint()?;
        if self.private_key.trim().is_empty() {
            return Err(Error::Configuration(
                "WaasConfig: private_key is required (or provide a crypto provider)".into(),
            ));
        }
        if self.public_key.trim().is_empty() {
            return Err(Error::Configuration(
                "WaasConfig: public_key is required (or provide a crypto provider)".into(),
            ));
        }
        Ok(())
    }

    /// Checks that do not depend on key material, used when the caller
    /// supplies its own crypto provider.
    pub fn validate_endpoint(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Configuration("WaasConfig: host is required".into()));
        }
        if self.app_id.trim().is_empty() {
            return Err(Error::Configuration("WaasConfig: app_id is required".into()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Configuration(
                "WaasConfig: timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// `{host}{version}/{path}`
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            with_trailing_slash(&self.host),
            self.version,
            path.trim_start_matches('/')
        )
    }
}

/// Multi-party-computation wallet API.
#[derive(Clone, Deserialize, PartialEq)]
pub struct MpcConfig {
    pub app_id: String,

    /// Caller private key, encrypts requests.
    #[serde(default)]
    pub rsa_private_key: Zeroizing<String>,

    /// Platform public key, opens responses and notifications.
    #[serde(default)]
    pub waas_public_key: Zeroizing<String>,

    /// Dedicated key for transaction signatures. Only needed when withdrawals
    /// or Web3 transactions ask for a signature.
    #[serde(default)]
    pub sign_private_key: Zeroizing<String>,

    #[serde(default = "default_host")]
    pub domain: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MpcConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            rsa_private_key: Zeroizing::default(),
            waas_public_key: Zeroizing::default(),
            sign_private_key: Zeroizing::default(),
            domain: default_host(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl MpcConfig {
    pub fn from_file(config_path: &str) -> Result<Self> {
        let c = Config::builder()
            .set_default("domain", DEFAULT_HOST)
            .and_then(|b| b.set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64))
            .and_then(|b| b.add_source(File::with_name(config_path)).build())
            .map_err(|e| Error::Configuration(format!("read config {config_path} failed: {e}")))?;

        let mut config: Self = c
            .try_deserialize()
            .map_err(|e| Error::Configuration(format!("invalid config: {e}")))?;
        config.domain = with_trailing_slash(&config.domain);
        config.validate()?;
        debug!("loaded MPC config for app {}", config.app_id);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_endpoint()?;
        if self.rsa_private_key.trim().is_empty() {
            return Err(Error::Configuration(
                "MpcConfig: rsa_private_key is required (or provide a crypto provider)".into(),
            ));
        }
        if self.waas_public_key.trim().is_empty() {
            return Err(Error::Configuration(
                "MpcConfig: waas_public_key is required (or provide a crypto provider)".into(),
            ));
        }
        Ok(())
    }

    pub fn validate_endpoint(&self) -> Result<()> {
        if self.domain.trim().is_empty() {
            return Err(Error::Configuration("MpcConfig: domain is required".into()));
        }
        if self.app_id.trim().is_empty() {
            return Err(Error::Configuration("MpcConfig: app_id is required".into()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Configuration(
                "MpcConfig: timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// `{domain}{path}`
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}",
            with_trailing_slash(&self.domain),
            path.trim_start_matches('/')
        )
    }
}

// Key material stays out of debug output.
impl fmt::Debug for WaasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaasConfig")
            .field("app_id", &self.app_id)
            .field("private_key", &redacted(&self.private_key))
            .field("public_key", &redacted(&self.public_key))
            .field("host", &self.host)
            .field("version", &self.version)
            .field("charset", &self.charset)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl fmt::Debug for MpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MpcConfig")
            .field("app_id", &self.app_id)
            .field("rsa_private_key", &redacted(&self.rsa_private_key))
            .field("waas_public_key", &redacted(&self.waas_public_key))
            .field("sign_private_key", &redacted(&self.sign_private_key))
            .field("domain", &self.domain)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn redacted(key: &str) -> &'static str {
    if key.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

fn with_trailing_slash(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

fn default_host() -> String {
    DEFAULT_HOST.into()
}

fn default_version() -> String {
    DEFAULT_VERSION.into()
}

fn default_charset() -> String {
    DEFAULT_CHARSET.into()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
