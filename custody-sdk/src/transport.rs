// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! One signed and encrypted round trip to the platform.
//!
//! A request carries exactly two form fields: `app_id` and `data`. `data` is
//! the caller's parameters plus `time` and `charset`, serialized as compact
//! JSON and encrypted through the [`CryptoProvider`]. The response is a JSON
//! frame `{code, msg, data}` whose `data`, when it is a non-empty string, is
//! the encrypted full inner response.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use const_format::concatcp;
use envelope::{codec, CryptoProvider};
use log::{debug, warn};
use reqwest::{ClientBuilder, Method};
use serde_json::Value;

use crate::{Error, Payload, Result};

const USER_AGENT: &str = concatcp!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Ciphertext is cut to this many characters in debug logs.
const LOG_CIPHER_CHARS: usize = 100;

pub struct Transport {
    http_client: reqwest::Client,
    app_id: String,
    base_url: String,
    charset: String,
    provider: Arc<dyn CryptoProvider>,
}

impl Transport {
    /// `base_url` must end with `/`, paths are appended to it.
    pub fn new(
        app_id: &str,
        base_url: &str,
        charset: &str,
        timeout: Duration,
        provider: Arc<dyn CryptoProvider>,
    ) -> Result<Self> {
        let http_client = ClientBuilder::new()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("build http client failed: {e}")))?;

        Ok(Self {
            http_client,
            app_id: app_id.to_string(),
            base_url: base_url.to_string(),
            charset: charset.to_string(),
            provider,
        })
    }

    pub fn provider(&self) -> &Arc<dyn CryptoProvider> {
        &self.provider
    }

    pub async fn post(&self, path: &str, params: Payload) -> Result<Value> {
        self.invoke(Method::POST, path, params).await
    }

    pub async fn get(&self, path: &str, params: Payload) -> Result<Value> {
        self.invoke(Method::GET, path, params).await
    }

    /// Send `params` and return the validated `data` of the response.
    pub async fn invoke(&self, method: Method, path: &str, params: Payload) -> Result<Value> {
        let response = self.execute(method, path, params).await?;
        validate_response(&response)
    }

    /// Send `params` and return the decrypted response frame without
    /// checking its code.
    pub async fn execute(&self, method: Method, path: &str, params: Payload) -> Result<Payload> {
        let args = self.request_args(params)?;
        debug!("request args for {path}: {args}");

        let data = self.provider.encrypt(&args)?;
        debug!(
            "encrypted request data: {}...",
            truncate(&data, LOG_CIPHER_CHARS)
        );

        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        let form = [("app_id", self.app_id.as_str()), ("data", data.as_str())];
        let request = self.http_client.request(method.clone(), &url);
        let request = if method == Method::GET {
            request.query(&form)
        } else {
            request.form(&form)
        };

        debug!("{method} {url}");
        let response = request.send().await.map_err(|e| {
            warn!("{method} {url} failed: {e}");
            Error::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("{method} {url} returned HTTP {status}");
            return Err(Error::Api {
                code: None,
                http_status: Some(status.as_u16()),
                message: format!("HTTP {status}: {}", truncate(&body, 512)),
            });
        }

        debug!("response: {body}");
        self.open_response(&body, status.as_u16())
    }

    /// Caller parameters plus `time` (epoch milliseconds) and `charset`, which
    /// take precedence over caller values of the same name.
    pub fn request_args(&self, mut params: Payload) -> Result<String> {
        params.insert("time".into(), Value::from(Utc::now().timestamp_millis()));
        params.insert("charset".into(), Value::from(self.charset.as_str()));
        Ok(codec::to_canonical_json(&params)?)
    }

    /// Decrypt a callback body pushed by the platform.
    pub fn open_notification(&self, cipher: &str) -> Result<Payload> {
        let cipher = cipher.trim();
        if cipher.is_empty() {
            return Err(Error::invalid_field("cipher", "notification cipher is empty"));
        }

        let plain = self.provider.decrypt(cipher)?;
        debug!("decrypted notification: {plain}");
        let notification = codec::parse_payload(plain.as_bytes())?;
        if notification.is_empty() {
            return Err(Error::validation("notification carries no parameters"));
        }
        Ok(notification)
    }

    /// Encrypt a reply the platform expects in the body of a callback
    /// response.
    pub fn seal_reply(&self, reply: &Payload) -> Result<String> {
        if reply.is_empty() {
            return Err(Error::validation("reply carries no parameters"));
        }
        let text = codec::to_canonical_json(reply)?;
        Ok(self.provider.encrypt(&text)?)
    }

    fn open_response(&self, body: &str, http_status: u16) -> Result<Payload> {
        let outer = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(outer)) => outer,
            _ => {
                return Err(Error::Api {
                    code: None,
                    http_status: Some(http_status),
                    message: format!("invalid JSON response: {}", truncate(body, 512)),
                })
            }
        };

        let cipher = match outer.get("data") {
            Some(Value::String(cipher)) if !cipher.is_empty() => cipher,
            _ => return Ok(outer),
        };

        let opened = self
            .provider
            .decrypt(cipher)
            .map_err(Error::from)
            .and_then(|plain| {
                debug!("decrypted response: {plain}");
                codec::parse_payload(plain.as_bytes()).map_err(Error::from)
            });

        match opened {
            Ok(inner) => Ok(inner),
            Err(e) if is_failure(&outer) => {
                warn!("response data not decryptable, report the outer error: {e}");
                validate_response(&outer).map(|_| outer)
            }
            Err(e @ Error::Configuration(_)) => Err(e),
            Err(e) => Err(Error::Crypto(format!("decrypt response data failed: {e}"))),
        }
    }
}

/// `code` 0 (or "0") yields `data`, an empty string `data` reads as an empty
/// object. Any other code is an [`Error::Api`].
pub fn validate_response(response: &Payload) -> Result<Value> {
    match response.get("code") {
        Some(code) if is_success_code(code) => Ok(match response.get("data") {
            None | Some(Value::Null) => Value::Object(Payload::new()),
            Some(Value::String(s)) if s.is_empty() => Value::Object(Payload::new()),
            Some(data) => data.clone(),
        }),
        code => {
            let message = response
                .get("msg")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or("Unknown error")
                .to_string();
            Err(Error::Api {
                code: code.and_then(code_number),
                http_status: None,
                message,
            })
        }
    }
}

fn is_failure(response: &Payload) -> bool {
    response
        .get("code")
        .is_some_and(|code| !code.is_null() && !is_success_code(code))
}

fn is_success_code(code: &Value) -> bool {
    code_number(code) == Some(0)
}

fn code_number(code: &Value) -> Option<i64> {
    match code {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}
