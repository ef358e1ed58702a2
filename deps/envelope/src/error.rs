// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A signature that verifies to `false` is not an error, it is reported as
/// `Ok(false)` by the verify functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("crypto error: {0}")]
    Crypto(String),

    #[error("validation error: {0}")]
    Validation(String),
}
