// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

use crate::enums::ApiCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("crypto error: {0}")]
    Crypto(String),

    #[error("validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("api error{}: {message}", api_error_context(.code, .http_status))]
    Api {
        code: Option<i64>,
        http_status: Option<u16>,
        message: String,
    },
}

fn api_error_context(code: &Option<i64>, http_status: &Option<u16>) -> String {
    match (code, http_status) {
        (Some(code), Some(status)) => format!(" [{code}] (HTTP {status})"),
        (Some(code), None) => format!(" [{code}]"),
        (None, Some(status)) => format!(" (HTTP {status})"),
        (None, None) => String::new(),
    }
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }

    /// The platform error code as a known [`ApiCode`], if any.
    pub fn api_code(&self) -> Option<ApiCode> {
        match self {
            Error::Api {
                code: Some(code), ..
            } => u32::try_from(*code).ok().and_then(ApiCode::from_repr),
            _ => None,
        }
    }

    /// Rejected credentials: bad signature, unknown merchant, IP not allowed
    /// or an HTTP 401/403.
    pub fn is_authentication(&self) -> bool {
        if let Error::Api { http_status, .. } = self {
            if matches!(http_status, Some(401) | Some(403)) {
                return true;
            }
        }

        matches!(
            self.api_code(),
            Some(
                ApiCode::SignError
                    | ApiCode::IpForbidden
                    | ApiCode::MerchantIdInvalid
                    | ApiCode::MerchantExpired
            )
        )
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            Error::Api {
                http_status: Some(429),
                ..
            }
        )
    }
}

impl From<envelope::Error> for Error {
    fn from(e: envelope::Error) -> Self {
        match e {
            envelope::Error::Configuration(message) => Error::Configuration(message),
            envelope::Error::Crypto(message) => Error::Crypto(message),
            envelope::Error::Validation(message) => Error::validation(message),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(format!("http request failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Error::Api { code: Some(100005), http_status: None, message: "sign error".into() }, "api error [100005]: sign error")]
    #[case(Error::Api { code: None, http_status: Some(502), message: "bad gateway".into() }, "api error (HTTP 502): bad gateway")]
    #[case(Error::Api { code: Some(1), http_status: Some(500), message: "x".into() }, "api error [1] (HTTP 500): x")]
    #[case(Error::Configuration("app_id is required".into()), "configuration error: app_id is required")]
    #[case(Error::invalid_field("symbol", "symbol is required"), "validation error: symbol is required")]
    fn display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(Some(100005), None, true)]
    #[case(Some(100007), None, true)]
    #[case(Some(100015), None, true)]
    #[case(Some(120402), None, false)]
    #[case(None, Some(401), true)]
    #[case(None, Some(500), false)]
    fn authentication_errors(
        #[case] code: Option<i64>,
        #[case] http_status: Option<u16>,
        #[case] expected: bool,
    ) {
        let error = Error::Api {
            code,
            http_status,
            message: String::new(),
        };
        assert_eq!(error.is_authentication(), expected);
    }

    #[test]
    fn api_code_classification() {
        let error = Error::Api {
            code: Some(110088),
            http_status: None,
            message: "duplicate".into(),
        };
        assert_eq!(error.api_code(), Some(ApiCode::DuplicateRequest));
        assert!(!error.is_rate_limited());

        let unknown = Error::Api {
            code: Some(-7),
            http_status: Some(429),
            message: String::new(),
        };
        assert_eq!(unknown.api_code(), None);
        assert!(unknown.is_rate_limited());
    }

    #[test]
    fn envelope_errors_keep_their_kind() {
        assert!(matches!(
            Error::from(envelope::Error::Crypto("x".into())),
            Error::Crypto(_)
        ));
        assert!(matches!(
            Error::from(envelope::Error::Validation("x".into())),
            Error::Validation { field: None, .. }
        ));
        assert!(matches!(
            Error::from(envelope::Error::Configuration("x".into())),
            Error::Configuration(_)
        ));
    }
}
