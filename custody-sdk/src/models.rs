// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Typed views over response mappings.
//!
//! API calls return the raw `data` value. Callers that want a typed record
//! convert an object with [`FromMapping::from_mapping`], which checks the
//! required fields and defaults everything else. Numeric fields accept both
//! JSON numbers and numeric strings since the platform uses either.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{
    enums::{TransactionSide, TransactionStatus},
    Error, Payload, Result,
};

pub trait FromMapping: DeserializeOwned {
    /// Fields that must be present and non-null.
    const REQUIRED: &'static [&'static str];

    fn from_mapping(mapping: &Payload) -> Result<Self> {
        for field in Self::REQUIRED {
            if mapping.get(*field).map_or(true, Value::is_null) {
                return Err(Error::invalid_field(
                    field,
                    format!("missing required field `{field}`"),
                ));
            }
        }

        serde_json::from_value(Value::Object(mapping.clone()))
            .map_err(|e| Error::validation(format!("malformed response record: {e}")))
    }

    /// Convert every object of a JSON array.
    fn from_list(value: &Value) -> Result<Vec<Self>> {
        let Value::Array(items) = value else {
            return Err(Error::validation("expected a JSON array of records"));
        };

        items
            .iter()
            .map(|item| match item {
                Value::Object(mapping) => Self::from_mapping(mapping),
                _ => Err(Error::validation("expected a JSON object record")),
            })
            .collect()
    }
}

/// Outer `{code, msg, data}` frame of every response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(deserialize_with = "lenient::int")]
    pub code: i64,

    #[serde(default)]
    pub msg: String,

    #[serde(default)]
    pub data: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl FromMapping for ApiResponse {
    const REQUIRED: &'static [&'static str] = &["code"];
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WalletInfo {
    #[serde(deserialize_with = "lenient::int")]
    pub sub_wallet_id: i64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub sub_wallet_name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub symbol: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub address: String,
}

impl FromMapping for WalletInfo {
    const REQUIRED: &'static [&'static str] = &["sub_wallet_id"];
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AddressInfo {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient::int")]
    pub uid: i64,

    #[serde(deserialize_with = "lenient::string")]
    pub address: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub symbol: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub memo: String,
}

impl FromMapping for AddressInfo {
    const REQUIRED: &'static [&'static str] = &["address"];
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TransactionRecord {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub request_id: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub symbol: String,

    #[serde(default = "zero_amount", deserialize_with = "lenient::string")]
    pub amount: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub address_from: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub address_to: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub txid: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub status: i64,

    #[serde(default, deserialize_with = "lenient::int")]
    pub confirm_count: i64,

    #[serde(default, deserialize_with = "lenient::int")]
    pub created_at: i64,
}

impl TransactionRecord {
    pub fn transaction_status(&self) -> TransactionStatus {
        TransactionStatus::from_code(self.status)
    }
}

impl FromMapping for TransactionRecord {
    const REQUIRED: &'static [&'static str] = &["id"];
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CoinInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub symbol: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub base_symbol: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(default = "default_decimals", deserialize_with = "lenient::int")]
    pub decimals: i64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub contract_address: String,

    #[serde(default, deserialize_with = "lenient::boolean")]
    pub is_token: bool,
}

impl FromMapping for CoinInfo {
    const REQUIRED: &'static [&'static str] = &["symbol"];
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(deserialize_with = "lenient::int")]
    pub uid: i64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub mobile: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub country: String,
}

impl FromMapping for UserInfo {
    const REQUIRED: &'static [&'static str] = &["uid"];
}

/// Deposit or withdrawal callback, after decryption.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NotifyData {
    #[serde(deserialize_with = "lenient::string")]
    pub side: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub sub_wallet_id: i64,

    #[serde(deserialize_with = "lenient::string")]
    pub symbol: String,

    #[serde(default = "zero_amount", deserialize_with = "lenient::string")]
    pub amount: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub address_from: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub address_to: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub txid: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub request_id: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub status: i64,
}

impl NotifyData {
    /// Unknown sides read as [`TransactionSide::Deposit`].
    pub fn transaction_side(&self) -> TransactionSide {
        self.side.parse().unwrap_or_default()
    }
}

impl FromMapping for NotifyData {
    const REQUIRED: &'static [&'static str] = &["side", "symbol"];
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AssetBalance {
    #[serde(deserialize_with = "lenient::string")]
    pub symbol: String,

    #[serde(default = "zero_amount", deserialize_with = "lenient::string")]
    pub balance: String,

    #[serde(default = "zero_amount", deserialize_with = "lenient::string")]
    pub frozen: String,
}

impl FromMapping for AssetBalance {
    const REQUIRED: &'static [&'static str] = &["symbol"];
}

fn zero_amount() -> String {
    "0".into()
}

fn default_decimals() -> i64 {
    8
}

mod lenient {
    use serde::{de::Error, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0),
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| D::Error::custom(format!("{n} is not an integer"))),
            Value::String(s) if s.trim().is_empty() => Ok(0),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("`{s}` is not an integer"))),
            other => Err(D::Error::custom(format!("expected an integer, got {other}"))),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(D::Error::custom(format!("expected a string, got {other}"))),
        }
    }

    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_i64() != Some(0)),
            Value::String(s) => Ok(matches!(s.as_str(), "1" | "true" | "TRUE" | "True")),
            other => Err(D::Error::custom(format!("expected a boolean, got {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn mapping(value: Value) -> Payload {
        value.as_object().unwrap().to_owned()
    }

    #[test]
    fn transaction_record_defaults() {
        let record = TransactionRecord::from_mapping(&mapping(json!({
            "id": "17",
            "symbol": "ETH",
            "status": 2,
        })))
        .unwrap();

        assert_eq!(record.id, 17);
        assert_eq!(record.amount, "0");
        assert_eq!(record.txid, "");
        assert_eq!(record.transaction_status(), TransactionStatus::Success);
    }

    #[rstest]
    #[case(json!({"symbol": "ETH"}), "id")]
    #[case(json!({"id": null}), "id")]
    fn transaction_record_requires_id(#[case] value: Value, #[case] field: &str) {
        match TransactionRecord::from_mapping(&mapping(value)) {
            Err(Error::Validation { field: Some(f), .. }) => assert_eq!(f, field),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_field_is_validation_error() {
        assert!(matches!(
            WalletInfo::from_mapping(&mapping(json!({"sub_wallet_id": "abc"}))),
            Err(Error::Validation { field: None, .. })
        ));
    }

    #[test]
    fn api_response_with_string_code() {
        let response = ApiResponse::from_mapping(&mapping(json!({
            "code": "0",
            "msg": "success",
            "data": {"uid": 1},
        })))
        .unwrap();
        assert!(response.is_success());
        assert_eq!(response.data, json!({"uid": 1}));

        let failed = ApiResponse::from_mapping(&mapping(json!({"code": 100005}))).unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.msg, "");
        assert_eq!(failed.data, Value::Null);
    }

    #[rstest]
    #[case("withdraw", TransactionSide::Withdraw)]
    #[case("deposit", TransactionSide::Deposit)]
    #[case("something-new", TransactionSide::Deposit)]
    fn notify_side(#[case] side: &str, #[case] expected: TransactionSide) {
        let notify = NotifyData::from_mapping(&mapping(json!({
            "side": side,
            "symbol": "USDTERC20",
            "sub_wallet_id": 1000537,
            "amount": 12.5,
        })))
        .unwrap();
        assert_eq!(notify.transaction_side(), expected);
        assert_eq!(notify.amount, "12.5");
    }

    #[test]
    fn coin_list() {
        let coins = CoinInfo::from_list(&json!([
            {"symbol": "ETH", "decimals": "18"},
            {"symbol": "USDTERC20", "base_symbol": "ETH", "is_token": 1,
             "contract_address": "0xdac17f958d2ee523a2206206994597c13d831ec7"},
            {"symbol": "BTC"},
        ]))
        .unwrap();

        assert_eq!(coins.len(), 3);
        assert_eq!(coins[0].decimals, 18);
        assert!(!coins[0].is_token);
        assert!(coins[1].is_token);
        assert_eq!(coins[2].decimals, 8);

        assert!(CoinInfo::from_list(&json!({"symbol": "ETH"})).is_err());
        assert!(CoinInfo::from_list(&json!(["ETH"])).is_err());
    }

    #[test]
    fn asset_balance_and_user() {
        let balance =
            AssetBalance::from_mapping(&mapping(json!({"symbol": "BTC", "balance": "0.5"})))
                .unwrap();
        assert_eq!(balance.frozen, "0");

        let user = UserInfo::from_mapping(&mapping(json!({"uid": 42, "email": "a@b.c"}))).unwrap();
        assert_eq!(user.uid, 42);
        assert_eq!(user.mobile, "");

        let address =
            AddressInfo::from_mapping(&mapping(json!({"address": "0xabc", "uid": "7"}))).unwrap();
        assert_eq!(address.uid, 7);
    }
}
