// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Codes and states used by the platform.

use strum::{AsRefStr, Display, EnumString, FromRepr};

/// Business error codes returned in the `code` field of a response.
#[derive(FromRepr, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ApiCode {
    Success = 0,
    SystemError = 100001,
    /// Also returned when a withdrawal confirmation callback fails.
    ParamInvalid = 100004,
    SignError = 100005,
    IpForbidden = 100007,
    MerchantIdInvalid = 100015,
    MerchantExpired = 100016,
    UserFrozen = 110004,
    MobileRegistered = 110023,
    WithdrawAddressRisk = 110037,
    WithdrawAddressError = 110055,
    UserNotExist = 110065,
    AmountBelowMin = 110078,
    AmountExceedMax = 110087,
    DuplicateRequest = 110088,
    MobileInvalid = 110089,
    RegisterFailed = 110101,
    PrecisionExceeded = 110161,
    CoinNotSupported = 120202,
    ConfirmFailed = 120206,
    BalanceInsufficient = 120402,
    FeeInsufficient = 120403,
    AmountLessThanFee = 120404,
    UserRiskForbidden = 900006,
    SelfTransferForbidden = 3040006,
}

#[derive(FromRepr, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DepositStatus {
    Confirming = 0,
    Success = 1,
    Failed = 2,
}

#[derive(FromRepr, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WithdrawStatus {
    PendingAudit = 0,
    Auditing = 1,
    AuditPassed = 2,
    AuditRejected = 3,
    Processing = 4,
    Broadcasting = 5,
    Success = 6,
    Failed = 7,
    Cancelled = 8,
}

#[derive(FromRepr, Display, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TransactionStatus {
    #[default]
    Pending = 0,
    Processing = 1,
    Success = 2,
    Failed = 3,
    Cancelled = 4,
}

impl TransactionStatus {
    /// Unknown codes read as [`TransactionStatus::Pending`].
    pub fn from_code(code: i64) -> Self {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_repr)
            .unwrap_or_default()
    }
}

#[derive(EnumString, AsRefStr, Display, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum TransactionSide {
    #[default]
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(FromRepr, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TronResourceType {
    Energy = 1,
    Bandwidth = 2,
}

/// Visibility of a sub wallet in the custody app, as accepted by the
/// change-show-status call.
#[derive(FromRepr, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WalletShowStatus {
    Show = 1,
    Hide = 2,
}

/// Which identifier a list of record ids refers to.
#[derive(EnumString, AsRefStr, Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryIdType {
    #[strum(serialize = "request_id")]
    RequestId,

    #[strum(serialize = "receipt")]
    Receipt,

    #[strum(serialize = "id")]
    WaasId,
}
