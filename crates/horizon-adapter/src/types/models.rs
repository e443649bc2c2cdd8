/*
[INPUT]:  Horizon resource schemas and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{AssetType, SignerType};

/// Account resource returned by GET /accounts/{id}
///
/// Models the subset of the Horizon account record the walkthrough needs;
/// unknown fields on the wire are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub account_id: String,
    #[serde(with = "serde_helpers::i64_str")]
    pub sequence: i64,
    pub subentry_count: u32,
    #[serde(default)]
    pub last_modified_ledger: u32,
    pub thresholds: AccountThresholds,
    pub balances: Vec<BalanceLine>,
    pub signers: Vec<AccountSigner>,
}

impl AccountRecord {
    /// Native (XLM) balance, if the account holds one
    pub fn native_balance(&self) -> Option<Decimal> {
        self.balances
            .iter()
            .find(|line| line.asset_type == AssetType::Native)
            .map(|line| line.balance)
    }

    /// Signer entries other than the account's own master key
    pub fn extra_signers(&self) -> Vec<&AccountSigner> {
        self.signers
            .iter()
            .filter(|signer| signer.key != self.account_id)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountThresholds {
    pub low_threshold: u8,
    pub med_threshold: u8,
    pub high_threshold: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceLine {
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    pub asset_type: AssetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSigner {
    pub key: String,
    pub weight: u32,
    #[serde(rename = "type")]
    pub signer_type: SignerType,
}

mod serde_helpers {
    /// Horizon serves sequence numbers as decimal strings.
    pub mod i64_str {
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&value.to_string())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse::<i64>().map_err(de::Error::custom)
        }
    }
}
