/*
[INPUT]:  Horizon resource schemas and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    #[serde(rename = "native")]
    Native,
    #[serde(rename = "credit_alphanum4")]
    CreditAlphanum4,
    #[serde(rename = "credit_alphanum12")]
    CreditAlphanum12,
    #[serde(rename = "liquidity_pool_shares")]
    LiquidityPoolShares,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignerType {
    #[serde(rename = "ed25519_public_key")]
    Ed25519PublicKey,
    #[serde(rename = "preauth_tx")]
    PreauthTx,
    #[serde(rename = "sha256_hash")]
    Sha256Hash,
}
