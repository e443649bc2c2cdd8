/*
[INPUT]:  Error sources (HTTP, Horizon problems, serialization, SDK)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Horizon adapter
#[derive(Error, Debug)]
pub enum HorizonError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Horizon returned a problem response
    #[error("Horizon error (status {status}): {title}: {detail}")]
    Api {
        status: u16,
        title: String,
        detail: String,
    },

    /// Horizon rejected a submitted transaction
    #[error("transaction failed ({transaction}), operation codes: {operations:?}")]
    TransactionFailed {
        transaction: String,
        operations: Vec<String>,
    },

    /// Account does not exist on the ledger
    #[error("account {account_id} not found")]
    AccountNotFound { account_id: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Wrapped Stellar SDK failure
    #[error("Stellar SDK error: {0}")]
    Sdk(String),

    /// Invalid payment amount
    #[error("Invalid amount: {0}")]
    Amount(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl HorizonError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            HorizonError::Http(_) | HorizonError::InvalidResponse(_)
        )
    }

    /// Check if the error indicates a missing account
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HorizonError::AccountNotFound { .. } | HorizonError::Api { status: 404, .. }
        )
    }

    /// Wrap a failure coming out of the Stellar SDK
    pub fn sdk(err: impl std::fmt::Debug) -> Self {
        HorizonError::Sdk(format!("{err:?}"))
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, HorizonError>;
