/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Horizon adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod tx;
pub mod types;
pub mod wallet;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    HorizonClient,
    HorizonError,
    Result,
};

// Re-export all types
pub use types::*;

// Re-export transaction construction helpers
pub use tx::{
    build_tx,
    payment_op,
    preauth_signer_op,
    stroops_to_xlm,
    xlm_to_stroops,
    PreparedTx,
    BASE_FEE_STROOPS,
    STROOPS_PER_XLM,
};

// Re-export the keypair wrapper
pub use wallet::Wallet;
