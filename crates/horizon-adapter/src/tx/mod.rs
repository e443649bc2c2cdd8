/*
[INPUT]:  Account snapshots, operations, amounts
[OUTPUT]: Built transactions ready for hashing, signing, submission
[POS]:    Transaction layer - construction over the Stellar SDK
[UPDATE]: When operations or construction rules change
*/

pub mod amount;
pub mod builder;

pub use amount::{stroops_to_xlm, xlm_to_stroops, BASE_FEE_STROOPS, STROOPS_PER_XLM};
pub use builder::{build_tx, payment_op, preauth_signer_op, PreparedTx};
