/*
[INPUT]:  Stellar SDK keypair primitives
[OUTPUT]: Wallet abstraction for account keys
[POS]:    Wallet layer - key management
[UPDATE]: When key handling or the SDK surface changes
*/

pub mod keys;

pub use keys::Wallet;
