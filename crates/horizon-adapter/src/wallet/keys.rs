/*
[INPUT]:  Random entropy or an S... secret seed
[OUTPUT]: Ed25519 keypair with strkey-encoded addresses
[POS]:    Wallet layer - keypair wrapper over the Stellar SDK
[UPDATE]: When key formats or the SDK keypair API change
*/

use stellar_baselib::keypair::{Keypair, KeypairBehavior};
use stellar_strkey::ed25519::PublicKey as StrkeyPublicKey;

use crate::http::{HorizonError, Result};

/// Ed25519 keypair for a Stellar account
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Generate a new random keypair
    pub fn generate() -> Result<Self> {
        let keypair = Keypair::random().map_err(HorizonError::sdk)?;
        Ok(Self { keypair })
    }

    /// Recover a wallet from an S... secret seed
    pub fn from_secret(secret: &str) -> Result<Self> {
        let keypair = Keypair::from_secret(secret).map_err(HorizonError::sdk)?;
        Ok(Self { keypair })
    }

    /// G... account address
    pub fn public_key(&self) -> String {
        self.keypair.public_key()
    }

    /// S... secret seed
    pub fn secret(&self) -> Result<String> {
        self.keypair.secret_key().map_err(HorizonError::sdk)
    }

    /// Raw ed25519 public key bytes
    pub fn public_key_bytes(&self) -> Result<[u8; 32]> {
        let decoded =
            StrkeyPublicKey::from_string(&self.public_key()).map_err(HorizonError::sdk)?;
        Ok(decoded.0)
    }

    pub(crate) fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

// Secret seeds stay out of debug output.
impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("public_key", &self.public_key())
            .finish()
    }
}
