/*
[INPUT]:  Source account sequence, operations, keypairs
[OUTPUT]: Testnet transactions with hash and envelope XDR access
[POS]:    Transaction layer - construction over the Stellar SDK
[UPDATE]: When operations or construction rules change
*/

use std::cell::RefCell;
use std::rc::Rc;

use stellar_baselib::account::{Account, AccountBehavior};
use stellar_baselib::network::{NetworkPassphrase, Networks};
use stellar_baselib::transaction::{Transaction, TransactionBehavior};
use stellar_baselib::transaction_builder::{TransactionBuilder, TransactionBuilderBehavior};
use stellar_baselib::xdr::{self, Limits, WriteXdr};
use stellar_strkey::ed25519::PublicKey as StrkeyPublicKey;

use crate::http::{HorizonError, Result};
use crate::tx::amount::BASE_FEE_STROOPS;
use crate::wallet::Wallet;

/// Native-asset payment operation
pub fn payment_op(source: &str, destination: &str, amount_stroops: i64) -> Result<xdr::Operation> {
    Ok(xdr::Operation {
        source_account: Some(muxed_account(source)?),
        body: xdr::OperationBody::Payment(xdr::PaymentOp {
            destination: muxed_account(destination)?,
            asset: xdr::Asset::Native,
            amount: amount_stroops,
        }),
    })
}

/// Set-options operation registering a future transaction's hash as a
/// pre-authorization signer on the source account
pub fn preauth_signer_op(tx_hash: [u8; 32], weight: u32) -> xdr::Operation {
    xdr::Operation {
        source_account: None,
        body: xdr::OperationBody::SetOptions(xdr::SetOptionsOp {
            inflation_dest: None,
            clear_flags: None,
            set_flags: None,
            master_weight: None,
            low_threshold: None,
            med_threshold: None,
            high_threshold: None,
            home_domain: None,
            signer: Some(xdr::Signer {
                key: xdr::SignerKey::PreAuthTx(xdr::Uint256(tx_hash)),
                weight,
            }),
        }),
    }
}

/// Build a testnet transaction from the account's current sequence number.
///
/// The built transaction consumes `sequence + 1`, the next valid number for
/// the account. Time bounds are left unset, so validity never expires.
pub fn build_tx(
    source_account_id: &str,
    sequence: i64,
    operations: Vec<xdr::Operation>,
) -> Result<PreparedTx> {
    let source = Rc::new(RefCell::new(
        Account::new(source_account_id, &sequence.to_string()).map_err(HorizonError::sdk)?,
    ));

    let mut builder = TransactionBuilder::new(source, Networks::testnet(), None);
    builder.fee(BASE_FEE_STROOPS);
    for operation in operations {
        builder.add_operation(operation);
    }

    Ok(PreparedTx { tx: builder.build() })
}

/// A built transaction ready for hashing, signing, and submission
pub struct PreparedTx {
    tx: Transaction,
}

impl PreparedTx {
    /// Network hash of the transaction; this is the value a pre-authorization
    /// signer entry carries
    pub fn hash(&self) -> Result<[u8; 32]> {
        self.tx
            .hash()
            .try_into()
            .map_err(|_| HorizonError::Sdk("transaction hash is not 32 bytes".to_string()))
    }

    /// Hex-encoded transaction hash for display
    pub fn hash_hex(&self) -> Result<String> {
        Ok(hex::encode(self.hash()?))
    }

    /// Sign with the wallet's keypair
    pub fn sign(&mut self, wallet: &Wallet) {
        self.tx.sign(std::slice::from_ref(wallet.keypair()));
    }

    /// Base64 envelope XDR, with however many signatures have been attached
    pub fn envelope_xdr(&mut self) -> Result<String> {
        let envelope = self.tx.to_envelope().map_err(HorizonError::sdk)?;
        envelope
            .to_xdr_base64(Limits::none())
            .map_err(HorizonError::sdk)
    }
}

fn muxed_account(account_id: &str) -> Result<xdr::MuxedAccount> {
    let decoded = StrkeyPublicKey::from_string(account_id).map_err(|err| {
        HorizonError::Config(format!("invalid account id {account_id}: {err:?}"))
    })?;
    Ok(xdr::MuxedAccount::Ed25519(xdr::Uint256(decoded.0)))
}
