/*
[INPUT]:  Horizon/Friendbot client
[OUTPUT]: Completed pre-authorized transaction walkthrough
[POS]:    Demo crate root - the walkthrough flow
[UPDATE]: When the walkthrough steps or logged fields change
*/

use horizon_adapter::{
    build_tx, payment_op, preauth_signer_op, xlm_to_stroops, AccountRecord, HorizonClient, Result,
    Wallet,
};
use rust_decimal::Decimal;
use tracing::info;

/// Amount the future payment transfers, in XLM
pub const PAYMENT_AMOUNT_XLM: u32 = 5000;

/// Weight given to the pre-authorization signer entry
pub const PREAUTH_SIGNER_WEIGHT: u32 = 1;

/// Result of a completed walkthrough, for callers and tests
#[derive(Debug)]
pub struct WalkthroughOutcome {
    pub sender: String,
    pub receiver: String,
    pub future_tx_hash: String,
    pub sender_account: AccountRecord,
    pub receiver_account: AccountRecord,
}

/// Run the pre-authorized transaction walkthrough end to end.
///
/// 1. Generate and fund sender and receiver accounts
/// 2. Build the future payment consuming the sender's sequence plus two
/// 3. Register the future transaction's hash as a signer on the sender
/// 4. Submit the future transaction without signing it
/// 5. Read back both accounts
pub async fn run(client: &HorizonClient) -> Result<WalkthroughOutcome> {
    info!("starting pre-authorized transaction walkthrough");

    // Step 1: two fresh funded accounts
    let sender = Wallet::generate()?;
    info!(account = %sender.public_key(), "generated sender account");
    info!("funding sender via friendbot");
    client.fund_account(&sender.public_key()).await?;
    let sender_account = client.account(&sender.public_key()).await?;
    log_account("sender", &sender_account, false);

    let receiver = Wallet::generate()?;
    info!(account = %receiver.public_key(), "generated receiver account");
    info!("funding receiver via friendbot");
    client.fund_account(&receiver.public_key()).await?;
    let receiver_account = client.account(&receiver.public_key()).await?;
    log_account("receiver", &receiver_account, false);

    // Step 2: the future payment. It must consume sequence + 2 because the
    // add-signer transaction takes sequence + 1 first; build_tx applies the
    // + 1 consensus bump, so the snapshot sequence goes in bumped once.
    info!(
        amount_xlm = PAYMENT_AMOUNT_XLM,
        "building future payment to receiver"
    );
    let amount = xlm_to_stroops(Decimal::from(PAYMENT_AMOUNT_XLM))?;
    let payment = payment_op(&sender.public_key(), &receiver.public_key(), amount)?;
    let mut future_tx = build_tx(
        &sender.public_key(),
        sender_account.sequence + 1,
        vec![payment],
    )?;
    info!(xdr = %future_tx.envelope_xdr()?, "future transaction built");

    // Step 3: register the hash as a signer, signed normally by the sender
    let future_hash = future_tx.hash()?;
    info!(
        hash = %future_tx.hash_hex()?,
        "registering future transaction hash as signer on sender"
    );
    let signer = preauth_signer_op(future_hash, PREAUTH_SIGNER_WEIGHT);

    // Fresh snapshot: the add-signer transaction uses the current sequence
    let current = client.account(&sender.public_key()).await?;
    let mut add_signer_tx = build_tx(&sender.public_key(), current.sequence, vec![signer])?;
    add_signer_tx.sign(&sender);
    client
        .submit_transaction(&add_signer_tx.envelope_xdr()?)
        .await?;
    info!("signer added");

    let with_signer = client.account(&sender.public_key()).await?;
    log_account("sender", &with_signer, true);

    // Step 4: the envelope goes out with an empty signature list; the ledger
    // accepts it because its hash is a registered signer
    info!("submitting pre-authorized transaction without a signature");
    let response = client.submit_transaction(&future_tx.envelope_xdr()?).await?;
    info!(hash = %response.hash, "pre-authorized transaction applied");

    // Step 5: final snapshots
    let sender_account = client.account(&sender.public_key()).await?;
    log_account("sender", &sender_account, true);
    let receiver_account = client.account(&receiver.public_key()).await?;
    log_account("receiver", &receiver_account, false);

    info!("walkthrough complete");

    Ok(WalkthroughOutcome {
        sender: sender.public_key(),
        receiver: receiver.public_key(),
        future_tx_hash: future_tx.hash_hex()?,
        sender_account,
        receiver_account,
    })
}

fn log_account(label: &str, account: &AccountRecord, show_signers: bool) {
    let balance = account
        .native_balance()
        .map(|balance| balance.to_string())
        .unwrap_or_else(|| "none".to_string());

    if show_signers {
        info!(
            account = label,
            sequence = account.sequence,
            balance = %balance,
            signers = ?account.signers,
            "account snapshot"
        );
    } else {
        info!(
            account = label,
            sequence = account.sequence,
            balance = %balance,
            "account snapshot"
        );
    }
}
