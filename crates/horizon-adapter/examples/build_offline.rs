/*
[INPUT]:  Nothing (keys generated locally)
[OUTPUT]: Printed envelope XDR and hash for an offline-built payment
[POS]:    Examples - transaction construction without the network
[UPDATE]: When the construction API changes
*/

use horizon_adapter::{build_tx, payment_op, xlm_to_stroops, Wallet};
use rust_decimal::Decimal;

/// Example: build and sign a payment without touching the network.
///
/// The sequence number is made up; a real caller loads it from Horizon.
fn main() {
    let sender = Wallet::generate().expect("keypair generation");
    let receiver = Wallet::generate().expect("keypair generation");
    println!("Sender:   {}", sender.public_key());
    println!("Receiver: {}", receiver.public_key());

    let amount = xlm_to_stroops(Decimal::from(5000)).expect("amount");
    let operation =
        payment_op(&sender.public_key(), &receiver.public_key(), amount).expect("payment op");

    let mut tx = build_tx(&sender.public_key(), 0, vec![operation]).expect("build");
    tx.sign(&sender);

    println!("Hash: {}", tx.hash_hex().expect("hash"));
    println!("XDR:  {}", tx.envelope_xdr().expect("envelope"));
}
