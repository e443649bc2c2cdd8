/*
[INPUT]:  Testnet endpoints
[OUTPUT]: A funded testnet account and its printed snapshot
[POS]:    Examples - faucet funding and account query
[UPDATE]: When the faucet or account endpoints change
*/

use horizon_adapter::HorizonClient;
use horizon_adapter::Wallet;

/// Example: create a keypair, fund it via Friendbot, and read it back.
#[tokio::main]
async fn main() {
    println!("=== Friendbot funding example ===\n");

    let client = match HorizonClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let wallet = match Wallet::generate() {
        Ok(wallet) => wallet,
        Err(e) => {
            eprintln!("Failed to generate keypair: {}", e);
            return;
        }
    };
    println!("✓ Generated account {}", wallet.public_key());

    if let Err(e) = client.fund_account(&wallet.public_key()).await {
        eprintln!("Friendbot funding failed: {}", e);
        return;
    }
    println!("✓ Account funded");

    match client.account(&wallet.public_key()).await {
        Ok(account) => {
            println!("  sequence: {}", account.sequence);
            if let Some(balance) = account.native_balance() {
                println!("  balance:  {} XLM", balance);
            }
        }
        Err(e) => eprintln!("Account query failed: {}", e),
    }
}
