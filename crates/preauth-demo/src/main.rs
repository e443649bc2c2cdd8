/*
[INPUT]:  Fixed testnet endpoints, RUST_LOG filter
[OUTPUT]: Logged pre-authorized transaction walkthrough
[POS]:    Binary entry point
[UPDATE]: When startup or logging setup changes
*/

use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = match horizon_adapter::HorizonClient::new() {
        Ok(client) => client,
        Err(error) => {
            error!(%error, "failed to build horizon client");
            return;
        }
    };

    // Failures are logged, not propagated: the walkthrough carries no
    // exit-code contract.
    if let Err(error) = preauth_demo::run(&client).await {
        error!(%error, "walkthrough aborted");
    }
}
