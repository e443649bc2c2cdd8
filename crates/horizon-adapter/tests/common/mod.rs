/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for horizon-adapter tests

use horizon_adapter::{ClientConfig, HorizonClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server for both Horizon and Friendbot
pub fn client_for(server: &MockServer) -> HorizonClient {
    HorizonClient::with_config_and_base_urls(ClientConfig::default(), &server.uri(), &server.uri())
        .expect("client init")
}

/// A fixed Horizon account body for tests that only care about shape
#[allow(dead_code)]
pub fn account_body(account_id: &str, sequence: i64) -> serde_json::Value {
    serde_json::json!({
        "id": account_id,
        "account_id": account_id,
        "sequence": sequence.to_string(),
        "subentry_count": 0,
        "last_modified_ledger": 915,
        "thresholds": {
            "low_threshold": 0,
            "med_threshold": 0,
            "high_threshold": 0
        },
        "balances": [
            {
                "balance": "10000.0000000",
                "asset_type": "native"
            }
        ],
        "signers": [
            {
                "weight": 1,
                "key": account_id,
                "type": "ed25519_public_key"
            }
        ]
    })
}
