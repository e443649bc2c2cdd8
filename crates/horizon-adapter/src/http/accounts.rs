/*
[INPUT]:  Account identifiers
[OUTPUT]: Account snapshots (sequence, balances, signers)
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding new account endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{HorizonClient, HorizonError, Result};
use crate::types::AccountRecord;

impl HorizonClient {
    /// Load an account snapshot
    ///
    /// GET /accounts/{account_id}
    pub async fn account(&self, account_id: &str) -> Result<AccountRecord> {
        let endpoint = format!("/accounts/{account_id}");
        let builder = self.horizon_request(Method::GET, &endpoint)?;
        self.send_json(builder).await.map_err(|err| match err {
            HorizonError::Api { status: 404, .. } => HorizonError::AccountNotFound {
                account_id: account_id.to_string(),
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, HorizonClient, HorizonError};
    use crate::types::SignerType;
    use rust_decimal::Decimal;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ACCOUNT_ID: &str = "GCCVPYFOHY7ZB7557JKENAX62LUAPLMGIWNZJAFV2MITK6T32V37KEJU";

    fn client_for(server: &MockServer) -> HorizonClient {
        HorizonClient::with_config_and_base_urls(
            ClientConfig::default(),
            &server.uri(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_account_loads_snapshot() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "id": "GCCVPYFOHY7ZB7557JKENAX62LUAPLMGIWNZJAFV2MITK6T32V37KEJU",
            "account_id": "GCCVPYFOHY7ZB7557JKENAX62LUAPLMGIWNZJAFV2MITK6T32V37KEJU",
            "sequence": "3928966905266176",
            "subentry_count": 1,
            "last_modified_ledger": 915,
            "thresholds": {
                "low_threshold": 0,
                "med_threshold": 0,
                "high_threshold": 0
            },
            "flags": {
                "auth_required": false
            },
            "balances": [
                {
                    "balance": "10000.0000000",
                    "buying_liabilities": "0.0000000",
                    "asset_type": "native"
                }
            ],
            "signers": [
                {
                    "weight": 1,
                    "key": "TDVDK4OQ35BVISQIZFVYM3S5CSLEBB7B3TJ4BQ5DA5DMT2TIRFQZESGM",
                    "type": "preauth_tx"
                },
                {
                    "weight": 1,
                    "key": "GCCVPYFOHY7ZB7557JKENAX62LUAPLMGIWNZJAFV2MITK6T32V37KEJU",
                    "type": "ed25519_public_key"
                }
            ],
            "data": {},
            "paging_token": ""
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path(format!("/accounts/{ACCOUNT_ID}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let account = client.account(ACCOUNT_ID).await.expect("account failed");

        assert_eq!(account.account_id, ACCOUNT_ID);
        assert_eq!(account.sequence, 3_928_966_905_266_176);
        assert_eq!(
            account.native_balance().unwrap(),
            "10000".parse::<Decimal>().unwrap()
        );
        assert_eq!(account.signers.len(), 2);
        assert_eq!(account.extra_signers()[0].signer_type, SignerType::PreauthTx);
    }

    #[tokio::test]
    async fn test_account_not_found() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "type": "https://stellar.org/horizon-errors/not_found",
            "title": "Resource Missing",
            "status": 404,
            "detail": "The resource at the url requested was not found."
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path(format!("/accounts/{ACCOUNT_ID}")))
            .respond_with(
                ResponseTemplate::new(404)
                    .insert_header("content-type", "application/problem+json")
                    .set_body_raw(mock_response, "application/problem+json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.account(ACCOUNT_ID).await.unwrap_err();

        match err {
            HorizonError::AccountNotFound { account_id } => {
                assert_eq!(account_id, ACCOUNT_ID);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
