/*
[INPUT]:  Base64 transaction envelope XDR
[OUTPUT]: Transaction submission results
[POS]:    HTTP layer - transaction submission endpoint
[UPDATE]: When the submission endpoint or error mapping changes
*/

use reqwest::Method;

use crate::http::{HorizonClient, Result};
use crate::types::TransactionResponse;

impl HorizonClient {
    /// Submit a transaction envelope to the network
    ///
    /// POST /transactions with form field `tx`
    pub async fn submit_transaction(&self, envelope_xdr: &str) -> Result<TransactionResponse> {
        let builder = self.horizon_request(Method::POST, "/transactions")?;
        let builder = builder.form(&[("tx", envelope_xdr)]);
        self.send_json(builder).await
    }
}
