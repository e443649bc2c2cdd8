/*
[INPUT]:  Public key of an account to create
[OUTPUT]: Funding transaction record from the faucet
[POS]:    HTTP layer - Friendbot faucet endpoint
[UPDATE]: When the faucet endpoint or response format changes
*/

use crate::http::{HorizonClient, Result};
use crate::types::TransactionResponse;

impl HorizonClient {
    /// Ask the Friendbot faucet to create and fund an account
    ///
    /// GET {friendbot}/?addr={public_key}
    pub async fn fund_account(&self, public_key: &str) -> Result<TransactionResponse> {
        let builder = self.friendbot_request(public_key)?;
        self.send_json(builder).await
    }
}
