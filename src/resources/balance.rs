use serde::Deserialize;

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::{Data, RequestParams};

const PATH: &str = "balance";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Amounts are decimal strings in `currency`, e.g. `"300.00"`.
pub struct AccountBalance {
    pub balance: String,
    #[serde(default)]
    pub credit_limit: Option<String>,
    #[serde(default)]
    pub available_credit: Option<String>,
    #[serde(default)]
    pub pending: Option<String>,
    pub currency: String,
    #[serde(default)]
    pub record_type: Option<String>,
}

resource_handles!(
    /// `/balance`: current account balance.
    Balance,
    BalanceRaw
);

impl Balance<'_> {
    pub async fn retrieve(&self) -> Result<AccountBalance, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(RequestParams::new())
            .await?
            .into_inner())
    }
}

impl BalanceRaw<'_> {
    pub async fn retrieve(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Data<AccountBalance>>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }
}
