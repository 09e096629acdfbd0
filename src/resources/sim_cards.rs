use serde::{Deserialize, Serialize};

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::null_as_default;
use crate::domain::{Data, Omittable, Page, PageParams, RequestParams, SimCardId};

const PATH: &str = "sim_cards";
const ACTIONS: &str = "actions";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SimCardFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iccid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sim_card_group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SimCardListParams {
    pub filter: SimCardFilter,
    #[serde(skip_serializing_if = "PageParams::is_empty")]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_sim_card_group: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SimCardUpdateParams {
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub sim_card_group_id: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub tags: Omittable<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Current state of a SIM, e.g. `enabled`, `disabled`, `enabling`.
pub struct SimCardStatus {
    pub value: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimCard {
    pub id: SimCardId,
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub iccid: Option<String>,
    #[serde(default)]
    pub imsi: Option<String>,
    #[serde(default)]
    pub msisdn: Option<String>,
    #[serde(default)]
    pub status: Option<SimCardStatus>,
    #[serde(default)]
    pub sim_card_group_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Asynchronous enable/disable request; `status` settles once the network confirms.
pub struct SimCardAction {
    pub id: String,
    #[serde(default)]
    pub record_type: Option<String>,
    pub sim_card_id: SimCardId,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub status: Option<SimCardStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

resource_handles!(
    /// `/sim_cards`: wireless SIMs and their activation state.
    SimCards,
    SimCardsRaw
);

impl SimCards<'_> {
    pub async fn list(&self, params: &SimCardListParams) -> Result<Page<SimCard>, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }

    pub async fn retrieve(&self, id: &SimCardId) -> Result<SimCard, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn update(
        &self,
        id: &SimCardId,
        params: &SimCardUpdateParams,
    ) -> Result<SimCard, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .update(id, params)
            .await?
            .into_inner())
    }

    pub async fn delete(&self, id: &SimCardId) -> Result<SimCard, TelnyxError> {
        Ok(self
            .with_raw_response()
            .delete(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn enable(&self, id: &SimCardId) -> Result<SimCardAction, TelnyxError> {
        Ok(self
            .with_raw_response()
            .enable(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn disable(&self, id: &SimCardId) -> Result<SimCardAction, TelnyxError> {
        Ok(self
            .with_raw_response()
            .disable(id, RequestParams::new())
            .await?
            .into_inner())
    }
}

impl SimCardsRaw<'_> {
    pub async fn list(&self, params: RequestParams) -> Result<RawResponse<Page<SimCard>>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }

    pub async fn retrieve(
        &self,
        id: &SimCardId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<SimCard>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn update(
        &self,
        id: &SimCardId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<SimCard>>, TelnyxError> {
        self.client
            .request(HttpMethod::Patch, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn delete(
        &self,
        id: &SimCardId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<SimCard>>, TelnyxError> {
        self.client
            .request(HttpMethod::Delete, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn enable(
        &self,
        id: &SimCardId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<SimCardAction>>, TelnyxError> {
        self.client
            .request(HttpMethod::Post, &[PATH, id.as_str(), ACTIONS, "enable"], params)
            .await
    }

    pub async fn disable(
        &self,
        id: &SimCardId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<SimCardAction>>, TelnyxError> {
        self.client
            .request(HttpMethod::Post, &[PATH, id.as_str(), ACTIONS, "disable"], params)
            .await
    }
}
