use super::{ApiResult, Resource};
use crate::error::DusupayError;
use crate::models::requests::PayoutRequest;
use crate::models::transactions::PayoutResponseData;
use reqwest::Method;

const OP_CREATE: &str = "PayoutsResource.create";

#[derive(Debug, Clone)]
pub struct PayoutsResource {
    resource: Resource,
}

impl PayoutsResource {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub async fn create(&self, request: &PayoutRequest) -> ApiResult<PayoutResponseData> {
        request
            .validate()
            .map_err(|source| DusupayError::Validation { op: OP_CREATE, source })?;
        let body = Resource::body_params(OP_CREATE, request)?;
        self.resource
            .execute(OP_CREATE, Method::POST, "v1/payouts", None, Some(&body))
            .await
    }
}
