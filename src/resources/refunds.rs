use super::{ApiResult, Resource};
use crate::error::DusupayError;
use crate::models::requests::RefundRequest;
use crate::models::transactions::RefundResponseData;
use reqwest::Method;

const OP_CREATE: &str = "RefundsResource.create";

#[derive(Debug, Clone)]
pub struct RefundsResource {
    resource: Resource,
}

impl RefundsResource {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Refunds a completed collection, fully or in part.
    pub async fn create(&self, request: &RefundRequest) -> ApiResult<RefundResponseData> {
        request
            .validate()
            .map_err(|source| DusupayError::Validation { op: OP_CREATE, source })?;
        let body = Resource::body_params(OP_CREATE, request)?;
        self.resource
            .execute(OP_CREATE, Method::POST, "v1/refund", None, Some(&body))
            .await
    }
}
