use super::{ApiResult, Resource};
use crate::error::DusupayError;
use crate::models::requests::CollectionRequest;
use crate::models::transactions::CollectionResponseData;
use reqwest::Method;

const OP_CREATE: &str = "CollectionsResource.create";

#[derive(Debug, Clone)]
pub struct CollectionsResource {
    resource: Resource,
}

impl CollectionsResource {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Starts a collection (customer to merchant payment).
    pub async fn create(&self, request: &CollectionRequest) -> ApiResult<CollectionResponseData> {
        request
            .validate()
            .map_err(|source| DusupayError::Validation { op: OP_CREATE, source })?;
        let body = Resource::body_params(OP_CREATE, request)?;
        self.resource
            .execute(OP_CREATE, Method::POST, "v1/collections", None, Some(&body))
            .await
    }
}
