use super::{ApiResult, Resource};
use crate::models::requests::ProvidersFilter;
use crate::models::transactions::Provider;
use reqwest::Method;

const OP_LIST: &str = "ProvidersResource.list";

#[derive(Debug, Clone)]
pub struct ProvidersResource {
    resource: Resource,
}

impl ProvidersResource {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Payment options for a transaction type, method and country.
    pub async fn list(&self, filter: &ProvidersFilter) -> ApiResult<Vec<Provider>> {
        let path = format!("v1/payment-options/{}", filter.build_path());
        self.resource
            .execute(OP_LIST, Method::GET, &path, None, None)
            .await
    }
}
