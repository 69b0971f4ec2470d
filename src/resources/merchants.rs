use super::{ApiResult, Resource};
use crate::models::transactions::Balance;
use reqwest::Method;

const OP_BALANCES: &str = "MerchantsResource.balances";

#[derive(Debug, Clone)]
pub struct MerchantsResource {
    resource: Resource,
}

impl MerchantsResource {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Account balance per currency.
    pub async fn balances(&self) -> ApiResult<Vec<Balance>> {
        self.resource
            .execute(OP_BALANCES, Method::GET, "v1/merchants/balance", None, None)
            .await
    }
}
