use super::{ApiResult, Resource};
use crate::error::DusupayError;
use crate::models::requests::{BanksBranchesFilter, BanksFilter};
use crate::models::transactions::{Bank, BankBranch};
use reqwest::Method;

const OP_LIST: &str = "BanksResource.list";
const OP_LIST_BRANCHES: &str = "BanksResource.list_branches";

#[derive(Debug, Clone)]
pub struct BanksResource {
    resource: Resource,
}

impl BanksResource {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub async fn list(&self, filter: &BanksFilter) -> ApiResult<Vec<Bank>> {
        let path = format!("v1/payment-options/{}", filter.build_path());
        self.resource
            .execute(OP_LIST, Method::GET, &path, None, None)
            .await
    }

    pub async fn list_branches(&self, filter: &BanksBranchesFilter) -> ApiResult<Vec<BankBranch>> {
        filter.validate().map_err(|source| DusupayError::Validation {
            op: OP_LIST_BRANCHES,
            source,
        })?;
        let path = format!("v1/bank/{}", filter.build_path());
        self.resource
            .execute(OP_LIST_BRANCHES, Method::GET, &path, None, None)
            .await
    }
}
