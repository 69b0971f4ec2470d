use super::{ApiResult, Resource};
use crate::error::DusupayError;
use crate::models::requests::ValidationError;
use crate::models::webhooks::WebhookResponseData;
use reqwest::Method;

const OP_SEND_CALLBACK: &str = "WebhooksResource.send_callback";

#[derive(Debug, Clone)]
pub struct WebhooksResource {
    resource: Resource,
}

impl WebhooksResource {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Asks DusuPay to deliver the webhook for a transaction again.
    pub async fn send_callback(&self, internal_reference: &str) -> ApiResult<WebhookResponseData> {
        if internal_reference.is_empty() {
            return Err(DusupayError::Validation {
                op: OP_SEND_CALLBACK,
                source: ValidationError("internal_reference"),
            });
        }
        let path = format!("v1/send-callback/{}", internal_reference);
        self.resource
            .execute(OP_SEND_CALLBACK, Method::GET, &path, None, None)
            .await
    }
}
