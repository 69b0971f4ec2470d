//! Per-endpoint wrappers. Each validates its input, sends it through the
//! shared [`Transport`] and decodes the envelope.

mod banks;
mod collections;
mod merchants;
mod payouts;
mod providers;
mod refunds;
mod webhooks;

pub use banks::BanksResource;
pub use collections::CollectionsResource;
pub use merchants::MerchantsResource;
pub use payouts::PayoutsResource;
pub use providers::ProvidersResource;
pub use refunds::RefundsResource;
pub use webhooks::WebhooksResource;

use crate::error::DusupayError;
use crate::models::params::Params;
use crate::models::responses::{Envelope, ResponseData};
use crate::services::envelope::RawResponse;
use crate::services::request_builder::RequestError;
use crate::services::transport::{Transport, TransportError};
use log::{debug, warn};
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;

/// Decoded envelope plus the raw response it came from.
pub type ApiResult<T> = Result<(Envelope<T>, RawResponse), DusupayError>;

/// State shared by every resource.
#[derive(Debug, Clone)]
pub(crate) struct Resource {
    transport: Arc<Transport>,
}

impl Resource {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub(crate) fn body_params<B: Serialize>(
        op: &'static str,
        body: &B,
    ) -> Result<Params, DusupayError> {
        Params::from_serializable(body)
            .map_err(|source| DusupayError::Serialization { op, source })
    }

    /// Sends one call and classifies the outcome. API-level failures
    /// (`code >= 300`) become [`DusupayError::Api`], which keeps the decoded
    /// envelope.
    pub(crate) async fn execute<T: ResponseData>(
        &self,
        op: &'static str,
        method: Method,
        path: &str,
        query: Option<&Params>,
        body: Option<&Params>,
    ) -> ApiResult<T> {
        let response = self
            .transport
            .send_request(method.as_str(), path, query, body)
            .await
            .map_err(|e| transport_error(op, e))?;

        let raw = RawResponse::read(response)
            .await
            .map_err(|e| DusupayError::Transport { op, source: e.into() })?;

        let envelope = match raw.decode::<T>() {
            Ok(envelope) => envelope,
            Err(source) => {
                warn!("{}: undecodable response (HTTP {})", op, raw.status());
                return Err(DusupayError::Decode {
                    op,
                    source,
                    raw: Box::new(raw),
                });
            }
        };

        if !envelope.is_success() {
            debug!("{}: API returned code {}: {}", op, envelope.code, envelope.message);
            return Err(DusupayError::api(envelope, raw));
        }

        Ok((envelope, raw))
    }
}

// A request that could not be built is a config or serialization problem,
// not a transport one.
fn transport_error(op: &'static str, err: TransportError) -> DusupayError {
    match err {
        TransportError::Build(RequestError::Config(e)) => DusupayError::Config(e),
        TransportError::Build(RequestError::Serialization(source)) => {
            DusupayError::Serialization { op, source }
        }
        source => DusupayError::Transport { op, source },
    }
}
