use crate::config::ConfigError;
use crate::models::params::ParamsError;
use crate::models::requests::ValidationError;
use crate::models::responses::{Envelope, ResponseData};
use crate::services::envelope::RawResponse;
use crate::services::transport::TransportError;
use std::any::Any;
use thiserror::Error;

/// Errors returned by [`crate::Client`] and its resources.
///
/// Each variant names the resource operation that failed. `Api` and `Decode`
/// keep the raw response so the body can still be inspected, and `Api` also
/// keeps the decoded envelope (see [`DusupayError::envelope`]).
#[derive(Error, Debug)]
pub enum DusupayError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{op}: {source}")]
    Validation {
        op: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{op}: failed to serialize request: {source}")]
    Serialization {
        op: &'static str,
        #[source]
        source: ParamsError,
    },

    #[error("{op}: {source}")]
    Transport {
        op: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("{op}: failed to decode response: {source}")]
    Decode {
        op: &'static str,
        #[source]
        source: serde_json::Error,
        raw: Box<RawResponse>,
    },

    /// The envelope decoded but reported `code >= 300`.
    #[error("{message}")]
    Api {
        code: i64,
        status: String,
        message: String,
        /// The decoded `Envelope<T>` of the failed call.
        envelope: Box<dyn Any + Send + Sync>,
        raw: Box<RawResponse>,
    },
}

impl DusupayError {
    /// The raw response, when one was received.
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Self::Decode { raw, .. } | Self::Api { raw, .. } => Some(&**raw),
            _ => None,
        }
    }

    pub(crate) fn api<T: ResponseData>(envelope: Envelope<T>, raw: RawResponse) -> Self {
        Self::Api {
            code: envelope.code,
            status: envelope.status.clone(),
            message: envelope.message.clone(),
            envelope: Box::new(envelope),
            raw: Box::new(raw),
        }
    }

    /// The decoded envelope of an `Api` error. `T` is the data type of the
    /// operation that failed; any other type gives `None`.
    pub fn envelope<T: ResponseData>(&self) -> Option<&Envelope<T>> {
        match self {
            Self::Api { envelope, .. } => envelope.downcast_ref::<Envelope<T>>(),
            _ => None,
        }
    }

    /// Owned form of [`DusupayError::envelope`].
    pub fn into_envelope<T: ResponseData>(self) -> Option<Envelope<T>> {
        match self {
            Self::Api { envelope, .. } => envelope.downcast::<Envelope<T>>().ok().map(|e| *e),
            _ => None,
        }
    }

    /// The error code the API reported, for `Api` errors.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
