//! Inbound webhook payloads and their canonical signed form.
//!
//! DusuPay signs `"{id}:{internal_reference}:{transaction_status}:{callback_url}"`
//! rather than the JSON body, so each payload exposes the three fields that
//! go into that string. The set of payloads is closed: [`IncomingWebhook`] is
//! sealed and [`Webhook`] enumerates every variant.

use super::responses::ResponseData;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod sealed {
    pub trait Sealed {}
}

/// A webhook payload that can be signature-checked.
pub trait IncomingWebhook: sealed::Sealed {
    fn id(&self) -> i64;
    fn internal_reference(&self) -> &str;
    fn transaction_status(&self) -> &str;

    /// The exact string the sender signed for delivery to `callback_url`.
    fn build_payload_string(&self, callback_url: &str) -> String {
        format!(
            "{}:{}:{}:{}",
            self.id(),
            self.internal_reference(),
            self.transaction_status(),
            callback_url
        )
    }
}

macro_rules! incoming_webhook {
    ($($ty:ty),+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl IncomingWebhook for $ty {
                fn id(&self) -> i64 {
                    self.id
                }

                fn internal_reference(&self) -> &str {
                    &self.internal_reference
                }

                fn transaction_status(&self) -> &str {
                    &self.transaction_status
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollectionWebhook {
    pub id: i64,
    pub request_amount: f64,
    pub request_currency: String,
    pub account_amount: f64,
    pub account_currency: String,
    pub transaction_fee: f64,
    pub total_credit: f64,
    pub customer_charged: bool,
    pub provider_id: String,
    pub merchant_reference: String,
    pub internal_reference: String,
    pub transaction_status: String,
    pub transaction_type: String,
    pub message: String,
    pub account_number: String,
    pub account_name: String,
    pub institution_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PayoutWebhook {
    pub id: i64,
    pub request_amount: f64,
    pub request_currency: String,
    pub account_amount: f64,
    pub account_currency: String,
    pub transaction_fee: f64,
    pub total_debit: f64,
    pub provider_id: String,
    pub merchant_reference: String,
    pub internal_reference: String,
    pub transaction_status: String,
    pub transaction_type: String,
    pub message: String,
    pub account_number: String,
    pub account_name: String,
    pub institution_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RefundWebhook {
    pub id: i64,
    pub refund_amount: f64,
    pub refund_currency: String,
    pub transaction_fee: f64,
    pub total_debit: f64,
    pub provider_id: String,
    pub collection_reference: String,
    pub internal_reference: String,
    pub transaction_type: String,
    pub transaction_status: String,
    pub account_number: String,
    pub message: String,
}

incoming_webhook!(CollectionWebhook, PayoutWebhook, RefundWebhook);

#[derive(Error, Debug)]
pub enum WebhookDecodeError {
    #[error("invalid webhook body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown webhook transaction type {0:?}")]
    UnknownType(String),
}

/// Any webhook DusuPay delivers.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Webhook {
    Collection(CollectionWebhook),
    Payout(PayoutWebhook),
    Refund(RefundWebhook),
}

#[derive(Deserialize)]
struct TypeProbe {
    #[serde(default)]
    transaction_type: String,
}

impl Webhook {
    /// Decodes a raw webhook body, picking the variant from its
    /// `transaction_type` field.
    pub fn from_slice(body: &[u8]) -> Result<Self, WebhookDecodeError> {
        let probe: TypeProbe = serde_json::from_slice(body)?;
        match probe.transaction_type.to_ascii_lowercase().as_str() {
            "collection" => Ok(Self::Collection(serde_json::from_slice(body)?)),
            "payout" => Ok(Self::Payout(serde_json::from_slice(body)?)),
            "refund" => Ok(Self::Refund(serde_json::from_slice(body)?)),
            _ => Err(WebhookDecodeError::UnknownType(probe.transaction_type)),
        }
    }

    fn inner(&self) -> &dyn IncomingWebhook {
        match self {
            Self::Collection(w) => w,
            Self::Payout(w) => w,
            Self::Refund(w) => w,
        }
    }
}

impl sealed::Sealed for Webhook {}

impl IncomingWebhook for Webhook {
    fn id(&self) -> i64 {
        self.inner().id()
    }

    fn internal_reference(&self) -> &str {
        self.inner().internal_reference()
    }

    fn transaction_status(&self) -> &str {
        self.inner().transaction_status()
    }
}

/// Data of a `send-callback` response: the payload that was re-sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebhookResponseData {
    pub payload: Option<WebhookResponsePayload>,
}

impl ResponseData for WebhookResponseData {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebhookResponsePayload {
    pub id: i64,
    pub request_amount: f64,
    pub request_currency: String,
    pub account_amount: f64,
    pub account_currency: String,
    pub transaction_fee: f64,
    pub provider_id: String,
    pub merchant_reference: String,
    pub internal_reference: String,
    pub transaction_status: String,
    pub transaction_type: String,
    pub message: String,
}
