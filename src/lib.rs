//! Client for the DusuPay payments API.
//!
//! [`Client`] covers collections, payouts, refunds, payment options, banks,
//! balances and webhook re-delivery. [`SignatureValidator`] checks the
//! signatures on inbound webhooks, and [`api::webhook_controller`] wires that
//! into an actix-web receiver.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
pub mod services;

pub use client::Client;
pub use config::{Config, ConfigError, PRODUCTION_API_URL, SANDBOX_API_URL};
pub use error::DusupayError;
pub use models::common::{CountryCode, CurrencyCode, TransactionMethod, TransactionStatus, TransactionType};
pub use models::params::{ParamValue, Params};
pub use models::responses::{Envelope, ResponseData};
pub use models::webhooks::{CollectionWebhook, IncomingWebhook, PayoutWebhook, RefundWebhook, Webhook};
pub use resources::ApiResult;
pub use services::crypto::{SignatureError, SignatureValidator};
pub use services::envelope::{decode_envelope, RawResponse};
pub use services::request_builder::RequestBuilder;
pub use services::transport::{Transport, TransportError};
