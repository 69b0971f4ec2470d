use super::request_builder::{RequestBuilder, RequestError};
use crate::config::Config;
use crate::models::params::Params;
use log::debug;
use reqwest::{Client, Method, Response};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to build request: {0}")]
    Build(#[from] RequestError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

/// Sends authenticated requests and hands back the untouched response.
///
/// Nothing here retries. Dropping a returned future aborts the in-flight
/// call; a deadline comes from [`Config::timeout`] or from the caller
/// wrapping the future in `tokio::time::timeout`.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    builder: RequestBuilder,
}

impl Transport {
    pub fn new(config: Arc<Config>, http: Client) -> Self {
        Self {
            http,
            builder: RequestBuilder::new(config),
        }
    }

    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Builds and executes one request. The response body is left unread
    /// for the caller to consume.
    pub async fn send_request(
        &self,
        method: &str,
        path: &str,
        query: Option<&Params>,
        body: Option<&Params>,
    ) -> Result<Response, TransportError> {
        let request = self.builder.build_request(method, path, query, body)?;
        debug!("Sending {} request to /{}", request.method(), path.trim_start_matches('/'));

        let response = self.http.execute(request).await?;

        debug!("Received HTTP {} for /{}", response.status(), path.trim_start_matches('/'));
        Ok(response)
    }

    pub async fn get(&self, path: &str, query: Option<&Params>) -> Result<Response, TransportError> {
        self.send_request(Method::GET.as_str(), path, query, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Option<&Params>,
        query: Option<&Params>,
    ) -> Result<Response, TransportError> {
        self.send_request(Method::POST.as_str(), path, query, body).await
    }
}
