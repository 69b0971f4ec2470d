use crate::config::{Config, ConfigError};
use crate::models::params::{Params, ParamsError};
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// Query/body field carrying the public key.
pub const API_KEY_PARAM: &str = "api_key";
/// Header carrying the secret key.
pub const SECRET_KEY_HEADER: &str = "secret-key";

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build uri: {0}")]
    Uri(#[from] url::ParseError),

    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] ParamsError),

    #[error("invalid http method {0:?}")]
    Method(String),

    #[error("failed to build headers: {0}")]
    Header(#[from] InvalidHeaderValue),
}

/// Turns a method, path, query and body into an authenticated request.
///
/// Holds only the shared [`Config`]; every call works on its own inputs.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: Arc<Config>,
}

impl RequestBuilder {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URI with `path` as its absolute path and `query` encoded in key
    /// order, so equal params always give byte-identical URIs.
    pub fn build_uri(&self, path: &str, query: Option<&Params>) -> Result<Url, RequestError> {
        let mut uri = Url::parse(&self.config.uri)?;
        uri.set_path(&format!("/{}", path.trim_start_matches('/')));
        uri.set_query(None);

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let mut pairs = uri.query_pairs_mut();
            for (key, value) in query.sorted() {
                pairs.append_pair(key, &value.to_string());
            }
        }
        Ok(uri)
    }

    /// Always exactly the JSON content type and the secret key.
    pub fn build_headers(&self) -> Result<HeaderMap, RequestError> {
        let mut secret = HeaderValue::from_str(&self.config.secret_key)?;
        secret.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(SECRET_KEY_HEADER, secret);
        Ok(headers)
    }

    /// Copy of `params` with the public key added under `api_key`.
    pub fn build_auth_params(&self, params: Option<&Params>) -> Params {
        let mut params = params.cloned().unwrap_or_default();
        params.insert(API_KEY_PARAM, self.config.public_key.as_str());
        params
    }

    pub fn build_body(&self, data: &Params) -> Result<Vec<u8>, RequestError> {
        let object = data.to_json_object()?;
        serde_json::to_vec(&object)
            .map_err(|e| RequestError::Serialization(ParamsError::Json(e.to_string())))
    }

    /// Builds the request for one API call.
    ///
    /// GET (and any other non-POST method) carries the public key in the
    /// query and never sends a body. POST carries it in the JSON body; a
    /// query, if given, still goes on the URI.
    pub fn build_request(
        &self,
        method: &str,
        path: &str,
        query: Option<&Params>,
        body: Option<&Params>,
    ) -> Result<Request, RequestError> {
        self.config.validate()?;

        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| RequestError::Method(method.to_string()))?;

        let (uri, payload) = if method == Method::POST {
            let body = self.build_auth_params(body);
            let payload = self.build_body(&body)?;
            (self.build_uri(path, query)?, Some(payload))
        } else {
            let query = self.build_auth_params(query);
            (self.build_uri(path, Some(&query))?, None)
        };

        let mut request = Request::new(method, uri);
        *request.headers_mut() = self.build_headers()?;
        *request.timeout_mut() = self.config.timeout;
        if let Some(payload) = payload {
            *request.body_mut() = Some(payload.into());
        }
        Ok(request)
    }
}
