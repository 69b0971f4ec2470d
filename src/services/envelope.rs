use crate::models::responses::{Envelope, ResponseData};
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};

/// A response whose body has been read in full.
///
/// The body stream of a [`Response`] can be consumed once; this snapshot
/// can be read as often as needed, so the envelope and the raw bytes stay
/// available side by side.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Reads and releases the response body.
    pub async fn read(response: Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, headers, body))
    }

    /// Transport-level status. Not used to classify API success.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn decode<T: ResponseData>(&self) -> Result<Envelope<T>, serde_json::Error> {
        decode_envelope(&self.body)
    }
}

pub fn decode_envelope<T: ResponseData>(bytes: &[u8]) -> Result<Envelope<T>, serde_json::Error> {
    serde_json::from_slice(bytes)
}
