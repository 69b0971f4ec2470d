use crate::models::webhooks::IncomingWebhook;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::{debug, warn};
use openssl::hash::MessageDigest;
use openssl::pkey::{Id, PKey, Public};
use openssl::rsa::Padding;
use openssl::sign::Verifier;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("Failed to parse public key: {0}")]
    KeyFormat(openssl::error::ErrorStack),

    #[error("Public key must be an RSA key, got {0:?}")]
    KeyType(Id),

    #[error("Failed to read public key: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signature is not valid base64: {0}")]
    SignatureEncoding(#[from] base64::DecodeError),

    #[error("Signature does not match the webhook payload")]
    SignatureMismatch,

    #[error("OpenSSL error: {0}")]
    OpenSslError(#[from] openssl::error::ErrorStack),
}

/// Verifies DusuPay webhook signatures against one RSA public key.
///
/// The parsed key is the only state, so one validator can be shared across
/// threads and reused for every delivery.
#[derive(Clone)]
pub struct SignatureValidator {
    public_key: PKey<Public>,
}

impl SignatureValidator {
    /// Parses a PEM `PUBLIC KEY` (PKIX) block. Only RSA keys are accepted.
    pub fn from_pem(pem: &[u8]) -> Result<Self, SignatureError> {
        let public_key = PKey::public_key_from_pem(pem).map_err(SignatureError::KeyFormat)?;
        if public_key.id() != Id::RSA {
            return Err(SignatureError::KeyType(public_key.id()));
        }

        debug!("Loaded {}-bit RSA webhook public key", public_key.bits());
        Ok(Self { public_key })
    }

    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, SignatureError> {
        let pem = fs::read(path)?;
        Self::from_pem(&pem)
    }

    /// Checks `signature` (base64, RSA PKCS#1 v1.5 over SHA-512) against the
    /// canonical payload string of `webhook` for `callback_url`.
    ///
    /// Undecodable base64 is [`SignatureError::SignatureEncoding`]; a signature
    /// that decodes but does not verify, including one of the wrong length,
    /// is [`SignatureError::SignatureMismatch`].
    pub fn validate_signature<W>(
        &self,
        webhook: &W,
        callback_url: &str,
        signature: &str,
    ) -> Result<(), SignatureError>
    where
        W: IncomingWebhook + ?Sized,
    {
        let payload = webhook.build_payload_string(callback_url);
        let signature = decode_signature(signature)?;

        let mut verifier = Verifier::new(MessageDigest::sha512(), &self.public_key)?;
        verifier.set_rsa_padding(Padding::PKCS1)?;
        verifier.update(payload.as_bytes())?;

        match verifier.verify(&signature) {
            Ok(true) => Ok(()),
            Ok(false) => Err(SignatureError::SignatureMismatch),
            Err(e) => {
                warn!("Webhook signature rejected by OpenSSL: {}", e);
                Err(SignatureError::SignatureMismatch)
            }
        }
    }
}

impl std::fmt::Debug for SignatureValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureValidator")
            .field("bits", &self.public_key.bits())
            .finish()
    }
}

// Signatures arrive MIME-wrapped at 76 columns; line breaks are not part of
// the encoding.
fn decode_signature(signature: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = signature
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    BASE64.decode(compact)
}
