use crate::models::responses::ApiResponse;
use crate::models::webhooks::{IncomingWebhook, Webhook};
use crate::services::crypto::{SignatureError, SignatureValidator};
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use log::{error, info, warn};
use std::sync::Arc;

/// Header DusuPay puts the base64 signature in.
pub const SIGNATURE_HEADER: &str = "dusupay-signature";

/// Shared state for the receiver: the validator and the callback URL that
/// was registered with DusuPay (it is part of the signed string).
#[derive(Debug, Clone)]
pub struct WebhookState {
    pub validator: Arc<SignatureValidator>,
    pub callback_url: String,
}

impl WebhookState {
    pub fn new(validator: SignatureValidator, callback_url: impl Into<String>) -> Self {
        Self {
            validator: Arc::new(validator),
            callback_url: callback_url.into(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/webhooks", web::post().to(receive));
}

fn reject(status: actix_web::http::StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()> {
        success: false,
        data: None,
        error: Some(message.to_string()),
    })
}

pub async fn receive(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<WebhookState>,
) -> ActixResult<HttpResponse> {
    use actix_web::http::StatusCode;

    let signature = match req
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(signature) => signature.to_string(),
        None => {
            warn!("Webhook received without {} header", SIGNATURE_HEADER);
            return Ok(reject(StatusCode::UNAUTHORIZED, "Missing webhook signature"));
        }
    };

    let webhook = match Webhook::from_slice(&body) {
        Ok(webhook) => webhook,
        Err(e) => {
            error!("Error decoding webhook: {}", e);
            return Ok(reject(StatusCode::BAD_REQUEST, &e.to_string()));
        }
    };

    match state
        .validator
        .validate_signature(&webhook, &state.callback_url, &signature)
    {
        Ok(()) => {
            info!(
                "Accepted webhook {} ({}) with status {}",
                webhook.id(),
                webhook.internal_reference(),
                webhook.transaction_status()
            );
            Ok(HttpResponse::Ok().json(ApiResponse {
                success: true,
                data: Some(webhook),
                error: None,
            }))
        }
        Err(e @ SignatureError::SignatureEncoding(_)) => {
            warn!("Malformed webhook signature for {}: {}", webhook.internal_reference(), e);
            Ok(reject(StatusCode::BAD_REQUEST, &e.to_string()))
        }
        Err(e) => {
            warn!("Rejected webhook {}: {}", webhook.internal_reference(), e);
            Ok(reject(StatusCode::UNAUTHORIZED, &e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use openssl::hash::MessageDigest;
    use openssl::pkey::{PKey, Private};
    use openssl::rsa::Rsa;
    use openssl::sign::Signer;
    use serde_json::Value;

    const CALLBACK_URL: &str = "https://merchant.example.com/dusupay/callback";
    const BODY: &str = r#"{"id":226,"internal_reference":"DUSUPAY405GZM1G5JXGA71IK","transaction_status":"COMPLETED","transaction_type":"collection","request_amount":0.2}"#;

    fn fixture() -> (PKey<Private>, WebhookState) {
        let key = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
        let validator = SignatureValidator::from_pem(&key.public_key_to_pem().unwrap()).unwrap();
        (key, WebhookState::new(validator, CALLBACK_URL))
    }

    fn sign(key: &PKey<Private>, message: &str) -> String {
        let mut signer = Signer::new(MessageDigest::sha512(), key).unwrap();
        BASE64.encode(signer.sign_oneshot_to_vec(message.as_bytes()).unwrap())
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(App::new().app_data(web::Data::new($state)).configure(configure)).await
        };
    }

    #[actix_web::test]
    async fn accepts_signed_webhook() {
        let (key, state) = fixture();
        let signature = sign(
            &key,
            &format!("226:DUSUPAY405GZM1G5JXGA71IK:COMPLETED:{}", CALLBACK_URL),
        );
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/webhooks")
            .insert_header((SIGNATURE_HEADER, signature))
            .set_payload(BODY)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 226);
    }

    #[actix_web::test]
    async fn rejects_missing_signature() {
        let (_, state) = fixture();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/webhooks")
            .set_payload(BODY)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn rejects_signature_for_other_url() {
        let (key, state) = fixture();
        let signature = sign(
            &key,
            "226:DUSUPAY405GZM1G5JXGA71IK:COMPLETED:https://attacker.example.com/",
        );
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/webhooks")
            .insert_header((SIGNATURE_HEADER, signature))
            .set_payload(BODY)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn malformed_signature_is_a_bad_request() {
        let (_, state) = fixture();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/webhooks")
            .insert_header((SIGNATURE_HEADER, "qwerty"))
            .set_payload(BODY)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_body_is_a_bad_request() {
        let (_, state) = fixture();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/webhooks")
            .insert_header((SIGNATURE_HEADER, "c2ln"))
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
