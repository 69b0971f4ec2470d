use dusupay::{Config, Params, Transport, TransportError};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{any, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Answers with whatever body it was sent.
struct Echo;

impl Respond for Echo {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(request.body.clone(), "application/json")
    }
}

/// Answers with the query string it was sent.
struct EchoQuery;

impl Respond for EchoQuery {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_string(request.url.query().unwrap_or_default())
    }
}

fn transport(server: &MockServer, config: Config) -> Transport {
    Transport::new(Arc::new(config.with_uri(server.uri())), reqwest::Client::new())
}

fn config() -> Config {
    Config::sandbox("PublicKey", "SecretKey")
}

#[tokio::test]
async fn get_puts_auth_in_query_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foo"))
        .and(query_param("api_key", "PublicKey"))
        .and(query_param("foo", "bar"))
        .and(header("secret-key", "SecretKey"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport(&server, config());
    let query = Params::new().with("foo", "bar");
    let response = transport.get("foo", Some(&query)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");

    let received = server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("api_key=PublicKey&foo=bar")
    );
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn post_puts_auth_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/foo"))
        .and(header("secret-key", "SecretKey"))
        .and(body_partial_json(serde_json::json!({ "api_key": "PublicKey" })))
        .respond_with(Echo)
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport(&server, config());
    let body = Params::new().with("foo", "bar").with("amount", 100_i64);
    let response = transport.post("foo", Some(&body), None).await.unwrap();

    let echoed: Value = response.json().await.unwrap();
    assert_eq!(
        echoed,
        serde_json::json!({ "amount": 100, "api_key": "PublicKey", "foo": "bar" })
    );

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn error_statuses_are_returned_without_retry() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport(&server, config());
    let response = transport.get("foo", None).await.unwrap();
    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "boom");
}

#[tokio::test]
async fn configured_timeout_aborts_the_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let transport = transport(&server, config().with_timeout(Duration::from_millis(100)));
    let err = transport.get("slow", None).await.unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {err}");
}

#[tokio::test]
async fn dropping_the_future_cancels_the_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let transport = transport(&server, config());
    let outcome = tokio::time::timeout(Duration::from_millis(100), transport.get("slow", None)).await;
    assert!(outcome.is_err());
}

#[tokio::test]
async fn invalid_method_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let transport = transport(&server, config());
    let err = transport
        .send_request("GE T", "foo", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Build(_)));
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn invalid_config_is_a_build_error() {
    let server = MockServer::start().await;
    let transport = Transport::new(
        Arc::new(Config::sandbox("", "SecretKey").with_uri(server.uri())),
        reqwest::Client::new(),
    );
    let err = transport.get("foo", None).await.unwrap_err();
    assert!(matches!(err, TransportError::Build(_)));
    assert!(err.to_string().contains("public_key"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_transport_keeps_concurrent_calls_apart() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/concurrent"))
        .and(header("secret-key", "SecretKey"))
        .respond_with(EchoQuery)
        .expect(32)
        .mount(&server)
        .await;

    let transport = Arc::new(transport(&server, config()));
    let handles: Vec<_> = (0..32_i64)
        .map(|n| {
            let transport = Arc::clone(&transport);
            tokio::spawn(async move {
                let query = Params::new().with("n", n).with("ref", format!("ref-{n}"));
                let response = transport.get("concurrent", Some(&query)).await.unwrap();
                (n, response.text().await.unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (n, echoed) = handle.await.unwrap();
        assert_eq!(echoed, format!("api_key=PublicKey&n={n}&ref=ref-{n}"));
    }

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 32);
    for request in &received {
        let n = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "n")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(
            request.url.query(),
            Some(format!("api_key=PublicKey&n={n}&ref=ref-{n}").as_str())
        );
    }
}
