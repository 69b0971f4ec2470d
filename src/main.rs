use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use dusupay::api::webhook_controller::{self, WebhookState};
use dusupay::SignatureValidator;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    // Load .env file
    dotenv().ok();
    let public_key_path = std::env::var("DUSUPAY_WEBHOOK_PUBLIC_KEY_PATH")
        .expect("DUSUPAY_WEBHOOK_PUBLIC_KEY_PATH environment variable is required");
    let callback_url = std::env::var("DUSUPAY_CALLBACK_URL")
        .expect("DUSUPAY_CALLBACK_URL environment variable is required");

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("PORT must be a number");

    let validator = SignatureValidator::from_pem_file(&public_key_path)
        .expect("Failed to load DusuPay webhook public key");
    let state = web::Data::new(WebhookState::new(validator, callback_url));

    info!("Starting webhook receiver at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(webhook_controller::configure)
            .route(
                "/health",
                web::get().to(|| async { HttpResponse::Ok().body("Service is running") }),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
