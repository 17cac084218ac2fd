use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repofolio::{AppState, Config, GithubClient, handlers};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "repofolio"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repofolio=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    info!(
        "Starting repofolio server on {}:{}",
        config.host, config.port
    );

    let github = GithubClient::new(&config.github_api_url, config.github_token.clone())
        .expect("Failed to create GitHub client");

    if config.github_token.is_none() {
        tracing::warn!("GITHUB_TOKEN not set; anonymous GitHub rate limits apply");
    }

    let app_state = web::Data::new(AppState {
        config: config.clone(),
        github,
    });

    let server_addr = format!("{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .route("/health", web::get().to(health_check))
            .service(web::scope("/v1").configure(handlers::configure_showcase_routes))
    })
    .bind(&server_addr)?
    .run()
    .await
}
