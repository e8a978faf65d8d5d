//! UserVault API server entry point

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use uv_api::app::{create_app, AppState};
use uv_core::services::auth::{AuthService, AuthServiceConfig};
use uv_core::services::mail::MailTemplates;
use uv_core::services::password::PasswordEncoder;
use uv_core::services::token::{TokenService, TokenServiceConfig};
use uv_infra::database::{DatabasePool, MySqlUserRepository};
use uv_infra::mail::create_mailer;
use uv_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    info!(environment = %config.environment, "Starting UserVault API server");

    if config.auth.is_using_default_secret() && !config.environment.is_development() {
        warn!("JWT_SECRET is not set; tokens are signed with the built-in development secret");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.pool().clone()));
    let mailer = Arc::new(create_mailer(&config.mail));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        mailer,
        Arc::clone(&token_service),
        PasswordEncoder::default(),
        MailTemplates::new(config.mail.template_dir.clone()),
        AuthServiceConfig::from(&config.mail),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
    });

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "HTTP server listening");

    HttpServer::new(move || create_app(app_state.clone(), Arc::clone(&token_service)))
        .bind(&bind_address)?
        .run()
        .await
}
