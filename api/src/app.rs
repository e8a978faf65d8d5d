//! Application state and factory
//!
//! Holds the shared service instances and builds the actix-web
//! application with all routes and middleware attached.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use uv_core::repositories::UserRepository;
use uv_core::services::auth::AuthService;
use uv_core::services::mail::MailerTrait;
use uv_core::services::token::TokenService;
use uv_shared::types::response::{ApiResponse, ResponseCode};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    change_password::change_password, forgot_password::forgot_password, login::login,
    register::register, reset_password::reset_password, verify_email::verify_email,
};

/// Application state that holds shared services
pub struct AppState<U, M>
where
    U: UserRepository,
    M: MailerTrait,
{
    pub auth_service: Arc<AuthService<U, M>>,
}

/// Create and configure the application with all dependencies
///
/// The token service travels in its own app data slot so the session
/// guard can reach it without knowing the state's type parameters.
pub fn create_app<U, M>(
    app_state: web::Data<AppState<U, M>>,
    token_service: Arc<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    M: MailerTrait + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(token_service))
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, M>))
                    .route("/verify-email/{token}", web::get().to(verify_email::<U, M>))
                    .route("/login", web::post().to(login::<U, M>))
                    .route("/change-password", web::post().to(change_password::<U, M>))
                    .route("/forgot-password", web::post().to(forgot_password::<U, M>))
                    .route("/reset-password", web::post().to(reset_password::<U, M>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "uservault-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure(
        ResponseCode::InvalidDetails,
        "The requested resource was not found",
    ))
}
