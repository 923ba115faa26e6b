use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::auth::register;
use super::handlers::employees::create_employee;
use super::handlers::employees::delete_employee;
use super::handlers::employees::get_employee;
use super::handlers::employees::list_employees;
use super::handlers::employees::update_employee;
use super::handlers::health::health;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::handlers::ApiError;
use super::middleware::authenticate;
use super::middleware::expose_error_details;
use super::middleware::require_admin;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::health::HealthCheckPort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub health_check: Arc<dyn HealthCheckPort>,
}

/// Build the HTTP surface.
///
/// `expose_internal_errors` adds the internal message to 500 bodies and is
/// meant for development only.
pub fn create_router(state: AppState, expose_internal_errors: bool) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/health", get(health));

    // Layers run bottom-up: authenticate first, then the role check.
    let admin_routes = Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:id", get(get_user))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    let employee_routes = Router::new()
        .route(
            "/api/employees",
            get(list_employees).post(create_employee),
        )
        .route(
            "/api/employees/:id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let router = Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .merge(employee_routes)
        .fallback(route_not_found);

    let router = if expose_internal_errors {
        router.layer(middleware::from_fn(expose_error_details))
    } else {
        router
    };

    let router = security_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name, value))
        });

    router
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Hardening headers added to every response unless a handler set them.
fn security_headers() -> Vec<(HeaderName, HeaderValue)> {
    vec![
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'; frame-ancestors 'self'; object-src 'none'"),
        ),
        (
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ),
        (
            HeaderName::from_static("cross-origin-resource-policy"),
            HeaderValue::from_static("same-origin"),
        ),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ),
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::X_DNS_PREFETCH_CONTROL, HeaderValue::from_static("off")),
        (
            HeaderName::from_static("x-download-options"),
            HeaderValue::from_static("noopen"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (
            HeaderName::from_static("x-permitted-cross-domain-policies"),
            HeaderValue::from_static("none"),
        ),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("0")),
    ]
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Rota não encontrada".to_string())
}
