use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::PublicUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::InternalErrorReport;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity resolved by [`authenticate`], stored in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub PublicUser);

/// Resolves the bearer token to a live identity or rejects with 401.
///
/// Checks run in order: header present, `Bearer ` prefix, non-blank token,
/// then verification against the store. Nothing is cached between requests.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_string();

    let user = state
        .auth_service
        .verify_token(&token)
        .await
        .map_err(|e| {
            tracing::warn!(error = ?e, "Token verification failed");
            rejection_for(&e)
        })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(ApiError::Unauthenticated {
            code: "MISSING_TOKEN",
            message: "Token de autenticação não fornecido",
        })?;

    let invalid_format = ApiError::Unauthenticated {
        code: "INVALID_TOKEN_FORMAT",
        message: "Formato de token inválido. Use: Bearer <token>",
    };

    let token = auth_header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(invalid_format)?;

    if token.trim().is_empty() {
        return Err(ApiError::Unauthenticated {
            code: "EMPTY_TOKEN",
            message: "Token vazio",
        });
    }

    Ok(token)
}

fn rejection_for(err: &AuthError) -> ApiError {
    let (code, message) = match err {
        AuthError::TokenExpired => ("TOKEN_EXPIRED", "Token expirado. Faça login novamente."),
        AuthError::TokenInvalid(_) => (
            "INVALID_TOKEN",
            "Token inválido. Verifique o token fornecido.",
        ),
        AuthError::TokenNotYetActive => (
            "TOKEN_NOT_ACTIVE",
            "Token não ativo. Aguarde a data de ativação.",
        ),
        AuthError::UserNotFound => (
            "USER_NOT_FOUND",
            "Usuário associado ao token não encontrado.",
        ),
        AuthError::DuplicateUsername(_)
        | AuthError::DuplicateEmail(_)
        | AuthError::InvalidCredentials
        | AuthError::Store(_)
        | AuthError::Internal(_) => (
            "AUTH_ERROR",
            "Erro de autenticação. Token inválido ou expirado.",
        ),
    };

    ApiError::Unauthenticated { code, message }
}

/// Admits only admins. Must run after [`authenticate`]; never reads tokens.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    let is_admin = req
        .extensions()
        .get::<CurrentUser>()
        .is_some_and(|CurrentUser(user)| user.is_admin());

    if !is_admin {
        return Err(ApiError::Forbidden(
            "Acesso negado. Apenas administradores.".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

/// Adds the internal message to 500 bodies. Installed only in development.
pub async fn expose_error_details(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    match response.extensions().get::<InternalErrorReport>() {
        Some(report) => {
            let body = report.body(true);
            (response.status(), Json(body)).into_response()
        }
        None => response,
    }
}
