use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UsernameError;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload?;

    // Only presence is checked here; anything else is a credential failure.
    if body.username.trim().is_empty() {
        return Err(ApiError::BadRequest(UsernameError::Empty.to_string()));
    }
    if body.password.is_empty() {
        return Err(ApiError::BadRequest(PasswordPolicyError::Empty.to_string()));
    }

    let result = state
        .auth_service
        .login(LoginCommand {
            username: body.username,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)?;

    tracing::info!(user_id = %result.user.id, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login realizado com sucesso",
            token: result.token,
            user: (&result.user).into(),
        },
    ))
}

#[derive(Clone, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: &'static str,
    pub token: String,
    pub user: UserData,
}
