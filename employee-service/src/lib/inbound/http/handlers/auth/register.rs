use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::Role;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::RoleError;
use crate::user::errors::UsernameError;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            tracing::info!(user_id = %user.id, username = %user.username, "User registered");
            ApiSuccess::new(
                StatusCode::CREATED,
                RegisterResponseData {
                    message: "Usuário criado com sucesso",
                    user: user.into(),
                },
            )
        })
}

/// Missing fields deserialize as empty so they fail validation with a
/// field-specific message.
#[derive(Clone, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("{0}")]
    Username(#[from] UsernameError),

    #[error("{0}")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Password(#[from] PasswordPolicyError),

    #[error("{0}")]
    Role(#[from] RoleError),
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        let role = self.role.map(|role| role.parse::<Role>()).transpose()?;
        Ok(RegisterUserCommand::new(username, email, password, role))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Identity fields sit next to `message` at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: &'static str,
    #[serde(flatten)]
    pub user: UserData,
}
