use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::user::models::PublicUser;
use crate::user::errors::UserError;

pub mod auth;
pub mod employees;
pub mod health;
pub mod users;

/// Client-facing text for any failure that is not the caller's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    /// Rejected by the auth gate; `code` tells clients why.
    Unauthenticated {
        code: &'static str,
        message: &'static str,
    },
    Forbidden(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Details of a 500 response, attached to the response extensions so that
/// outer layers can log or expose them.
#[derive(Debug, Clone)]
pub struct InternalErrorReport {
    pub error_id: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl InternalErrorReport {
    fn new(message: String) -> Self {
        let error_id = uuid::Uuid::new_v4().simple().to_string();
        Self {
            error_id,
            timestamp: Utc::now(),
            message,
        }
    }

    pub fn body(&self, expose_message: bool) -> InternalErrorBody {
        InternalErrorBody {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
            error_id: self.error_id.clone(),
            timestamp: self.timestamp,
            message: expose_message.then(|| self.message.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InternalServerError(message) => {
                let report = InternalErrorReport::new(message);
                tracing::error!(
                    error_id = %report.error_id,
                    error = %report.message,
                    "Internal server error"
                );

                let mut response = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(report.body(false)),
                )
                    .into_response();
                response.extensions_mut().insert(report);
                return response;
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, ApiErrorBody::new(message)),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, ApiErrorBody::new(message)),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, ApiErrorBody::new(message))
            }
            ApiError::Unauthenticated { code, message } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: message.to_string(),
                    code: Some(code),
                },
            ),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, ApiErrorBody::new(message)),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUsername(_) | AuthError::DuplicateEmail(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_)
            | AuthError::TokenNotYetActive
            | AuthError::UserNotFound => ApiError::Unauthorized(err.to_string()),
            AuthError::Store(_) | AuthError::Internal(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::UsernameAlreadyExists(_)
            | UserError::EmailAlreadyExists(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidRole(_) => ApiError::BadRequest(err.to_string()),
            UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::InvalidField(_) | EmployeeError::NoUpdates => {
                ApiError::BadRequest(err.to_string())
            }
            EmployeeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EmployeeError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl ApiErrorBody {
    pub fn new(error: String) -> Self {
        Self { error, code: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorBody {
    pub error: String,
    pub error_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Public identity as sent to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&PublicUser> for UserData {
    fn from(user: &PublicUser) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_registration_is_bad_request() {
        let err = ApiError::from(AuthError::DuplicateUsername("alice".to_string()));
        assert_eq!(err, ApiError::BadRequest("Username já existe".to_string()));
    }

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        let err = ApiError::from(AuthError::InvalidCredentials);
        assert_eq!(
            err,
            ApiError::Unauthorized("Credenciais inválidas".to_string())
        );
    }

    #[test]
    fn test_store_fault_is_internal() {
        let err = ApiError::from(AuthError::Store("connection refused".to_string()));
        assert!(matches!(err, ApiError::InternalServerError(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let report = response
            .extensions()
            .get::<InternalErrorReport>()
            .expect("missing error report");
        assert!(report.message.contains("connection refused"));
    }

    #[test]
    fn test_internal_error_body_hides_message_unless_exposed() {
        let report = InternalErrorReport::new("boom".to_string());

        let hidden = serde_json::to_value(report.body(false)).unwrap();
        assert_eq!(hidden["error"], INTERNAL_ERROR_MESSAGE);
        assert_eq!(hidden["errorId"], report.error_id.as_str());
        assert!(hidden.get("message").is_none());

        let exposed = serde_json::to_value(report.body(true)).unwrap();
        assert_eq!(exposed["message"], "boom");
    }

    #[test]
    fn test_employee_errors_map_to_status() {
        assert!(matches!(
            ApiError::from(EmployeeError::NoUpdates),
            ApiError::BadRequest(_)
        ));
        assert_eq!(
            ApiError::from(EmployeeError::NotFound("x".to_string())),
            ApiError::NotFound("Empregado não encontrado ou ID inválido".to_string())
        );
    }

    #[test]
    fn test_unauthenticated_body_carries_code() {
        let body = ApiErrorBody {
            error: "Token vazio".to_string(),
            code: Some("EMPTY_TOKEN"),
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["code"], "EMPTY_TOKEN");

        let plain = serde_json::to_value(ApiErrorBody::new("x".to_string())).unwrap();
        assert!(plain.get("code").is_none());
    }
}
