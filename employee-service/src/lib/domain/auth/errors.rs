use auth::JwtError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Failures of the authentication core.
///
/// Display strings are the user-safe messages sent to clients; diagnostic
/// detail is carried in the payload and only reaches the logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username já existe")]
    DuplicateUsername(String),

    #[error("Email já existe")]
    DuplicateEmail(String),

    /// Unknown username and wrong password are deliberately indistinguishable.
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token expirado")]
    TokenExpired,

    #[error("Token inválido")]
    TokenInvalid(String),

    #[error("Token não ativo")]
    TokenNotYetActive,

    /// Token signature is valid but its subject no longer exists.
    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Credential store error: {0}")]
    Store(String),

    #[error("Internal authentication error: {0}")]
    Internal(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameAlreadyExists(username) => AuthError::DuplicateUsername(username),
            UserError::EmailAlreadyExists(email) => AuthError::DuplicateEmail(email),
            other => AuthError::Store(other.to_string()),
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => AuthError::TokenExpired,
            JwtError::NotYetActive => AuthError::TokenNotYetActive,
            JwtError::Malformed(detail) => AuthError::TokenInvalid(detail),
            JwtError::EncodingFailed(detail) => AuthError::Internal(detail),
        }
    }
}
