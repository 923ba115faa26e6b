use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_hasher(jwt_secret, PasswordHasher::new())
    }

    /// Create an authenticator around an existing password hasher.
    pub fn with_hasher(jwt_secret: &[u8], password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - JWT claims to encode in token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.encode(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Generate JWT token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `JwtError` - Token expired, not yet active, or failed validation
    pub fn validate_token<T: for<'de> serde::Deserialize<'de>>(
        &self,
        token: &str,
    ) -> Result<T, JwtError> {
        self.jwt_handler.decode(token)
    }
}
