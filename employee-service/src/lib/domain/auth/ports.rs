use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginResult;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::user::models::PublicUser;

/// Port for the authentication core.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken (reported first)
    /// * `DuplicateEmail` - Email is already registered
    /// * `Store` - Credential store failed
    async fn register(&self, command: RegisterUserCommand) -> Result<PublicUser, AuthError>;

    /// Check credentials and issue a 24 hour session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Store` - Credential store failed
    async fn login(&self, command: LoginCommand) -> Result<LoginResult, AuthError>;

    /// Resolve a session token to the identity currently stored for it.
    ///
    /// # Errors
    /// * `TokenExpired` - Token lifetime has elapsed
    /// * `TokenInvalid` - Bad signature or malformed payload
    /// * `TokenNotYetActive` - `nbf` lies in the future
    /// * `UserNotFound` - Subject no longer exists
    /// * `Store` - Credential store failed
    async fn verify_token(&self, token: &str) -> Result<PublicUser, AuthError>;

    /// Create an administrator unless a user with the same username exists.
    ///
    /// # Returns
    /// The created administrator, or `None` when nothing was created
    async fn ensure_admin(
        &self,
        command: RegisterUserCommand,
    ) -> Result<Option<PublicUser>, AuthError>;
}
