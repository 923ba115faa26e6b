use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginResult;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::SESSION_LIFETIME_HOURS;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::PublicUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::ports::UserRepository;

/// Authentication core: registration, login and token verification.
///
/// Holds no per-user state. Every call goes to the injected store, and hashing
/// runs on the blocking pool so it never stalls the async workers.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hasher and token codec
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: Password) -> Result<String, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.as_str()))
            .await
            .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<PublicUser, AuthError> {
        let (by_username, by_email) = futures::try_join!(
            self.repository.find_by_username(&command.username),
            self.repository.find_by_email(&command.email),
        )?;

        if by_username.is_some() {
            return Err(AuthError::DuplicateUsername(command.username.to_string()));
        }
        if by_email.is_some() {
            return Err(AuthError::DuplicateEmail(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
                role: command.role.unwrap_or_default(),
            })
            .await?;

        Ok(user.into())
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginResult, AuthError> {
        // Usernames are matched exactly as sent; padded input is a different name.
        let username = Username::new(command.username.clone())
            .ok()
            .filter(|username| username.as_str() == command.username)
            .ok_or(AuthError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let claims = Claims::for_user(
            user.id,
            user.username.as_str(),
            user.role.as_str(),
            Duration::hours(SESSION_LIFETIME_HOURS),
        );

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.password_hash.clone();
        let password = command.password;

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &claims)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            AuthenticationError::PasswordError(err) => {
                AuthError::Internal(format!("Password verification failed: {}", err))
            }
            AuthenticationError::JwtError(err) => {
                AuthError::Internal(format!("Token generation failed: {}", err))
            }
        })?;

        Ok(LoginResult {
            token: result.access_token,
            user: user.into(),
        })
    }

    async fn verify_token(&self, token: &str) -> Result<PublicUser, AuthError> {
        let claims: Claims = self.authenticator.validate_token(token)?;

        let user_id = UserId::from_string(&claims.user_id)
            .map_err(|e| AuthError::TokenInvalid(e.to_string()))?;

        // Claims are only used to locate the subject; role and profile come
        // from the store so changes after issuance take effect immediately.
        self.repository
            .find_by_id(&user_id)
            .await?
            .map(PublicUser::from)
            .ok_or(AuthError::UserNotFound)
    }

    async fn ensure_admin(
        &self,
        command: RegisterUserCommand,
    ) -> Result<Option<PublicUser>, AuthError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Ok(None);
        }

        let password_hash = self.hash_password(command.password).await?;

        let admin = self
            .repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
                role: Role::Admin,
            })
            .await?;

        Ok(Some(admin.into()))
    }
}
