use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::PublicUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for read-only user directory operations (administration).
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// List every registered user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<PublicUser>, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<PublicUser, UserError>;
}

/// Persistence operations for user records (the credential store).
///
/// Implementations must enforce username and email uniqueness themselves;
/// callers' existence checks are only a fast path.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user, assigning its id and timestamps.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
