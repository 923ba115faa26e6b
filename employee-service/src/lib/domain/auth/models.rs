use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::PublicUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::Username;

/// Lifetime of every issued session token.
pub const SESSION_LIFETIME_HOURS: i64 = 24;

/// Command to register a new user with validated fields.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
    /// Defaults to [`Role::User`] when absent.
    pub role: Option<Role>,
}

impl RegisterUserCommand {
    pub fn new(
        username: Username,
        email: EmailAddress,
        password: Password,
        role: Option<Role>,
    ) -> Self {
        Self {
            username,
            email,
            password,
            role,
        }
    }
}

/// Raw login credentials.
///
/// The username is not validated up front so malformed and unknown usernames
/// fail the same way.
#[derive(Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Successful login: a signed session token and the identity it names.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: PublicUser,
}
