use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::RoleError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// Stored user record.
///
/// Carries the password hash, so it never leaves the domain layer. Anything
/// returned to callers goes through [`PublicUser`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User identity without credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl PublicUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username is 3-30 characters of ASCII letters, digits and underscore.
/// Surrounding whitespace is trimmed before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 30;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is blank
    /// * `InvalidLength` - Username outside 3..=30 characters
    /// * `InvalidCharacters` - Contains characters other than `[A-Za-z0-9_]`
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }

        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            Ok(username)
        } else {
            Err(UsernameError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Parsed with an RFC 5322 parser, then required to end in an alphabetic
/// top-level domain of at least two letters. Stored trimmed and lower-cased so
/// uniqueness checks are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Empty` - Email is blank
    /// * `InvalidFormat` - Email is not a routable address
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        let parsed = email_address::EmailAddress::from_str(&email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        if !has_alphabetic_tld(parsed.domain()) {
            return Err(EmailError::InvalidFormat(format!(
                "missing top-level domain in '{}'",
                parsed.domain()
            )));
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub(crate) fn has_alphabetic_tld(domain: &str) -> bool {
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// Plaintext password accepted at registration.
///
/// 8-128 characters with at least one lowercase letter, one uppercase letter,
/// one digit and one of `@$!%*?&`. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 128;
    const SPECIAL_CHARACTERS: &'static str = "@$!%*?&";

    /// Validate a plaintext password against the registration policy.
    ///
    /// # Errors
    /// * `Empty` - Password is empty
    /// * `InvalidLength` - Outside 8..=128 characters
    /// * `MissingCharacterClass` - A required character class is absent
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        let length = password.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(PasswordPolicyError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password
            .chars()
            .any(|c| Self::SPECIAL_CHARACTERS.contains(c));

        if has_lower && has_upper && has_digit && has_special {
            Ok(Self(password))
        } else {
            Err(PasswordPolicyError::MissingCharacterClass)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Access role of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate record handed to the store; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
}
