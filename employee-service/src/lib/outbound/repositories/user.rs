use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USER_COLUMNS: &str = "id, username, email, password_hash, role, created_at, updated_at";

/// Credential store backed by the `users` table.
///
/// Username and email uniqueness is enforced by the table constraints.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, UserError> {
        let query = format!("SELECT {} FROM users WHERE {} = $1", USER_COLUMNS, column);

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            role: row.role.parse::<Role>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let now = Utc::now();
        let id = UserId::new();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            "#,
        )
        .bind(id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("users_username_key") {
                        return UserError::UsernameAlreadyExists(
                            user.username.as_str().to_string(),
                        );
                    }
                    if db_err.constraint() == Some("users_email_key") {
                        return UserError::EmailAlreadyExists(user.email.as_str().to_string());
                    }
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        self.find_one("username", username.as_str()).await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        self.find_one("email", email.as_str()).await
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let query = format!(
            "SELECT {} FROM users ORDER BY created_at DESC",
            USER_COLUMNS
        );

        let rows = sqlx::query_as::<_, UserRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(User::try_from).collect()
    }
}
