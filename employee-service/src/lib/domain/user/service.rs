use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::PublicUser;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service for the user directory.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<PublicUser>, UserError> {
        let users = self.repository.list_all().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    async fn get_user(&self, id: &UserId) -> Result<PublicUser, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(PublicUser::from)
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
