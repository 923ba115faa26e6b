pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use mockall::mock;

    use super::errors::UserError;
    use super::models::EmailAddress;
    use super::models::NewUser;
    use super::models::User;
    use super::models::UserId;
    use super::models::Username;
    use super::ports::UserRepository;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }
}
