//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::models::CartData,
        users::{
            errors::UsersServiceError,
            models::{SignupDraft, User, UserUuid},
            repository::PgUsersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    #[tracing::instrument(name = "users.service.signup", skip(self, draft), err)]
    async fn signup(&self, draft: SignupDraft) -> Result<User, UsersServiceError> {
        let user = draft.validate()?;

        let mut tx = self.db.begin().await?;

        if self
            .repository
            .find_user_by_email(&mut tx, &user.email)
            .await?
            .is_some()
        {
            return Err(UsersServiceError::AlreadyExists);
        }

        let created = self
            .repository
            .create_user(&mut tx, UserUuid::new(), user, &CartData::empty())
            .await?;

        tx.commit().await?;

        info!(user_uuid = %created.uuid, "created user");

        Ok(created)
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.find_user_by_email(&mut tx, email).await?;

        tx.commit().await?;

        let user = user.ok_or(UsersServiceError::UnknownEmail)?;

        if !user.password.matches(password) {
            return Err(UsersServiceError::WrongPassword);
        }

        Ok(user)
    }

    async fn get_user(&self, user: UserUuid) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.find_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Registers a new user with an all-zero cart. Fails if the email is taken.
    async fn signup(&self, draft: SignupDraft) -> Result<User, UsersServiceError>;

    /// Looks up a user by email and checks the password.
    async fn login(&self, email: &str, password: &str) -> Result<User, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<User, UsersServiceError>;
}
