//! Account service - registration, login and profile management.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{password::DUMMY_HASH, NewUser, Password, UpdateUser, User, UserRole};

use crate::repository::{UserDraft, UserRepository};

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new user; the password is hashed before storage
    async fn register(&self, input: NewUser) -> AppResult<User>;

    /// Check an email/password pair and return the matching user
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Get user by email
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Update profile fields
    async fn update_profile(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AccountService using repository.
pub struct AccountManager {
    repo: Arc<dyn UserRepository>,
}

impl AccountManager {
    /// Create new account service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn register(&self, input: NewUser) -> AppResult<User> {
        input.validate()?;

        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        let user = self
            .repo
            .create(UserDraft {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                password_hash,
                role: UserRole::from(input.is_doctor),
            })
            .await?;

        tracing::info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user)
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self.repo.find_by_email(email).await?;

        // Verify even for unknown emails so both paths cost one hash check
        let stored = Password::from_hash(
            user.as_ref()
                .map(|u| u.password_hash.as_str())
                .unwrap_or(DUMMY_HASH),
        );
        let password_valid = stored.verify(password);

        match user {
            Some(user) if password_valid => Ok(user),
            _ => {
                tracing::debug!("Rejected login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn update_profile(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        changes.validate()?;

        if let Some(email) = changes.email.as_deref() {
            if let Some(owner) = self.repo.find_by_email(email).await? {
                if owner.id != id {
                    return Err(AppError::conflict("Email"));
                }
            }
        }

        self.repo.update(id, changes).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
