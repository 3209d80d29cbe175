//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{NewUser, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user. Fails with a conflict if the email is taken.
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        if self.repo.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        self.repo.create(new_user).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn stored(new_user: NewUser) -> User {
        User::new(new_user)
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "newuser@example.com")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create()
            .with(eq(NewUser::new("newuser@example.com", "securepassword")))
            .times(1)
            .returning(|input| Ok(stored(input)));

        let service = UserManager::new(Arc::new(repo));
        let user = service.create_user(NewUser::default()).await.unwrap();

        assert_eq!(user.email, "newuser@example.com");
        assert_eq!(user.password, "securepassword");
    }

    #[tokio::test]
    async fn test_create_user_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored(NewUser::new(email, "old")))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(NewUser::default()).await;

        assert!(matches!(result, Err(AppError::Conflict(ref e)) if e == "Email"));
    }

    #[tokio::test]
    async fn test_create_user_propagates_lookup_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::internal("lookup failed")));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(NewUser::default()).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                stored(NewUser::new("a@example.com", "a")),
                stored(NewUser::new("b@example.com", "b")),
            ])
        });

        let service = UserManager::new(Arc::new(repo));
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "a@example.com");
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| Ok(Vec::new()));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.list_users().await.unwrap().is_empty());
    }
}
