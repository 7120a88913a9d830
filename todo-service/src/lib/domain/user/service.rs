use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginUserCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn login_user(&self, command: LoginUserCommand) -> Result<String, UserError> {
        // An unknown email and a wrong password must collapse into the
        // same failure, with no distinguishing signal.
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        self.authenticator
            .login(&command.password, &user.password_hash, &user.id.to_string())
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                other => {
                    tracing::error!("Token issuance failed for user {}: {}", user.id, other);
                    UserError::Unknown(other.to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        }
    }

    fn service(repository: MockTestUserRepository) -> UserService<MockTestUserRepository> {
        UserService::new(
            Arc::new(repository),
            Arc::new(Authenticator::new(SECRET, 24)),
        )
    }

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = service(repository);

        let command = RegisterUserCommand {
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let user = service.register_user(command).await.unwrap();
        assert_eq!(user.email.as_str(), "test@example.com");
        // The plaintext never reaches storage
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = service(repository);

        let command = RegisterUserCommand {
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let result = service.register_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_login_user_success() {
        let mut repository = MockTestUserRepository::new();

        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let user_id = UserId::new();
        let stored_user = User {
            id: user_id,
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password_hash: authenticator.hash_password("password123").unwrap(),
            created_at: Utc::now(),
        };

        repository
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(move |_| Ok(Some(stored_user.clone())));

        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let token = service
            .login_user(LoginUserCommand::new(
                "test@example.com".to_string(),
                "password123".to_string(),
            ))
            .await
            .unwrap();

        let claims = authenticator.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[tokio::test]
    async fn test_login_user_unknown_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let result = service
            .login_user(LoginUserCommand::new(
                "nobody@example.com".to_string(),
                "password123".to_string(),
            ))
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_user_wrong_password() {
        let mut repository = MockTestUserRepository::new();

        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let stored_user = User {
            id: UserId::new(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password_hash: authenticator.hash_password("correct_password").unwrap(),
            created_at: Utc::now(),
        };

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(stored_user.clone())));

        let service = UserService::new(Arc::new(repository), authenticator);

        let result = service
            .login_user(LoginUserCommand::new(
                "test@example.com".to_string(),
                "wrong_password".to_string(),
            ))
            .await;

        // Identical outcome to the unknown-email case
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }
}
