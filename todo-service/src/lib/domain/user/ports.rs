use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginUserCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with a hashed password.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Authenticate a user and issue a bearer token.
    ///
    /// # Returns
    /// Signed token string on success
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, never
    ///   distinguished
    /// * `DatabaseError` - Database operation failed
    async fn login_user(&self, command: LoginUserCommand) -> Result<String, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// Registration-only surface: users are never updated or deleted.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered; storage is
    ///   left unchanged
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by email address (case-sensitive as stored).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
