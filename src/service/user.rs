use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entity::user::MembershipType;
use sea_orm::DatabaseConnection;

use crate::{
    data::UserRepository,
    error::{auth::AuthError, Error},
    model::user::{CreateUserRequest, UpdatePasswordRequest},
};

/// Service for managing user account operations.
///
/// Owns the pieces of user lifecycle that go beyond plain CRUD: the
/// duplicate-email pre-check, password hashing at signup, and password rotation
/// with current-password verification.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user from a validated signup payload.
    ///
    /// The email is pre-checked for duplicates so the common conflict case is
    /// reported explicitly rather than through the store's constraint error.
    /// New users default to INDIVIDUAL membership and always get the MEMBER role.
    ///
    /// # Returns
    /// - `Ok(Model)` - Created user row (password field holds the hash)
    /// - `Err(Error::Conflict)` - A user with the email already exists
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_email(&request.email).await?.is_some() {
            return Err(Error::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(&request.password)?;

        let user = user_repository
            .create(
                request.name,
                request.email,
                request.phone,
                request
                    .membership_type
                    .unwrap_or(MembershipType::Individual),
                password_hash,
            )
            .await?;

        Ok(user)
    }

    /// Rotates a user's password after verifying the current one.
    ///
    /// # Returns
    /// - `Ok(())` - New hash persisted
    /// - `Err(Error::NotFound)` - No user with the given ID
    /// - `Err(Error::AuthError)` - Current password does not match the stored hash
    pub async fn update_password(
        &self,
        user_id: i32,
        request: UpdatePasswordRequest,
    ) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(Error::NotFound("User"))?;

        if !verify_password(&request.current_password, &user.password)? {
            return Err(AuthError::IncorrectCurrentPassword(user_id).into());
        }

        let new_password_hash = hash_password(&request.new_password)?;
        user_repository.update_password(user, new_password_hash).await?;

        Ok(())
    }
}

/// Hashes a password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {e}")))
}

/// Verifies a password against a stored Argon2 hash. A mismatch is `Ok(false)`;
/// only a malformed stored hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|e| Error::InternalError(format!("Stored password hash is malformed: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
