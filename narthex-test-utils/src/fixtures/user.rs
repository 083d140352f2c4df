use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use entity::user::{MembershipType, UserRole};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestSetup};

impl TestSetup {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a MEMBER-role user whose password is [`TEST_PASSWORD`], stored as
    /// an Argon2 hash the same way the application writes it.
    pub async fn insert_user(
        &self,
        email: &str,
        membership_type: MembershipType,
    ) -> Result<entity::user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set("Test User".to_string()),
            email: ActiveValue::Set(email.to_string()),
            phone: ActiveValue::Set("555-0100".to_string()),
            membership_type: ActiveValue::Set(membership_type),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(UserRole::Member),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
