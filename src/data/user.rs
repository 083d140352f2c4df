use entity::user::{MembershipType, UserRole};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Partial update applied as a merge onto an existing user row. Absent fields
/// are left untouched.
#[derive(Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub phone: Option<String>,
    pub membership_type: Option<MembershipType>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Creates a new user. The password must already be hashed; new users are
    /// always created with the MEMBER role.
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: String,
        membership_type: MembershipType,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone),
            membership_type: ActiveValue::Set(membership_type),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(UserRole::Member),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn update(
        &self,
        user_id: i32,
        patch: UserPatch,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(name) = patch.name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(email) = patch.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(role) = patch.role {
            user_am.role = ActiveValue::Set(role);
        }
        if let Some(phone) = patch.phone {
            user_am.phone = ActiveValue::Set(phone);
        }
        if let Some(membership_type) = patch.membership_type {
            user_am.membership_type = ActiveValue::Set(membership_type);
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Replaces the stored password hash for a user in a single row update.
    pub async fn update_password(
        &self,
        user: entity::user::Model,
        new_password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.password = ActiveValue::Set(new_password_hash);

        user_am.update(self.db).await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing; to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
