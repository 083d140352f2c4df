mod create_user {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use narthex::{controller::user::create_user, extractor::ValidatedJson, model::user::CreateUserRequest};

    use crate::setup::{app_state, body_json};

    fn request(email: &str, membership_type: Option<MembershipType>) -> CreateUserRequest {
        CreateUserRequest {
            name: "Ana Souza".to_string(),
            email: email.to_string(),
            phone: "555-0199".to_string(),
            membership_type,
            password: "hunter42".to_string(),
        }
    }

    /// Expect a 201 with MEMBER role and INDIVIDUAL membership defaults
    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = create_user(
            State(app_state(&test)),
            ValidatedJson(request("ana@example.com", None)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = body_json(resp).await;
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["role"], "MEMBER");
        assert_eq!(body["membershipType"], "INDIVIDUAL");
        assert!(body.get("password").is_none());

        Ok(())
    }

    /// Expect the stored password to be an Argon2 hash, not the plaintext
    #[tokio::test]
    async fn stores_hashed_password() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let resp = create_user(
            State(app_state(&test)),
            ValidatedJson(request("ana@example.com", Some(MembershipType::Family))),
        )
        .await
        .unwrap()
        .into_response();
        let body = body_json(resp).await;

        let user = entity::prelude::User::find_by_id(body["id"].as_i64().unwrap() as i32)
            .one(&test.db)
            .await?
            .unwrap();
        assert_ne!(user.password, "hunter42");
        assert!(user.password.starts_with("$argon2"));

        Ok(())
    }

    /// Expect a 400 and no second row when the email is already taken
    #[tokio::test]
    async fn fails_for_duplicate_email() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        test.user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let result = create_user(
            State(app_state(&test)),
            ValidatedJson(request("ana@example.com", None)),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let count = entity::prelude::User::find().count(&test.db).await?;
        assert_eq!(count, 1);

        Ok(())
    }
}

mod get_users {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;

    use narthex::controller::user::{get_all_users, get_user_by_id};

    use crate::setup::{app_state, body_json};

    /// Expect every inserted user to come back without password fields
    #[tokio::test]
    async fn lists_all_users() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        test.user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;
        test.user()
            .insert_user("bea@example.com", MembershipType::Family)
            .await?;

        let resp = get_all_users(State(app_state(&test)))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.get("password").is_none()));

        Ok(())
    }

    /// Expect a single user by ID
    #[tokio::test]
    async fn gets_user_by_id() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let resp = get_user_by_id(State(app_state(&test)), Path(user.id))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["email"], "ana@example.com");

        Ok(())
    }

    /// Expect a 404 for an ID with no row
    #[tokio::test]
    async fn returns_404_for_nonexistent_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = get_user_by_id(State(app_state(&test)), Path(99)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update_user {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;

    use narthex::{controller::user::update_user, extractor::ValidatedJson, model::user::UpdateUserRequest};

    use crate::setup::{app_state, body_json};

    /// Expect only the provided fields to change
    #[tokio::test]
    async fn merges_partial_update() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let resp = update_user(
            State(app_state(&test)),
            Path(user.id),
            ValidatedJson(UpdateUserRequest {
                name: Some("Ana Maria".to_string()),
                email: None,
                role: None,
                phone: None,
                membership_type: Some(MembershipType::Family),
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["name"], "Ana Maria");
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["membershipType"], "FAMILY");

        Ok(())
    }

    /// Expect a 404 when updating an ID with no row
    #[tokio::test]
    async fn returns_404_for_nonexistent_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = update_user(
            State(app_state(&test)),
            Path(99),
            ValidatedJson(UpdateUserRequest {
                name: Some("Ana Maria".to_string()),
                email: None,
                role: None,
                phone: None,
                membership_type: None,
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update_password {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;
    use sea_orm::EntityTrait;

    use narthex::{
        controller::user::update_password, extractor::ValidatedJson,
        model::user::UpdatePasswordRequest, service::user::verify_password,
    };

    use crate::setup::{app_state, body_json};

    /// Expect the new password to verify against the rotated hash
    #[tokio::test]
    async fn rotates_password() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let resp = update_password(
            State(app_state(&test)),
            Path(user.id),
            ValidatedJson(UpdatePasswordRequest {
                current_password: TEST_PASSWORD.to_string(),
                new_password: "brand-new-pass".to_string(),
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["message"], "Password updated successfully");

        let updated = entity::prelude::User::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert!(verify_password("brand-new-pass", &updated.password).unwrap());
        assert!(!verify_password(TEST_PASSWORD, &updated.password).unwrap());

        Ok(())
    }

    /// Expect a 400 and an unchanged hash when the current password is wrong
    #[tokio::test]
    async fn fails_for_incorrect_current_password() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let result = update_password(
            State(app_state(&test)),
            Path(user.id),
            ValidatedJson(UpdatePasswordRequest {
                current_password: "not-the-password".to_string(),
                new_password: "brand-new-pass".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let unchanged = entity::prelude::User::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(unchanged.password, user.password);

        Ok(())
    }

    /// Expect a 404 when the user does not exist
    #[tokio::test]
    async fn returns_404_for_nonexistent_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = update_password(
            State(app_state(&test)),
            Path(99),
            ValidatedJson(UpdatePasswordRequest {
                current_password: TEST_PASSWORD.to_string(),
                new_password: "brand-new-pass".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_user {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use entity::user::MembershipType;
    use narthex_test_utils::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use narthex::controller::user::delete_user;

    use crate::setup::app_state;

    /// Expect a 204 and the row to be gone
    #[tokio::test]
    async fn deletes_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let resp = delete_user(State(app_state(&test)), Path(user.id))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let count = entity::prelude::User::find().count(&test.db).await?;
        assert_eq!(count, 0);

        Ok(())
    }

    /// Expect a 404 when deleting an ID with no row
    #[tokio::test]
    async fn returns_404_for_nonexistent_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = delete_user(State(app_state(&test)), Path(99)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
