mod login {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use entity::user::MembershipType;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use narthex_test_utils::prelude::*;

    use narthex::{
        controller::auth::login, extractor::ValidatedJson, model::auth::LoginRequest,
        service::auth::Claims,
    };

    use crate::setup::{app_state, body_json};

    /// Expect a 200 with a decodable bearer token for valid credentials
    #[tokio::test]
    async fn issues_token_for_valid_credentials() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user = test
            .user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let resp = login(
            State(app_state(&test)),
            ValidatedJson(LoginRequest {
                email: "ana@example.com".to_string(),
                password: TEST_PASSWORD.to_string(),
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["tokenType"], "Bearer");
        assert_eq!(body["expiresIn"], 8 * 3600);

        let token = body["accessToken"].as_str().unwrap();
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, user.id);
        assert_eq!(decoded.claims.email, "ana@example.com");
        assert_eq!(decoded.claims.role, "MEMBER");

        Ok(())
    }

    /// Expect a 400 for a wrong password
    #[tokio::test]
    async fn fails_for_wrong_password() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        test.user()
            .insert_user("ana@example.com", MembershipType::Individual)
            .await?;

        let result = login(
            State(app_state(&test)),
            ValidatedJson(LoginRequest {
                email: "ana@example.com".to_string(),
                password: "not-the-password".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect a 400 for an unknown email, identical to the wrong-password case
    #[tokio::test]
    async fn fails_for_unknown_email() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = login(
            State(app_state(&test)),
            ValidatedJson(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: TEST_PASSWORD.to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["error"], "Invalid email or password");

        Ok(())
    }
}
