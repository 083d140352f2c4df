use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    data::UserRepository,
    error::{auth::AuthError, Error},
    model::auth::{LoginRequest, TokenResponse},
    service::user::verify_password,
};

static TOKEN_TYPE_BEARER: &str = "Bearer";
static SECONDS_PER_HOUR: i64 = 3600;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Service issuing access tokens for verified credentials. Token verification
/// middleware is out of scope; nothing in this crate consumes the tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Verifies credentials and issues an HS256 JWT.
    ///
    /// The response is identical whether the email is unknown or the password is
    /// wrong, so login failures never reveal which one it was.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, Error> {
        let user = UserRepository::new(self.db)
            .get_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&request.password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let now = Utc::now();
        let expires_in = self.config.jwt_expires_hours * SECONDS_PER_HOUR;
        let claims = Claims {
            sub: user.id,
            email: user.email,
            role: match user.role {
                entity::user::UserRole::Admin => "ADMIN".to_string(),
                entity::user::UserRole::Member => "MEMBER".to_string(),
            },
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.jwt_expires_hours)).timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        })
    }
}
