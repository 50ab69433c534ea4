use crate::config::AuthSettings;
use chrono::{Utc, Duration};
use jsonwebtoken::{encode, decode, DecodingKey, Validation, Header, EncodingKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid, // User public id
    pub exp: usize,
    pub iat: usize,
}

pub struct JwtUtils;

impl JwtUtils {
    /// Issue the session token stored in the auth cookie.
    pub fn generate_jwt(settings: &AuthSettings, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        Self::generate_jwt_with_custom_exp(settings, user_id, settings.jwt_expires_in)
    }

    pub fn generate_jwt_with_custom_exp(
        settings: &AuthSettings,
        user_id: Uuid,
        minutes: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let expire = now + Duration::minutes(minutes);
        let claims = Claims {
            sub: user_id,
            exp: expire.timestamp().max(0) as usize,
            iat: now.timestamp().max(0) as usize,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(settings.jwt_secret.as_bytes()))
    }

    /// Validate signature and expiry, returning the claims.
    pub fn validate_jwt(settings: &AuthSettings, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(settings.jwt_secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        decode::<Claims>(token, &decoding_key, &validation).map(|data| data.claims)
    }
}
