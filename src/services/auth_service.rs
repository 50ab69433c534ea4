use argon2::{
    password_hash::{
        rand_core::OsRng,
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString
    },
    Argon2
};
use crate::config::AuthSettings;
use crate::entities::user::{self, UserRole};
use crate::error::{PortalError, PortalResult};
use crate::repositories::{user_repository::UserRepository, Storage};
use crate::utils::jwt_utils::JwtUtils;

pub struct AuthService;

impl AuthService {
    /// Create a regular account and return it with a fresh session token.
    pub async fn register_user(
        storage: &Storage,
        settings: &AuthSettings,
        username: String,
        email: String,
        password: String,
    ) -> PortalResult<(user::Model, String)> {
        let duplicates = UserRepository::find_duplicates(storage, &username, &email).await?;
        if !duplicates.is_empty() {
            return Err(Self::duplicate_error(&duplicates, &username, &email));
        }

        let hashed_password = Self::hash_password(&password)
            .map_err(|e| PortalError::Internal(format!("failed to hash password: {}", e)))?;

        let user = UserRepository::create(storage, username, email, hashed_password, UserRole::User).await?;
        let token = Self::issue_token(settings, &user)?;

        tracing::info!(user = %user.public_id, "user registered");
        Ok((user, token))
    }

    pub async fn login_user(
        storage: &Storage,
        settings: &AuthSettings,
        login_id: &str,
        password: &str,
    ) -> PortalResult<(user::Model, String)> {
        let user = UserRepository::find_by_login_id(storage, login_id)
            .await?
            .ok_or(PortalError::InvalidCredentials)?;

        let is_valid = Self::verify_password(password, &user.password_hash)
            .map_err(|e| PortalError::Internal(format!("password verification failed: {}", e)))?;

        if !is_valid {
            tracing::warn!(user = %user.public_id, "login rejected: wrong password");
            return Err(PortalError::InvalidCredentials);
        }

        let token = Self::issue_token(settings, &user)?;
        Ok((user, token))
    }

    fn issue_token(settings: &AuthSettings, user: &user::Model) -> PortalResult<String> {
        JwtUtils::generate_jwt(settings, user.public_id)
            .map_err(|e| PortalError::Internal(format!("token generation failed: {}", e)))
    }

    fn duplicate_error(duplicates: &[user::Model], username: &str, email: &str) -> PortalError {
        let u_exists = duplicates.iter().any(|u| u.username == username);
        let e_exists = duplicates.iter().any(|u| u.email == email);
        let msg = if u_exists && e_exists { "Username and email already exist" }
            else if u_exists { "Username already exists" }
            else { "Email already exists" };
        PortalError::Conflict(msg.to_string())
    }

    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(Argon2::default().hash_password(password.as_bytes(), &salt)?.to_string())
    }

    pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;
        Ok(Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok())
    }
}
