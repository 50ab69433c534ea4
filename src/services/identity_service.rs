use crate::config::AuthSettings;
use crate::error::PortalResult;
use crate::models::auth_model::CurrentUser;
use crate::repositories::{user_repository::UserRepository, Storage};
use crate::utils::jwt_utils::JwtUtils;

pub struct IdentityResolver;

impl IdentityResolver {
    /// Map the session token (if any) to a user. A missing, malformed,
    /// expired or forged token, or a subject with no account, is an
    /// anonymous visitor rather than an error. Only storage failures
    /// propagate.
    pub async fn resolve(
        storage: &Storage,
        settings: &AuthSettings,
        token: Option<&str>,
    ) -> PortalResult<Option<CurrentUser>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let claims = match JwtUtils::validate_jwt(settings, token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("ignoring session token: {}", e);
                return Ok(None);
            }
        };

        let user = UserRepository::find_by_public_id(storage, claims.sub).await?;
        Ok(user.map(CurrentUser::from))
    }
}
