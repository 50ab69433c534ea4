use crate::config::AdminSeed;
use crate::entities::user::UserRole;
use crate::error::{PortalError, PortalResult};
use crate::repositories::{user_repository::UserRepository, Storage};
use crate::services::auth_service::AuthService;

/// Make sure the configured administrator exists. Idempotent: an existing
/// account with that username or email is left untouched.
pub async fn seed_admin_user(storage: &Storage, admin: &AdminSeed) -> PortalResult<()> {
    let existing = UserRepository::find_duplicates(storage, &admin.username, &admin.email).await?;
    if !existing.is_empty() {
        return Ok(());
    }

    let hashed_password = AuthService::hash_password(&admin.password)
        .map_err(|e| PortalError::Internal(format!("failed to hash admin password: {}", e)))?;

    let user = UserRepository::create(
        storage,
        admin.username.clone(),
        admin.email.clone(),
        hashed_password,
        UserRole::Admin,
    ).await?;

    tracing::info!(user = %user.public_id, "seeded admin user {}", user.username);
    Ok(())
}
