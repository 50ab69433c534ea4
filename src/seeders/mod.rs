pub mod user_seeder;

use crate::config::Config;
use crate::error::PortalResult;
use crate::repositories::Storage;

pub async fn run_seeders(storage: &Storage, cfg: &Config) -> PortalResult<()> {
    if let Some(admin) = &cfg.admin_seed {
        user_seeder::seed_admin_user(storage, admin).await?;
    }
    Ok(())
}
