pub mod content_repository;
pub mod like_repository;
pub mod user_repository;

use std::future::Future;
use std::time::Duration;
use sea_orm::{DatabaseConnection, DbErr};
use crate::error::{PortalError, PortalResult};

/// Connection handle shared by every repository. Each storage call goes
/// through [`Storage::guard`] so a stalled database surfaces as
/// `StorageUnavailable` instead of hanging the request.
#[derive(Clone)]
pub struct Storage {
    db: DatabaseConnection,
    call_timeout: Duration,
}

impl Storage {
    pub fn new(db: DatabaseConnection, call_timeout: Duration) -> Self {
        Self { db, call_timeout }
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn guard<T, F>(&self, call: F) -> PortalResult<T>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result.map_err(PortalError::from),
            Err(_) => Err(PortalError::StorageUnavailable(format!(
                "storage call exceeded {} ms",
                self.call_timeout.as_millis()
            ))),
        }
    }
}
