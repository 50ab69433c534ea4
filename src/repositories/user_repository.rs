use sea_orm::*;
use chrono::Utc;
use uuid::Uuid;
use crate::entities::{user, user::Entity as User, user::UserRole};
use crate::error::{PortalError, PortalResult};
use super::Storage;

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_public_id(
        storage: &Storage,
        public_id: Uuid,
    ) -> PortalResult<Option<user::Model>> {
        storage
            .guard(User::find().filter(user::Column::PublicId.eq(public_id)).one(storage.conn()))
            .await
    }

    // Email OR username
    pub async fn find_by_login_id(
        storage: &Storage,
        login_id: &str,
    ) -> PortalResult<Option<user::Model>> {
        storage
            .guard(
                User::find()
                    .filter(
                        Condition::any()
                            .add(user::Column::Email.eq(login_id))
                            .add(user::Column::Username.eq(login_id)),
                    )
                    .one(storage.conn()),
            )
            .await
    }

    // Returns every clash so the caller can tell which field is taken
    pub async fn find_duplicates(
        storage: &Storage,
        username: &str,
        email: &str,
    ) -> PortalResult<Vec<user::Model>> {
        storage
            .guard(
                User::find()
                    .filter(
                        Condition::any()
                            .add(user::Column::Email.eq(email))
                            .add(user::Column::Username.eq(username)),
                    )
                    .all(storage.conn()),
            )
            .await
    }

    pub async fn create(
        storage: &Storage,
        username: String,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> PortalResult<user::Model> {
        let now = Utc::now();
        let new_user = user::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // The duplicate check in the service can lose a race with a concurrent
        // registration; the unique index settles it.
        let inserted = storage
            .guard(async { Ok::<_, DbErr>(new_user.insert(storage.conn()).await) })
            .await?;

        inserted.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                PortalError::Conflict("Username or email already exists".to_string())
            }
            _ => PortalError::from(err),
        })
    }
}
