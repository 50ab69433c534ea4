use sea_orm::*;
use chrono::Utc;
use uuid::Uuid;
use crate::entities::{content, content::ContentKind, content::Entity as Content};
use crate::error::PortalResult;
use super::Storage;

/// Fields of a freshly published item; the repository fills in ids and timestamps.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author_id: Option<i64>,
}

/// Read/write access to one content collection. Every query is scoped to
/// `kind`, so the four collections never see each other's rows.
///
/// No authorization happens here; callers gate `create` behind the admin guard.
#[derive(Clone, Copy)]
pub struct ContentRepository<'a> {
    storage: &'a Storage,
    kind: ContentKind,
}

impl<'a> ContentRepository<'a> {
    pub fn new(storage: &'a Storage, kind: ContentKind) -> Self {
        Self { storage, kind }
    }

    fn scoped(&self) -> Select<Content> {
        Content::find()
            .filter(content::Column::Kind.eq(self.kind))
            .order_by_desc(content::Column::CreatedAt)
            .order_by_desc(content::Column::Id)
    }

    /// Newest first. Empty collection yields an empty vec.
    pub async fn get_all(&self) -> PortalResult<Vec<content::Model>> {
        self.storage.guard(self.scoped().all(self.storage.conn())).await
    }

    pub async fn get_latest(&self, n: u64) -> PortalResult<Vec<content::Model>> {
        self.storage
            .guard(self.scoped().limit(n).all(self.storage.conn()))
            .await
    }

    /// `id` is the public id as it appears in the URL. Anything that is not a
    /// known id of this kind, including malformed ids, is `None`.
    pub async fn get_by_id(&self, id: &str) -> PortalResult<Option<content::Model>> {
        let Ok(public_id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        self.storage
            .guard(
                Content::find()
                    .filter(content::Column::Kind.eq(self.kind))
                    .filter(content::Column::PublicId.eq(public_id))
                    .one(self.storage.conn()),
            )
            .await
    }

    pub async fn create(&self, fields: NewContent) -> PortalResult<content::Model> {
        let item = content::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            kind: Set(self.kind),
            title: Set(fields.title),
            description: Set(fields.description),
            content: Set(fields.content),
            category: Set(fields.category),
            image_url: Set(fields.image_url),
            author_id: Set(fields.author_id),
            created_at: Set(Utc::now()),
        };

        let saved = self.storage.guard(item.insert(self.storage.conn())).await?;
        tracing::info!(kind = ?self.kind, id = %saved.public_id, "content published");
        Ok(saved)
    }
}
