use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::entities::content::{self, ContentKind};
use crate::repositories::content_repository::NewContent;

/// Publish form shared by all four kinds. The partner form historically
/// posted `ptitle`/`pdescription`/`pcontent`; those names are still accepted.
#[derive(Deserialize, Validate)]
pub struct CreateContentForm {
    #[serde(default, alias = "ptitle")]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,

    #[serde(alias = "pdescription")]
    pub description: Option<String>,

    #[serde(default, alias = "pcontent")]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub content: String,

    pub category: Option<String>,
    pub image_url: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CreateContentForm {
    pub fn into_new_content(self, author_id: Option<i64>) -> NewContent {
        NewContent {
            title: self.title.trim().to_string(),
            description: non_blank(self.description),
            content: self.content,
            category: non_blank(self.category),
            image_url: non_blank(self.image_url),
            author_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeSummary {
    pub total_likes: u64,
    pub liked_by_current_user: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    pub id: Uuid,
    pub kind: ContentKind,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<content::Model> for ContentResponse {
    fn from(model: content::Model) -> Self {
        ContentResponse {
            id: model.public_id,
            kind: model.kind,
            title: model.title,
            description: model.description,
            content: model.content,
            category: model.category,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}

/// One item as shown on a page. Job postings carry their like summary.
#[derive(Debug, Clone, Serialize)]
pub struct ContentCard {
    #[serde(flatten)]
    pub item: ContentResponse,
    #[serde(flatten)]
    pub likes: Option<LikeSummary>,
}

impl ContentCard {
    pub fn plain(model: content::Model) -> Self {
        ContentCard { item: model.into(), likes: None }
    }

    pub fn with_likes(model: content::Model, likes: LikeSummary) -> Self {
        ContentCard { item: model.into(), likes: Some(likes) }
    }
}
