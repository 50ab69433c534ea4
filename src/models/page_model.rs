use serde::Serialize;
use crate::entities::content::ContentKind;
use crate::models::auth_model::CurrentUser;
use crate::models::content_model::ContentCard;

// View-models leave `current_user` out entirely for anonymous visitors; it is
// never serialized as null.

#[derive(Serialize)]
pub struct DashboardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user: Option<CurrentUser>,
    pub news: Vec<ContentCard>,
    pub partners: Vec<ContentCard>,
    pub jobs: Vec<ContentCard>,
    pub events: Vec<ContentCard>,
}

#[derive(Serialize)]
pub struct ListView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user: Option<CurrentUser>,
    pub kind: ContentKind,
    pub items: Vec<ContentCard>,
}

#[derive(Serialize)]
pub struct DetailView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user: Option<CurrentUser>,
    pub item: ContentCard,
}
