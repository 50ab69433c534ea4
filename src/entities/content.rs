use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

/// The four independent collections the portal publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[sea_orm(string_value = "news")]
    News,
    #[sea_orm(string_value = "job")]
    Job,
    #[sea_orm(string_value = "event")]
    Event,
    #[sea_orm(string_value = "partner")]
    Partner,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::News,
        ContentKind::Job,
        ContentKind::Event,
        ContentKind::Partner,
    ];

    /// Path segment of the collection page, e.g. `/noticias`.
    pub fn collection_segment(self) -> &'static str {
        match self {
            ContentKind::News => "noticias",
            ContentKind::Job => "empregos",
            ContentKind::Event => "eventos",
            ContentKind::Partner => "parceiros",
        }
    }

    /// Path segment of a single item page, e.g. `/noticia/{id}`.
    pub fn item_segment(self) -> &'static str {
        match self {
            ContentKind::News => "noticia",
            ContentKind::Job => "emprego",
            ContentKind::Event => "evento",
            ContentKind::Partner => "parceiro",
        }
    }

    pub fn list_view(self) -> &'static str {
        match self {
            ContentKind::News => "all-news",
            ContentKind::Job => "all-jobs",
            ContentKind::Event => "all-events",
            ContentKind::Partner => "all-partners",
        }
    }

    pub fn detail_view(self) -> &'static str {
        match self {
            ContentKind::News => "news",
            ContentKind::Job => "jobs",
            ContentKind::Event => "events",
            ContentKind::Partner => "partners",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::News => "news article",
            ContentKind::Job => "job posting",
            ContentKind::Event => "event",
            ContentKind::Partner => "partner",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: i64,
    #[sea_orm(unique, index)]
    pub public_id: Uuid,

    pub kind: ContentKind,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author_id: Option<i64>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
