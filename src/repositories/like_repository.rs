use std::collections::{HashMap, HashSet};
use sea_orm::*;
use sea_orm::sea_query::{Expr, OnConflict};
use chrono::Utc;
use crate::entities::{like, like::Entity as Like, content::ContentKind};
use crate::error::PortalResult;
use crate::models::content_model::LikeSummary;
use super::Storage;

/// Per-kind like counts plus the items the viewer has liked.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LikeAggregate {
    pub counts: HashMap<i64, u64>,
    pub liked_by_viewer: HashSet<i64>,
}

impl LikeAggregate {
    pub fn total(&self, item_id: i64) -> u64 {
        self.counts.get(&item_id).copied().unwrap_or(0)
    }

    pub fn is_liked_by_viewer(&self, item_id: i64) -> bool {
        self.liked_by_viewer.contains(&item_id)
    }

    pub fn summary(&self, item_id: i64) -> LikeSummary {
        LikeSummary {
            total_likes: self.total(item_id),
            liked_by_current_user: self.is_liked_by_viewer(item_id),
        }
    }
}

/// The like ledger: one fact per (user, item, kind), guarded by the
/// `idx_likes_user_item_kind` unique index.
pub struct LikeLedger;

impl LikeLedger {
    /// Flip the viewer's like on an item. Returns the resulting state
    /// (`true` = now liked).
    pub async fn toggle(
        storage: &Storage,
        user_id: i64,
        item_id: i64,
        kind: ContentKind,
    ) -> PortalResult<bool> {
        let liked = storage
            .guard(Self::toggle_in_txn(storage.conn(), user_id, item_id, kind))
            .await?;
        tracing::debug!(user_id, item_id, ?kind, liked, "like toggled");
        Ok(liked)
    }

    // Dropping the transaction without commit (error or timeout) rolls it back.
    async fn toggle_in_txn(
        db: &DatabaseConnection,
        user_id: i64,
        item_id: i64,
        kind: ContentKind,
    ) -> Result<bool, DbErr> {
        let txn = db.begin().await?;

        let removed = Self::delete_fact(&txn, user_id, item_id, kind).await?;

        let liked = if removed > 0 {
            false
        } else {
            let fact = like::ActiveModel {
                id: NotSet,
                user_id: Set(user_id),
                item_id: Set(item_id),
                kind: Set(kind),
                created_at: Set(Utc::now()),
            };

            let inserted = Like::insert(fact)
                .on_conflict(
                    OnConflict::columns([
                        like::Column::UserId,
                        like::Column::ItemId,
                        like::Column::Kind,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;

            if inserted == 0 {
                // A concurrent toggle created the fact after our delete; this
                // call is the second toggle, so it undoes that one. Only
                // reachable under READ COMMITTED (the Postgres default); a
                // SERIALIZABLE database fails the loser with a serialization
                // error instead. SQLite serializes writers and never gets here.
                Self::delete_fact(&txn, user_id, item_id, kind).await?;
                false
            } else {
                true
            }
        };

        txn.commit().await?;
        Ok(liked)
    }

    async fn delete_fact<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        item_id: i64,
        kind: ContentKind,
    ) -> Result<u64, DbErr> {
        let res = Like::delete_many()
            .filter(like::Column::UserId.eq(user_id))
            .filter(like::Column::ItemId.eq(item_id))
            .filter(like::Column::Kind.eq(kind))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Like counts for every item of `kind`, grouped in the database, plus
    /// the subset liked by `viewer`. Facts of other kinds are never read.
    pub async fn aggregate(
        storage: &Storage,
        kind: ContentKind,
        viewer: Option<i64>,
    ) -> PortalResult<LikeAggregate> {
        let rows: Vec<(i64, i64)> = storage
            .guard(
                Like::find()
                    .select_only()
                    .column(like::Column::ItemId)
                    .column_as(Expr::col(like::Column::Id).count(), "total")
                    .filter(like::Column::Kind.eq(kind))
                    .group_by(like::Column::ItemId)
                    .into_tuple()
                    .all(storage.conn()),
            )
            .await?;

        let counts = rows
            .into_iter()
            .map(|(item_id, total)| (item_id, total.max(0) as u64))
            .collect();

        let liked_by_viewer = match viewer {
            Some(user_id) => {
                let items: Vec<i64> = storage
                    .guard(
                        Like::find()
                            .select_only()
                            .column(like::Column::ItemId)
                            .filter(like::Column::Kind.eq(kind))
                            .filter(like::Column::UserId.eq(user_id))
                            .into_tuple()
                            .all(storage.conn()),
                    )
                    .await?;
                items.into_iter().collect()
            }
            None => HashSet::new(),
        };

        Ok(LikeAggregate { counts, liked_by_viewer })
    }

    /// Like summary for a single item, without aggregating the whole kind.
    pub async fn summary(
        storage: &Storage,
        item_id: i64,
        kind: ContentKind,
        viewer: Option<i64>,
    ) -> PortalResult<LikeSummary> {
        let total_likes = storage
            .guard(
                Like::find()
                    .filter(like::Column::ItemId.eq(item_id))
                    .filter(like::Column::Kind.eq(kind))
                    .count(storage.conn()),
            )
            .await?;

        let liked_by_current_user = match viewer {
            Some(user_id) => Self::count_facts(storage, user_id, item_id, kind).await? > 0,
            None => false,
        };

        Ok(LikeSummary { total_likes, liked_by_current_user })
    }

    /// Number of stored facts for one triple; 0 or 1 while the index holds.
    pub async fn count_facts(
        storage: &Storage,
        user_id: i64,
        item_id: i64,
        kind: ContentKind,
    ) -> PortalResult<u64> {
        storage
            .guard(
                Like::find()
                    .filter(like::Column::UserId.eq(user_id))
                    .filter(like::Column::ItemId.eq(item_id))
                    .filter(like::Column::Kind.eq(kind))
                    .count(storage.conn()),
            )
            .await
    }
}
