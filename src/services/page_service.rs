use crate::entities::content::{self, ContentKind};
use crate::error::{PortalError, PortalResult};
use crate::models::auth_model::Viewer;
use crate::models::content_model::ContentCard;
use crate::models::page_model::{DashboardView, DetailView, ListView};
use crate::repositories::{
    content_repository::ContentRepository,
    like_repository::LikeLedger,
    Storage,
};

pub const DASHBOARD_NEWS: u64 = 6;
pub const DASHBOARD_JOBS: u64 = 3;
pub const DASHBOARD_EVENTS: u64 = 3;
pub const DASHBOARD_PARTNERS: u64 = 3;

/// Builds view-models from repository reads. Read-only.
pub struct PageService;

impl PageService {
    pub async fn dashboard(storage: &Storage, viewer: &Viewer) -> PortalResult<DashboardView> {
        let news_repo = ContentRepository::new(storage, ContentKind::News);
        let job_repo = ContentRepository::new(storage, ContentKind::Job);
        let event_repo = ContentRepository::new(storage, ContentKind::Event);
        let partner_repo = ContentRepository::new(storage, ContentKind::Partner);

        let (news, jobs, events, partners) = tokio::try_join!(
            news_repo.get_latest(DASHBOARD_NEWS),
            job_repo.get_latest(DASHBOARD_JOBS),
            event_repo.get_latest(DASHBOARD_EVENTS),
            partner_repo.get_latest(DASHBOARD_PARTNERS),
        )?;

        Ok(DashboardView {
            current_user: viewer.0.clone(),
            news: Self::cards(storage, ContentKind::News, news, viewer).await?,
            partners: Self::cards(storage, ContentKind::Partner, partners, viewer).await?,
            jobs: Self::cards(storage, ContentKind::Job, jobs, viewer).await?,
            events: Self::cards(storage, ContentKind::Event, events, viewer).await?,
        })
    }

    pub async fn list(storage: &Storage, kind: ContentKind, viewer: &Viewer) -> PortalResult<ListView> {
        let items = ContentRepository::new(storage, kind).get_all().await?;

        Ok(ListView {
            current_user: viewer.0.clone(),
            kind,
            items: Self::cards(storage, kind, items, viewer).await?,
        })
    }

    pub async fn detail(
        storage: &Storage,
        kind: ContentKind,
        id: &str,
        viewer: &Viewer,
    ) -> PortalResult<DetailView> {
        let item = ContentRepository::new(storage, kind)
            .get_by_id(id)
            .await?
            .ok_or(PortalError::NotFound(kind.label()))?;

        let card = if kind == ContentKind::Job {
            let likes = LikeLedger::summary(storage, item.id, kind, viewer.user_id()).await?;
            ContentCard::with_likes(item, likes)
        } else {
            ContentCard::plain(item)
        };

        Ok(DetailView {
            current_user: viewer.0.clone(),
            item: card,
        })
    }

    // Only job postings can be liked, so only they get the aggregate joined on.
    async fn cards(
        storage: &Storage,
        kind: ContentKind,
        items: Vec<content::Model>,
        viewer: &Viewer,
    ) -> PortalResult<Vec<ContentCard>> {
        if kind != ContentKind::Job || items.is_empty() {
            return Ok(items.into_iter().map(ContentCard::plain).collect());
        }

        let aggregate = LikeLedger::aggregate(storage, kind, viewer.user_id()).await?;
        Ok(items
            .into_iter()
            .map(|item| {
                let likes = aggregate.summary(item.id);
                ContentCard::with_likes(item, likes)
            })
            .collect())
    }
}
