use async_trait::async_trait;
use cinelog_models::{MovieRecord, RatingSummary, ReviewDraft, ReviewRecord, SessionIdentity};

use crate::error::GatewayError;

/// Movie metadata reads against the external provider. The per-movie
/// representative-review fetch hides behind this seam, so a batched
/// endpoint can replace it without touching the aggregator.
#[async_trait]
pub trait MetadataGateway: Send + Sync {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, GatewayError>;

    async fn popular_movies(&self) -> Result<Vec<MovieRecord>, GatewayError>;

    /// Resolves from the most recently fetched popular list before falling
    /// back to a single detail lookup. `Ok(None)` when the provider has no
    /// such movie or rejected the lookup.
    async fn movie_by_id(&self, tmdb_id: u64) -> Result<Option<MovieRecord>, GatewayError>;
}

/// Review CRUD, like toggles, and rating summaries against the backend
/// store. Gated operations take the session identity explicitly; read
/// operations need none.
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Best-effort upsert of movie identity so review rows can reference it.
    async fn upsert_movie(&self, movie: &MovieRecord) -> Result<(), GatewayError>;

    /// Fire-and-forget create; the response body is discarded.
    async fn submit_review(
        &self,
        session: &SessionIdentity,
        tmdb_id: u64,
        draft: &ReviewDraft,
    ) -> Result<(), GatewayError>;

    /// Update from the caller's current record: content, rating, emotions,
    /// and attachments all travel in the payload, so an edit that only
    /// changed the content still preserves the stored attachments. Success
    /// is derived from the HTTP status alone.
    async fn update_review(
        &self,
        session: &SessionIdentity,
        review: &ReviewRecord,
    ) -> Result<(), GatewayError>;

    async fn delete_review(
        &self,
        session: &SessionIdentity,
        review_id: i64,
    ) -> Result<(), GatewayError>;

    /// Returns the new liked state; a body without an `isLiked` field reads
    /// as false.
    async fn toggle_like(
        &self,
        session: &SessionIdentity,
        tmdb_id: u64,
    ) -> Result<bool, GatewayError>;

    async fn reviews_for_movie(&self, tmdb_id: u64) -> Result<Vec<ReviewRecord>, GatewayError>;

    /// `Ok(None)` when the backend has no summary; callers render the
    /// zero-state.
    async fn rating_summary(&self, tmdb_id: u64) -> Result<Option<RatingSummary>, GatewayError>;

    async fn reviews_for_member(&self, member_id: &str)
        -> Result<Vec<ReviewRecord>, GatewayError>;
}
