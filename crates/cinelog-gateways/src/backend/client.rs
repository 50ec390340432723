use async_trait::async_trait;
use cinelog_config::BackendConfig;
use cinelog_models::{MovieRecord, RatingSummary, ReviewDraft, ReviewRecord, SessionIdentity};
use reqwest::Client;

use crate::backend::api::{self, RegisterProfile};
use crate::error::GatewayError;
use crate::traits::ReviewGateway;

/// Review backend client. Gated calls take the session identity
/// explicitly; nothing here reads process-wide state. No caller-visible
/// timeout; the backend is slow to cold-start, so the default applies.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    pub async fn login(&self, id: &str, password: &str) -> Result<SessionIdentity, GatewayError> {
        api::login(&self.client, &self.base_url, id, password).await
    }

    pub async fn register(&self, profile: &RegisterProfile) -> Result<String, GatewayError> {
        api::register(&self.client, &self.base_url, profile).await
    }
}

#[async_trait]
impl ReviewGateway for BackendClient {
    async fn upsert_movie(&self, movie: &MovieRecord) -> Result<(), GatewayError> {
        api::upsert_movie(&self.client, &self.base_url, movie).await
    }

    async fn submit_review(
        &self,
        session: &SessionIdentity,
        tmdb_id: u64,
        draft: &ReviewDraft,
    ) -> Result<(), GatewayError> {
        api::submit_review(&self.client, &self.base_url, session, tmdb_id, draft).await
    }

    async fn update_review(
        &self,
        session: &SessionIdentity,
        review: &ReviewRecord,
    ) -> Result<(), GatewayError> {
        api::update_review(&self.client, &self.base_url, session, review).await
    }

    async fn delete_review(
        &self,
        session: &SessionIdentity,
        review_id: i64,
    ) -> Result<(), GatewayError> {
        api::delete_review(&self.client, &self.base_url, session, review_id).await
    }

    async fn toggle_like(
        &self,
        session: &SessionIdentity,
        tmdb_id: u64,
    ) -> Result<bool, GatewayError> {
        api::toggle_like(&self.client, &self.base_url, session, tmdb_id).await
    }

    async fn reviews_for_movie(&self, tmdb_id: u64) -> Result<Vec<ReviewRecord>, GatewayError> {
        api::reviews_for_movie(&self.client, &self.base_url, tmdb_id).await
    }

    async fn rating_summary(&self, tmdb_id: u64) -> Result<Option<RatingSummary>, GatewayError> {
        api::rating_summary(&self.client, &self.base_url, tmdb_id).await
    }

    async fn reviews_for_member(
        &self,
        member_id: &str,
    ) -> Result<Vec<ReviewRecord>, GatewayError> {
        api::reviews_for_member(&self.client, &self.base_url, member_id).await
    }
}
