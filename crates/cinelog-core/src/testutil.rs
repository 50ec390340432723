//! In-memory gateway fakes for exercising the aggregator and reconciler
//! without a network.

use async_trait::async_trait;
use chrono::Utc;
use cinelog_gateways::error::StatusCode;
use cinelog_gateways::{GatewayError, MetadataGateway, ReviewGateway};
use cinelog_models::{MovieRecord, RatingSummary, ReviewDraft, ReviewRecord, SessionIdentity};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

pub fn movie(tmdb_id: u64, title: &str) -> MovieRecord {
    MovieRecord {
        tmdb_id,
        title: title.to_string(),
        overview: "overview".to_string(),
        poster_url: "https://image.tmdb.org/t/p/w500/x.jpg".to_string(),
        genres: "Action".to_string(),
        vote_average: 7.5,
        vote_count: 1000,
        representative_review: "No review".to_string(),
        rating_average: 0.0,
        release_year: 1999,
        director: None,
    }
}

pub fn review(id: i64, member_id: &str, movie_id: u64, content: &str) -> ReviewRecord {
    ReviewRecord {
        id,
        member_id: member_id.to_string(),
        movie_id,
        content: content.to_string(),
        rating: "4".to_string(),
        emotions: vec!["moved".to_string()],
        media_url: None,
        highlight_quote: None,
        highlight_image_url: None,
        created_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct FakeMetadata {
    movies: Vec<MovieRecord>,
}

impl FakeMetadata {
    pub fn with_movies(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl MetadataGateway for FakeMetadata {
    async fn search_movies(&self, _query: &str) -> Result<Vec<MovieRecord>, GatewayError> {
        Ok(self.movies.clone())
    }

    async fn popular_movies(&self) -> Result<Vec<MovieRecord>, GatewayError> {
        Ok(self.movies.clone())
    }

    async fn movie_by_id(&self, tmdb_id: u64) -> Result<Option<MovieRecord>, GatewayError> {
        Ok(self.movies.iter().find(|m| m.tmdb_id == tmdb_id).cloned())
    }
}

/// Review store fake. Every trait call is appended to `calls` so tests can
/// assert that local precondition failures never reach the gateway.
#[derive(Default)]
pub struct FakeReviews {
    reviews: Arc<Mutex<Vec<ReviewRecord>>>,
    summary: Arc<Mutex<Option<RatingSummary>>>,
    submitted: Arc<Mutex<Vec<ReviewDraft>>>,
    updated: Arc<Mutex<Vec<ReviewRecord>>>,
    calls: Arc<Mutex<Vec<String>>>,
    liked: Arc<Mutex<bool>>,
    fail_updates: AtomicBool,
    fail_upserts: AtomicBool,
    next_id: AtomicI64,
}

impl FakeReviews {
    pub fn seed_reviews(&self, reviews: Vec<ReviewRecord>) {
        *self.reviews.lock().unwrap() = reviews;
    }

    pub fn set_summary(&self, summary: RatingSummary) {
        *self.summary.lock().unwrap() = Some(summary);
    }

    pub fn fail_updates(&self) {
        self.fail_updates.store(true, Ordering::SeqCst);
    }

    pub fn fail_upserts(&self) {
        self.fail_upserts.store(true, Ordering::SeqCst);
    }

    pub fn calls_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }

    pub fn submitted_handle(&self) -> Arc<Mutex<Vec<ReviewDraft>>> {
        Arc::clone(&self.submitted)
    }

    pub fn updated_handle(&self) -> Arc<Mutex<Vec<ReviewRecord>>> {
        Arc::clone(&self.updated)
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }

    fn rejected() -> GatewayError {
        GatewayError::rejected(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[async_trait]
impl ReviewGateway for FakeReviews {
    async fn upsert_movie(&self, _movie: &MovieRecord) -> Result<(), GatewayError> {
        self.record("upsert_movie");
        if self.fail_upserts.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }
        Ok(())
    }

    async fn submit_review(
        &self,
        session: &SessionIdentity,
        tmdb_id: u64,
        draft: &ReviewDraft,
    ) -> Result<(), GatewayError> {
        self.record("submit_review");
        self.submitted.lock().unwrap().push(draft.clone());

        let id = 100 + self.next_id.fetch_add(1, Ordering::SeqCst);
        self.reviews.lock().unwrap().push(ReviewRecord {
            id,
            member_id: session.member_id.clone(),
            movie_id: tmdb_id,
            content: draft.content.clone(),
            rating: draft.rating.to_string(),
            emotions: draft.emotions.clone(),
            media_url: draft.media_url.clone(),
            highlight_quote: draft.highlight_quote.clone(),
            highlight_image_url: draft.highlight_image_url.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn update_review(
        &self,
        _session: &SessionIdentity,
        review: &ReviewRecord,
    ) -> Result<(), GatewayError> {
        self.record("update_review");
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }
        self.updated.lock().unwrap().push(review.clone());
        let mut reviews = self.reviews.lock().unwrap();
        if let Some(stored) = reviews.iter_mut().find(|r| r.id == review.id) {
            *stored = review.clone();
        }
        Ok(())
    }

    async fn delete_review(
        &self,
        _session: &SessionIdentity,
        review_id: i64,
    ) -> Result<(), GatewayError> {
        self.record("delete_review");
        self.reviews.lock().unwrap().retain(|r| r.id != review_id);
        Ok(())
    }

    async fn toggle_like(
        &self,
        _session: &SessionIdentity,
        _tmdb_id: u64,
    ) -> Result<bool, GatewayError> {
        self.record("toggle_like");
        let mut liked = self.liked.lock().unwrap();
        *liked = !*liked;
        Ok(*liked)
    }

    async fn reviews_for_movie(&self, tmdb_id: u64) -> Result<Vec<ReviewRecord>, GatewayError> {
        self.record("reviews_for_movie");
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.movie_id == tmdb_id)
            .cloned()
            .collect())
    }

    async fn rating_summary(&self, _tmdb_id: u64) -> Result<Option<RatingSummary>, GatewayError> {
        self.record("rating_summary");
        Ok(self.summary.lock().unwrap().clone())
    }

    async fn reviews_for_member(
        &self,
        member_id: &str,
    ) -> Result<Vec<ReviewRecord>, GatewayError> {
        self.record("reviews_for_member");
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.member_id == member_id)
            .cloned()
            .collect())
    }
}
