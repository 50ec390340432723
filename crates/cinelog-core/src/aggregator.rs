use cinelog_gateways::{MetadataGateway, ReviewGateway};
use cinelog_models::{MovieRecord, RatingSummary, ReviewDraft, ReviewRecord, SessionIdentity};
use tracing::{debug, warn};

use crate::error::CoreError;

/// One movie merged from both stores: provider metadata, the backend
/// rating aggregate, and the review list.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailView {
    pub movie: MovieRecord,
    pub summary: RatingSummary,
    pub reviews: Vec<ReviewRecord>,
}

/// Refreshed state after a successful review submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub summary: RatingSummary,
    pub reviews: Vec<ReviewRecord>,
}

/// Composes the metadata and review gateways into the detail view and the
/// save-review flow. The three detail fetches are independent round-trips
/// with no shared transaction; every call re-fetches.
pub struct MovieAggregator<M, R> {
    metadata: M,
    reviews: R,
}

impl<M, R> MovieAggregator<M, R>
where
    M: MetadataGateway,
    R: ReviewGateway,
{
    pub fn new(metadata: M, reviews: R) -> Self {
        Self { metadata, reviews }
    }

    /// Movie metadata, then rating summary, then reviews. An absent
    /// summary renders the zero-state rather than erroring; the summary
    /// and the review list can legitimately disagree when another client
    /// writes between the fetches.
    pub async fn load_detail(&self, tmdb_id: u64) -> Result<MovieDetailView, CoreError> {
        let mut movie = self
            .metadata
            .movie_by_id(tmdb_id)
            .await?
            .ok_or(CoreError::MovieNotFound(tmdb_id))?;

        let summary = self
            .reviews
            .rating_summary(tmdb_id)
            .await?
            .unwrap_or_else(|| RatingSummary::empty(tmdb_id));
        movie.rating_average = summary.average_rating;

        let reviews = self.reviews.reviews_for_movie(tmdb_id).await?;
        debug!(
            "detail for movie {}: avg {}, {} reviews",
            tmdb_id, summary.average_rating, reviews.len()
        );

        Ok(MovieDetailView {
            movie,
            summary,
            reviews,
        })
    }

    /// Validate, make sure the backend knows the movie, submit, then
    /// refresh the summary and the review list. The movie upsert is best
    /// effort: if it fails the submission is still attempted, with no
    /// rollback and no abort.
    pub async fn save_review(
        &self,
        session: Option<&SessionIdentity>,
        tmdb_id: u64,
        draft: &ReviewDraft,
    ) -> Result<SaveOutcome, CoreError> {
        if draft.is_empty() {
            return Err(CoreError::EmptyDraft);
        }
        let session = session.ok_or(CoreError::NoSession)?;

        let mut draft = draft.clone();
        match self.metadata.movie_by_id(tmdb_id).await {
            Ok(Some(movie)) => {
                if draft.title.is_empty() {
                    draft.title = movie.title.clone();
                }
                if let Err(err) = self.reviews.upsert_movie(&movie).await {
                    warn!("movie upsert failed for {}, submitting anyway: {}", tmdb_id, err);
                }
            }
            Ok(None) => {
                warn!("movie {} not resolvable before submit; submitting anyway", tmdb_id);
            }
            Err(err) => {
                warn!("movie lookup failed for {}, submitting anyway: {}", tmdb_id, err);
            }
        }

        self.reviews.submit_review(session, tmdb_id, &draft).await?;

        let summary = self
            .reviews
            .rating_summary(tmdb_id)
            .await?
            .unwrap_or_else(|| RatingSummary::empty(tmdb_id));
        let reviews = self.reviews.reviews_for_movie(tmdb_id).await?;

        Ok(SaveOutcome { summary, reviews })
    }

    /// Gated like toggle; returns the new liked state.
    pub async fn toggle_like(
        &self,
        session: Option<&SessionIdentity>,
        tmdb_id: u64,
    ) -> Result<bool, CoreError> {
        let session = session.ok_or(CoreError::NoSession)?;
        Ok(self.reviews.toggle_like(session, tmdb_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{movie, FakeMetadata, FakeReviews};

    fn session() -> SessionIdentity {
        SessionIdentity::new("jwt", "alice")
    }

    #[tokio::test]
    async fn test_load_detail_merges_summary_into_movie() {
        let metadata = FakeMetadata::with_movies(vec![movie(603, "The Matrix")]);
        let reviews = FakeReviews::default();
        reviews.set_summary(RatingSummary {
            tmdb_id: 603,
            average_rating: 4.2,
            total_reviews: 9,
            ..Default::default()
        });

        let aggregator = MovieAggregator::new(metadata, reviews);
        let view = aggregator.load_detail(603).await.unwrap();
        assert_eq!(view.movie.rating_average, 4.2);
        assert_eq!(view.summary.total_reviews, 9);
    }

    #[tokio::test]
    async fn test_load_detail_absent_summary_is_zero_state() {
        // Backend answered 404 for the summary; the gateway maps that to
        // None and the view must render zeros, never error.
        let metadata = FakeMetadata::with_movies(vec![movie(603, "The Matrix")]);
        let reviews = FakeReviews::default();

        let aggregator = MovieAggregator::new(metadata, reviews);
        let view = aggregator.load_detail(603).await.unwrap();
        assert_eq!(view.summary.average_rating, 0.0);
        assert_eq!(view.summary.total_reviews, 0);
        assert_eq!(view.movie.rating_average, 0.0);
    }

    #[tokio::test]
    async fn test_load_detail_unknown_movie() {
        let aggregator = MovieAggregator::new(FakeMetadata::default(), FakeReviews::default());
        let result = aggregator.load_detail(42).await;
        assert!(matches!(result, Err(CoreError::MovieNotFound(42))));
    }

    #[tokio::test]
    async fn test_save_review_rejects_empty_draft_before_any_call() {
        let metadata = FakeMetadata::with_movies(vec![movie(603, "The Matrix")]);
        let reviews = FakeReviews::default();
        let calls = reviews.calls_handle();

        let aggregator = MovieAggregator::new(metadata, reviews);
        let result = aggregator
            .save_review(Some(&session()), 603, &ReviewDraft::default())
            .await;

        assert!(matches!(result, Err(CoreError::EmptyDraft)));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_review_requires_session_before_any_call() {
        let metadata = FakeMetadata::with_movies(vec![movie(603, "The Matrix")]);
        let reviews = FakeReviews::default();
        let calls = reviews.calls_handle();

        let aggregator = MovieAggregator::new(metadata, reviews);
        let draft = ReviewDraft {
            rating: 4,
            ..Default::default()
        };
        let result = aggregator.save_review(None, 603, &draft).await;

        assert!(matches!(result, Err(CoreError::NoSession)));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_review_continues_past_failed_upsert() {
        let metadata = FakeMetadata::with_movies(vec![movie(603, "The Matrix")]);
        let reviews = FakeReviews::default();
        reviews.fail_upserts();
        let calls = reviews.calls_handle();

        let aggregator = MovieAggregator::new(metadata, reviews);
        let draft = ReviewDraft {
            rating: 5,
            content: "rewatched".to_string(),
            ..Default::default()
        };
        let outcome = aggregator.save_review(Some(&session()), 603, &draft).await.unwrap();

        assert_eq!(outcome.reviews.len(), 1);
        let calls = calls.lock().unwrap();
        assert!(calls.contains(&"upsert_movie".to_string()));
        assert!(calls.contains(&"submit_review".to_string()));
    }

    #[tokio::test]
    async fn test_save_review_fills_title_from_metadata() {
        let metadata = FakeMetadata::with_movies(vec![movie(603, "The Matrix")]);
        let reviews = FakeReviews::default();
        let submitted = reviews.submitted_handle();

        let aggregator = MovieAggregator::new(metadata, reviews);
        let draft = ReviewDraft {
            rating: 4,
            ..Default::default()
        };
        aggregator.save_review(Some(&session()), 603, &draft).await.unwrap();

        assert_eq!(submitted.lock().unwrap()[0].title, "The Matrix");
    }

    #[tokio::test]
    async fn test_toggle_like_requires_session() {
        let aggregator = MovieAggregator::new(FakeMetadata::default(), FakeReviews::default());
        let result = aggregator.toggle_like(None, 603).await;
        assert!(matches!(result, Err(CoreError::NoSession)));
    }

    #[tokio::test]
    async fn test_toggle_like_flips_state() {
        let aggregator = MovieAggregator::new(FakeMetadata::default(), FakeReviews::default());
        assert!(aggregator.toggle_like(Some(&session()), 603).await.unwrap());
        assert!(!aggregator.toggle_like(Some(&session()), 603).await.unwrap());
    }
}
