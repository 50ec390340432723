use cinelog_gateways::ReviewGateway;
use cinelog_models::{ReviewRecord, SessionIdentity};
use tracing::debug;

use crate::error::CoreError;

/// The subset of `reviews` owned by `member_id`. O(n) scan by equality;
/// upstream lists are tens of rows, not thousands.
pub fn filter_owned(reviews: Vec<ReviewRecord>, member_id: &str) -> Vec<ReviewRecord> {
    reviews
        .into_iter()
        .filter(|review| review.member_id == member_id)
        .collect()
}

/// Derives and maintains "my reviews" for one member: loads a movie's
/// review set, filters to the owned subset, and tracks the single
/// selected review that edit/delete operate on. Sole writer of the
/// selection.
pub struct ReviewReconciler<R> {
    gateway: R,
    member_id: String,
    mine: Vec<ReviewRecord>,
    selected: Option<i64>,
}

impl<R: ReviewGateway> ReviewReconciler<R> {
    pub fn new(gateway: R, member_id: impl Into<String>) -> Self {
        Self {
            gateway,
            member_id: member_id.into(),
            mine: Vec::new(),
            selected: None,
        }
    }

    /// Fetch the movie's full review set and keep the subset owned by this
    /// member. Refreshing always drops the selection.
    pub async fn load_mine(&mut self, tmdb_id: u64) -> Result<&[ReviewRecord], CoreError> {
        let all = self.gateway.reviews_for_movie(tmdb_id).await?;
        let total = all.len();
        self.mine = filter_owned(all, &self.member_id);
        self.selected = None;
        debug!(
            "movie {}: {} of {} reviews belong to {}",
            tmdb_id,
            self.mine.len(),
            total,
            self.member_id
        );
        Ok(&self.mine)
    }

    /// The movie-independent "my reviews" view.
    pub async fn load_all_mine(&self) -> Result<Vec<ReviewRecord>, CoreError> {
        Ok(self.gateway.reviews_for_member(&self.member_id).await?)
    }

    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.mine
    }

    pub fn selected(&self) -> Option<&ReviewRecord> {
        let id = self.selected?;
        self.mine.iter().find(|review| review.id == id)
    }

    pub fn select(&mut self, review_id: i64) -> Result<&ReviewRecord, CoreError> {
        let review = self
            .mine
            .iter()
            .find(|review| review.id == review_id)
            .ok_or(CoreError::UnknownReview(review_id))?;
        self.selected = Some(review.id);
        Ok(review)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Optimistic edit: apply the new content in memory, issue the update
    /// with the full record so stored attachments travel along, and
    /// restore the prior content if the server does not accept it.
    pub async fn edit_selected(
        &mut self,
        session: &SessionIdentity,
        new_content: &str,
    ) -> Result<(), CoreError> {
        let id = self.selected.ok_or(CoreError::NoSelection)?;
        let index = self
            .mine
            .iter()
            .position(|review| review.id == id)
            .ok_or(CoreError::NoSelection)?;

        let prior = std::mem::replace(&mut self.mine[index].content, new_content.to_string());

        let result = self
            .gateway
            .update_review(session, &self.mine[index])
            .await;

        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                self.mine[index].content = prior;
                Err(err.into())
            }
        }
    }

    /// Delete the selected review; on success it leaves the in-memory
    /// list and the selection resets.
    pub async fn delete_selected(&mut self, session: &SessionIdentity) -> Result<(), CoreError> {
        let id = self.selected.ok_or(CoreError::NoSelection)?;
        self.gateway.delete_review(session, id).await?;
        self.mine.retain(|review| review.id != id);
        self.selected = None;
        Ok(())
    }
}
