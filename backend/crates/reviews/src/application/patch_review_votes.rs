//! Patch Review Votes Use Case

use crate::domain::entities::Review;
use crate::domain::repository::ReviewRepository;
use crate::error::{ReviewsError, ReviewsResult};
use std::sync::Arc;

/// Patch Review Votes Use Case
///
/// The delta may be negative; no floor is enforced. The update itself
/// is a single relative statement in the store, which is what makes
/// concurrent patches against the same review safe.
pub struct PatchReviewVotesUseCase<R>
where
    R: ReviewRepository,
{
    review_repo: Arc<R>,
}

impl<R> PatchReviewVotesUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repo: Arc<R>) -> Self {
        Self { review_repo }
    }

    pub async fn execute(&self, review_id: i32, inc_votes: i32) -> ReviewsResult<Review> {
        let review = self
            .review_repo
            .increment_votes(review_id, inc_votes)
            .await?
            .ok_or(ReviewsError::ReviewNotFound)?;

        tracing::info!(
            review_id = review.review_id,
            delta = inc_votes,
            votes = review.votes,
            "Review votes updated"
        );

        Ok(review)
    }
}
