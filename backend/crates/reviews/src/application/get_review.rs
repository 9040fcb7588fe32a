//! Get Review Use Case

use crate::domain::entities::Review;
use crate::domain::repository::ReviewRepository;
use crate::error::{ReviewsError, ReviewsResult};
use std::sync::Arc;

/// Get Review Use Case
pub struct GetReviewUseCase<R>
where
    R: ReviewRepository,
{
    review_repo: Arc<R>,
}

impl<R> GetReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repo: Arc<R>) -> Self {
        Self { review_repo }
    }

    /// Look up a review by its (already validated) id
    pub async fn execute(&self, review_id: i32) -> ReviewsResult<Review> {
        self.review_repo
            .find_by_id(review_id)
            .await?
            .ok_or(ReviewsError::ReviewNotFound)
    }
}
