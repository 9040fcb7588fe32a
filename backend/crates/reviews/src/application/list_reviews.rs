//! List Reviews Use Case

use crate::domain::entities::ReviewWithCommentCount;
use crate::domain::repository::ReviewRepository;
use crate::error::ReviewsResult;
use std::sync::Arc;

/// List Reviews Use Case
///
/// Returns every review with its derived comment count, newest first.
/// The ordering and the count both come from the store query.
pub struct ListReviewsUseCase<R>
where
    R: ReviewRepository,
{
    review_repo: Arc<R>,
}

impl<R> ListReviewsUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repo: Arc<R>) -> Self {
        Self { review_repo }
    }

    pub async fn execute(&self) -> ReviewsResult<Vec<ReviewWithCommentCount>> {
        self.review_repo.list_with_comment_counts().await
    }
}
