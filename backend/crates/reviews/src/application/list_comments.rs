//! List Comments Use Case

use crate::domain::entities::Comment;
use crate::domain::repository::{CommentRepository, ReviewRepository};
use crate::error::{ReviewsError, ReviewsResult};
use std::sync::Arc;

/// List Comments Use Case
///
/// The review's existence is checked first: an existing review with no
/// comments yields an empty list, an absent review yields not-found.
pub struct ListCommentsUseCase<R, C>
where
    R: ReviewRepository,
    C: CommentRepository,
{
    review_repo: Arc<R>,
    comment_repo: Arc<C>,
}

impl<R, C> ListCommentsUseCase<R, C>
where
    R: ReviewRepository,
    C: CommentRepository,
{
    pub fn new(review_repo: Arc<R>, comment_repo: Arc<C>) -> Self {
        Self {
            review_repo,
            comment_repo,
        }
    }

    pub async fn execute(&self, review_id: i32) -> ReviewsResult<Vec<Comment>> {
        if self.review_repo.find_by_id(review_id).await?.is_none() {
            return Err(ReviewsError::ReviewNotFound);
        }

        self.comment_repo.list_for_review(review_id).await
    }
}
