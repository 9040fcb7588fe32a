//! Post Comment Use Case

use crate::domain::entities::Comment;
use crate::domain::repository::{CommentRepository, ReviewRepository, UserRepository};
use crate::error::{ReviewsError, ReviewsResult};
use std::sync::Arc;

/// Input DTO for post comment
#[derive(Debug, Clone)]
pub struct PostCommentInput {
    pub review_id: i32,
    pub username: String,
    pub body: String,
}

/// Post Comment Use Case
///
/// Referential validation happens before the insert: an unknown author
/// or review is a not-found outcome, never a constraint violation
/// surfacing from the store.
pub struct PostCommentUseCase<R, C, U>
where
    R: ReviewRepository,
    C: CommentRepository,
    U: UserRepository,
{
    review_repo: Arc<R>,
    comment_repo: Arc<C>,
    user_repo: Arc<U>,
}

impl<R, C, U> PostCommentUseCase<R, C, U>
where
    R: ReviewRepository,
    C: CommentRepository,
    U: UserRepository,
{
    pub fn new(review_repo: Arc<R>, comment_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            review_repo,
            comment_repo,
            user_repo,
        }
    }

    pub async fn execute(&self, input: PostCommentInput) -> ReviewsResult<Comment> {
        if !self.user_repo.exists(&input.username).await? {
            return Err(ReviewsError::UserNotFound);
        }

        if self.review_repo.find_by_id(input.review_id).await?.is_none() {
            return Err(ReviewsError::ReviewNotFound);
        }

        let comment = self
            .comment_repo
            .insert(input.review_id, &input.username, &input.body)
            .await?;

        tracing::info!(
            comment_id = comment.comment_id,
            review_id = comment.review_id,
            author = %comment.author,
            "Comment created"
        );

        Ok(comment)
    }
}
