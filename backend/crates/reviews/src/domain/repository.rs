//! Repository Traits
//!
//! Interfaces for data access. Implementation is in the infrastructure
//! layer; tests inject in-memory doubles. Every operation that targets
//! a specific row reports "zero rows" as an explicit `None`/`false`,
//! distinguished from a store fault.

use crate::domain::entities::{Category, Comment, Review, ReviewWithCommentCount};
use crate::error::ReviewsResult;

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// List all categories
    async fn list(&self) -> ReviewsResult<Vec<Category>>;
}

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// List all reviews with their comment counts, newest first
    async fn list_with_comment_counts(&self) -> ReviewsResult<Vec<ReviewWithCommentCount>>;

    /// Get a review by id
    async fn find_by_id(&self, review_id: i32) -> ReviewsResult<Option<Review>>;

    /// Apply a relative vote delta atomically and return the updated row
    ///
    /// The addition happens in the store in a single statement, so
    /// concurrent deltas against the same review never lose updates.
    async fn increment_votes(&self, review_id: i32, delta: i32) -> ReviewsResult<Option<Review>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// List the comments of a review, newest first
    async fn list_for_review(&self, review_id: i32) -> ReviewsResult<Vec<Comment>>;

    /// Insert a comment and return it with server-assigned fields
    async fn insert(&self, review_id: i32, author: &str, body: &str) -> ReviewsResult<Comment>;
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Check whether a username exists
    async fn exists(&self, username: &str) -> ReviewsResult<bool>;
}
