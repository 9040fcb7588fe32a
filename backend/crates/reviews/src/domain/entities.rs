//! Domain Entities
//!
//! Rows of the review store as the API exposes them. Field names are
//! the store's column names, unchanged; entities serialize directly
//! into the response envelopes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Category entity - a board-game genre, keyed by slug
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

/// Review entity
///
/// `votes` is the only field this API ever mutates, and only by
/// relative delta (no floor or ceiling).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// Review entity augmented with its derived comment count
///
/// Produced only by the list query; the single-review lookup returns
/// the plain [`Review`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewWithCommentCount {
    pub review_id: i32,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

/// Comment entity
///
/// Created through the API with server-assigned id, zero votes and a
/// current timestamp; never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub comment_id: i32,
    pub review_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}
