//! API DTOs (Data Transfer Objects)
//!
//! Response envelopes wrap the entities under a named key; entity field
//! names pass through from the store unchanged. The one camelCase key
//! in the surface is the `newComment` envelope.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, Comment, Review, ReviewWithCommentCount};

/// Response for GET /api/categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// Response for GET /api/reviews
#[derive(Debug, Clone, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewWithCommentCount>,
}

/// Response for GET and PATCH /api/reviews/{review_id}
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub review: Review,
}

/// Response for GET /api/reviews/{review_id}/comments
#[derive(Debug, Clone, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// Response for POST /api/reviews/{review_id}/comments
#[derive(Debug, Clone, Serialize)]
pub struct NewCommentResponse {
    #[serde(rename = "newComment")]
    pub new_comment: Comment,
}

/// Request for POST /api/reviews/{review_id}/comments
///
/// Deserialized from the raw JSON value inside the handler: a missing
/// or wrong-typed field must map to the canonical 400 body, not to an
/// extractor rejection. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub username: String,
    pub body: String,
}

/// Request for PATCH /api/reviews/{review_id}
///
/// `inc_votes` is a signed integer delta; a JSON string or fractional
/// number fails deserialization and maps to 400.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchReviewRequest {
    pub inc_votes: i32,
}
