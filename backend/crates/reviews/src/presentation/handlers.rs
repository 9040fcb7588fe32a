//! HTTP Handlers
//!
//! One handler per route, each running the same pipeline: path
//! validation, body validation, use case dispatch, envelope shaping.
//! Both validations complete before any store access.

use crate::application::get_review::GetReviewUseCase;
use crate::application::list_categories::ListCategoriesUseCase;
use crate::application::list_comments::ListCommentsUseCase;
use crate::application::list_reviews::ListReviewsUseCase;
use crate::application::patch_review_votes::PatchReviewVotesUseCase;
use crate::application::post_comment::{PostCommentInput, PostCommentUseCase};
use crate::domain::repository::{
    CategoryRepository, CommentRepository, ReviewRepository, UserRepository,
};
use crate::error::{ReviewsError, ReviewsResult};
use crate::presentation::dto::{
    CategoriesResponse, CommentsResponse, CreateCommentRequest, NewCommentResponse,
    PatchReviewRequest, ReviewResponse, ReviewsResponse,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use std::sync::Arc;

/// Shared state for review handlers
#[derive(Clone)]
pub struct ReviewsAppState<R>
where
    R: CategoryRepository
        + ReviewRepository
        + CommentRepository
        + UserRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
}

/// Parse the `{review_id}` path segment
///
/// The segment is extracted as a string so a non-integer id yields the
/// canonical 400 instead of a path-extractor rejection.
fn parse_review_id(raw: &str) -> ReviewsResult<i32> {
    raw.parse::<i32>().map_err(|_| ReviewsError::InvalidReviewId)
}

/// GET /api/categories
pub async fn list_categories<R>(
    State(state): State<ReviewsAppState<R>>,
) -> ReviewsResult<Json<CategoriesResponse>>
where
    R: CategoryRepository
        + ReviewRepository
        + CommentRepository
        + UserRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListCategoriesUseCase::new(state.repo.clone());

    let categories = use_case.execute().await?;

    Ok(Json(CategoriesResponse { categories }))
}

/// GET /api/reviews
pub async fn list_reviews<R>(
    State(state): State<ReviewsAppState<R>>,
) -> ReviewsResult<Json<ReviewsResponse>>
where
    R: CategoryRepository
        + ReviewRepository
        + CommentRepository
        + UserRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListReviewsUseCase::new(state.repo.clone());

    let reviews = use_case.execute().await?;

    Ok(Json(ReviewsResponse { reviews }))
}

/// GET /api/reviews/{review_id}
pub async fn get_review<R>(
    State(state): State<ReviewsAppState<R>>,
    Path(review_id): Path<String>,
) -> ReviewsResult<Json<ReviewResponse>>
where
    R: CategoryRepository
        + ReviewRepository
        + CommentRepository
        + UserRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let review_id = parse_review_id(&review_id)?;

    let use_case = GetReviewUseCase::new(state.repo.clone());

    let review = use_case.execute(review_id).await?;

    Ok(Json(ReviewResponse { review }))
}

/// GET /api/reviews/{review_id}/comments
pub async fn list_comments<R>(
    State(state): State<ReviewsAppState<R>>,
    Path(review_id): Path<String>,
) -> ReviewsResult<Json<CommentsResponse>>
where
    R: CategoryRepository
        + ReviewRepository
        + CommentRepository
        + UserRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let review_id = parse_review_id(&review_id)?;

    let use_case = ListCommentsUseCase::new(state.repo.clone(), state.repo.clone());

    let comments = use_case.execute(review_id).await?;

    Ok(Json(CommentsResponse { comments }))
}

/// POST /api/reviews/{review_id}/comments
pub async fn post_comment<R>(
    State(state): State<ReviewsAppState<R>>,
    Path(review_id): Path<String>,
    Json(body): Json<Value>,
) -> ReviewsResult<impl IntoResponse>
where
    R: CategoryRepository
        + ReviewRepository
        + CommentRepository
        + UserRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let review_id = parse_review_id(&review_id)?;

    let req: CreateCommentRequest =
        serde_json::from_value(body).map_err(|_| ReviewsError::InvalidBody)?;

    let use_case =
        PostCommentUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let comment = use_case
        .execute(PostCommentInput {
            review_id,
            username: req.username,
            body: req.body,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NewCommentResponse {
            new_comment: comment,
        }),
    ))
}

/// PATCH /api/reviews/{review_id}
pub async fn patch_review_votes<R>(
    State(state): State<ReviewsAppState<R>>,
    Path(review_id): Path<String>,
    Json(body): Json<Value>,
) -> ReviewsResult<Json<ReviewResponse>>
where
    R: CategoryRepository
        + ReviewRepository
        + CommentRepository
        + UserRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let review_id = parse_review_id(&review_id)?;

    let req: PatchReviewRequest =
        serde_json::from_value(body).map_err(|_| ReviewsError::InvalidBody)?;

    let use_case = PatchReviewVotesUseCase::new(state.repo.clone());

    let review = use_case.execute(review_id, req.inc_votes).await?;

    Ok(Json(ReviewResponse { review }))
}

/// Catch-all for unmatched routes
///
/// "Route does not exist" and "resource does not exist" share one
/// observable body; only the log distinguishes them.
pub async fn path_not_found() -> ReviewsError {
    ReviewsError::RouteNotFound
}
