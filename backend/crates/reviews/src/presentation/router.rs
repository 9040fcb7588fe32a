//! Reviews Router
//!
//! Method misses on a matched path fall back to the same not-found
//! handler as unmatched paths; the surface never exposes a bare 405.

use crate::domain::repository::{
    CategoryRepository, CommentRepository, ReviewRepository, UserRepository,
};
use crate::infra::postgres::PgReviewsRepository;
use crate::presentation::handlers::{self, ReviewsAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the reviews router with PostgreSQL repository
pub fn reviews_router(repo: PgReviewsRepository) -> Router {
    let state = ReviewsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories::<PgReviewsRepository>),
        )
        .route("/reviews", get(handlers::list_reviews::<PgReviewsRepository>))
        .route(
            "/reviews/{review_id}",
            get(handlers::get_review::<PgReviewsRepository>)
                .patch(handlers::patch_review_votes::<PgReviewsRepository>)
                .fallback(handlers::path_not_found),
        )
        .route(
            "/reviews/{review_id}/comments",
            get(handlers::list_comments::<PgReviewsRepository>)
                .post(handlers::post_comment::<PgReviewsRepository>)
                .fallback(handlers::path_not_found),
        )
        .with_state(state)
}

/// Create a generic reviews router for any repository implementation
pub fn reviews_router_generic<R>(repo: R) -> Router
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
    let state = ReviewsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/categories", get(handlers::list_categories::<R>))
        .route("/reviews", get(handlers::list_reviews::<R>))
        .route(
            "/reviews/{review_id}",
            get(handlers::get_review::<R>)
                .patch(handlers::patch_review_votes::<R>)
                .fallback(handlers::path_not_found),
        )
        .route(
            "/reviews/{review_id}/comments",
            get(handlers::list_comments::<R>)
                .post(handlers::post_comment::<R>)
                .fallback(handlers::path_not_found),
        )
        .with_state(state)
}
