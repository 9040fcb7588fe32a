//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{Category, Comment, Review, ReviewWithCommentCount};
use crate::domain::repository::{
    CategoryRepository, CommentRepository, ReviewRepository, UserRepository,
};
use crate::error::ReviewsResult;

/// PostgreSQL-backed review store repository
///
/// Every statement is parameterized; caller-supplied values only ever
/// travel through binds.
#[derive(Clone)]
pub struct PgReviewsRepository {
    pool: PgPool,
}

impl PgReviewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for PgReviewsRepository {
    async fn list(&self) -> ReviewsResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT slug, description FROM categories
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }
}

impl ReviewRepository for PgReviewsRepository {
    async fn list_with_comment_counts(&self) -> ReviewsResult<Vec<ReviewWithCommentCount>> {
        let rows = sqlx::query_as::<_, ReviewWithCommentCountRow>(
            r#"
            SELECT
                r.review_id,
                r.title,
                r.designer,
                r.owner,
                r.review_img_url,
                r.review_body,
                r.category,
                r.created_at,
                r.votes,
                COUNT(c.comment_id) AS comment_count
            FROM reviews r
            LEFT JOIN comments c ON c.review_id = r.review_id
            GROUP BY r.review_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_review()).collect())
    }

    async fn find_by_id(&self, review_id: i32) -> ReviewsResult<Option<Review>> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT
                review_id,
                title,
                designer,
                owner,
                review_img_url,
                review_body,
                category,
                created_at,
                votes
            FROM reviews
            WHERE review_id = $1
            "#,
        )
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_review()))
    }

    async fn increment_votes(&self, review_id: i32, delta: i32) -> ReviewsResult<Option<Review>> {
        // Relative update in one statement; the store serializes
        // concurrent deltas, so no read-modify-write here.
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            UPDATE reviews
            SET votes = votes + $2
            WHERE review_id = $1
            RETURNING
                review_id,
                title,
                designer,
                owner,
                review_img_url,
                review_body,
                category,
                created_at,
                votes
            "#,
        )
        .bind(review_id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_review()))
    }
}

impl CommentRepository for PgReviewsRepository {
    async fn list_for_review(&self, review_id: i32) -> ReviewsResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                comment_id,
                review_id,
                author,
                body,
                votes,
                created_at
            FROM comments
            WHERE review_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(review_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn insert(&self, review_id: i32, author: &str, body: &str) -> ReviewsResult<Comment> {
        // comment_id, votes and created_at are server-assigned
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (review_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING
                comment_id,
                review_id,
                author,
                body,
                votes,
                created_at
            "#,
        )
        .bind(review_id)
        .bind(author)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_comment())
    }
}

impl UserRepository for PgReviewsRepository {
    async fn exists(&self, username: &str) -> ReviewsResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CategoryRow {
    slug: String,
    description: String,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            slug: self.slug,
            description: self.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    review_id: i32,
    title: String,
    designer: String,
    owner: String,
    review_img_url: String,
    review_body: String,
    category: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

impl ReviewRow {
    fn into_review(self) -> Review {
        Review {
            review_id: self.review_id,
            title: self.title,
            designer: self.designer,
            owner: self.owner,
            review_img_url: self.review_img_url,
            review_body: self.review_body,
            category: self.category,
            created_at: self.created_at,
            votes: self.votes,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewWithCommentCountRow {
    review_id: i32,
    title: String,
    designer: String,
    owner: String,
    review_img_url: String,
    review_body: String,
    category: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
}

impl ReviewWithCommentCountRow {
    fn into_review(self) -> ReviewWithCommentCount {
        ReviewWithCommentCount {
            review_id: self.review_id,
            title: self.title,
            designer: self.designer,
            owner: self.owner,
            review_img_url: self.review_img_url,
            review_body: self.review_body,
            category: self.category,
            created_at: self.created_at,
            votes: self.votes,
            comment_count: self.comment_count,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: i32,
    review_id: i32,
    author: String,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: self.comment_id,
            review_id: self.review_id,
            author: self.author,
            body: self.body,
            votes: self.votes,
            created_at: self.created_at,
        }
    }
}
