//! List Categories Use Case

use crate::domain::entities::Category;
use crate::domain::repository::CategoryRepository;
use crate::error::ReviewsResult;
use std::sync::Arc;

/// List Categories Use Case
///
/// Pure pass-through; ordering is not part of the contract.
pub struct ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self) -> ReviewsResult<Vec<Category>> {
        self.category_repo.list().await
    }
}
