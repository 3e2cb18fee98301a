use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryTreeDto;
use crate::features::categories::models::{
    Breadcrumb, Category, CategoryListModel, CategoryListOptions,
};
use crate::features::categories::services::breadcrumb::BreadcrumbComposer;
use crate::features::categories::services::category_store::CategoryStore;
use crate::features::categories::services::list_assembler::CategoryListAssembler;
use crate::shared::constants::ROOT_PARENT_ID;

/// Service for category listing and breadcrumb operations
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

/// Listing order: display order ascending, then id ascending
fn sort_for_display(categories: &mut [Category]) {
    categories.sort_by_key(|c| (c.display_order, c.id));
}

/// Apply the parent and name filters of `options` to a snapshot, in listing order
fn select_listing(snapshot: &[Category], options: &CategoryListOptions) -> Vec<Category> {
    let wanted_parent = options
        .parent_id
        .map(|id| Some(id).filter(|&id| id != ROOT_PARENT_ID));
    let term = options
        .name_contains
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let mut categories: Vec<Category> = snapshot
        .iter()
        .filter(|c| wanted_parent.map_or(true, |parent| c.parent() == parent))
        .filter(|c| {
            term.as_deref()
                .map_or(true, |term| c.name.to_lowercase().contains(term))
        })
        .cloned()
        .collect();

    sort_for_display(&mut categories);
    categories
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// List categories in display order, honoring the listing filters of `options`
    pub async fn get_categories(&self, options: &CategoryListOptions) -> Result<Vec<Category>> {
        let snapshot = self.store.get_all().await?;
        Ok(select_listing(&snapshot, options))
    }

    /// Ordered listing plus per-row breadcrumbs when requested.
    ///
    /// Rows and breadcrumbs come from a single `get_all` read.
    pub async fn list_model(&self, options: &CategoryListOptions) -> Result<CategoryListModel> {
        let snapshot = self.store.get_all().await?;
        let categories = select_listing(&snapshot, options);
        let model = CategoryListAssembler::assemble(categories, &snapshot, options);

        if !model.is_empty() && model.unavailable_count() > 0 {
            tracing::warn!(
                "Category listing rendered with {} of {} breadcrumbs unavailable",
                model.unavailable_count(),
                model.len()
            );
        }

        Ok(model)
    }

    pub async fn get_category(&self, id: i64) -> Result<Category> {
        self.store.get_by_id(id).await
    }

    /// Direct children of an existing category
    pub async fn get_children(&self, id: i64) -> Result<Vec<Category>> {
        // First verify the parent exists
        let parent = self.store.get_by_id(id).await?;

        let mut children = self.store.get_by_parent_id(Some(parent.id)).await?;
        sort_for_display(&mut children);
        Ok(children)
    }

    pub async fn compose_breadcrumb(
        &self,
        id: i64,
        options: &CategoryListOptions,
    ) -> Result<Breadcrumb> {
        let snapshot = self.store.get_all().await?;
        let breadcrumb = BreadcrumbComposer::new(&snapshot).compose(id, options)?;
        Ok(breadcrumb)
    }

    /// All categories as tree structure
    pub async fn category_tree(&self) -> Result<Vec<CategoryTreeDto>> {
        let categories = self.get_categories(&CategoryListOptions::default()).await?;
        Ok(CategoryTreeDto::build_tree(&categories))
    }
}
