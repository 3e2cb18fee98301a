use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::config::CatalogConfig;
use crate::features::categories::models::{
    Breadcrumb, BreadcrumbEntry, BreadcrumbSegment, Category, CategoryListItem,
    CategoryListOptions,
};
use crate::shared::constants::{MAX_BREADCRUMB_SEPARATOR_LEN, MAX_NAME_FILTER_LEN};
use crate::shared::types::PaginationQuery;
use crate::shared::validation::validate_separator;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            parent_id: c.parent(),
            id: c.id,
            name: c.name,
            description: c.description,
            display_order: c.display_order,
        }
    }
}

/// Response DTO for category tree (hierarchical structure)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct CategoryTreeDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub children: Vec<CategoryTreeDto>,
}

impl CategoryTreeDto {
    /// Build tree from flat list of categories, keeping the input order among siblings.
    ///
    /// Only nodes reachable from a root are included, so a parent cycle
    /// never recurses.
    pub fn build_tree(categories: &[Category]) -> Vec<CategoryTreeDto> {
        categories
            .iter()
            .filter(|c| c.is_root())
            .map(|root| Self::build_node(root, categories))
            .collect()
    }

    fn build_node(category: &Category, all_categories: &[Category]) -> CategoryTreeDto {
        let children: Vec<CategoryTreeDto> = all_categories
            .iter()
            .filter(|c| c.parent() == Some(category.id) && c.id != category.id)
            .map(|child| Self::build_node(child, all_categories))
            .collect();

        CategoryTreeDto {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            display_order: category.display_order,
            children,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbSegmentDto {
    pub id: i64,
    pub name: String,
}

impl From<BreadcrumbSegment> for BreadcrumbSegmentDto {
    fn from(s: BreadcrumbSegment) -> Self {
        Self {
            id: s.id,
            name: s.name,
        }
    }
}

/// Response DTO for a single category breadcrumb
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbResponseDto {
    pub category_id: i64,
    pub text: String,
    pub segments: Vec<BreadcrumbSegmentDto>,
}

impl BreadcrumbResponseDto {
    pub fn new(category_id: i64, breadcrumb: Breadcrumb) -> Self {
        Self {
            category_id,
            text: breadcrumb.text,
            segments: breadcrumb.segments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Breadcrumb slot of a listing row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BreadcrumbStateDto {
    Rendered {
        text: String,
        segments: Vec<BreadcrumbSegmentDto>,
    },
    Unavailable {
        reason: String,
    },
}

impl From<BreadcrumbEntry> for BreadcrumbStateDto {
    fn from(entry: BreadcrumbEntry) -> Self {
        match entry {
            BreadcrumbEntry::Rendered(b) => Self::Rendered {
                text: b.text,
                segments: b.segments.into_iter().map(Into::into).collect(),
            },
            BreadcrumbEntry::Unavailable { reason } => Self::Unavailable { reason },
        }
    }
}

/// One row of the category listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListItemDto {
    pub category: CategoryResponseDto,
    /// Absent unless `prepare_breadcrumb=true`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<BreadcrumbStateDto>,
}

impl From<CategoryListItem> for CategoryListItemDto {
    fn from(item: CategoryListItem) -> Self {
        Self {
            category: item.category.into(),
            breadcrumb: item.breadcrumb.map(Into::into),
        }
    }
}

/// Query params for listing categories
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ListCategoriesQuery {
    /// Attach a breadcrumb to every row (default: false)
    pub prepare_breadcrumb: Option<bool>,

    /// Text placed between breadcrumb segments (default from server config)
    #[validate(
        length(min = 1, max = MAX_BREADCRUMB_SEPARATOR_LEN),
        custom(function = validate_separator)
    )]
    pub breadcrumb_separator: Option<String>,

    /// Maximum number of ancestors; 0 or negative means unlimited
    pub breadcrumb_deep_level: Option<i32>,

    /// Show only the immediate parent
    pub breadcrumb_parent_only: Option<bool>,

    /// Restrict to direct children of this category
    pub parent_id: Option<i64>,

    /// Case-insensitive name filter
    #[validate(length(max = MAX_NAME_FILTER_LEN))]
    pub name: Option<String>,

    /// Page number (1-indexed, default: 1)
    #[param(minimum = 1)]
    pub page: Option<i64>,

    /// Number of items per page (default: 10, max: 100)
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl ListCategoriesQuery {
    /// Merge request overrides onto the configured defaults
    pub fn into_options(self, defaults: &CatalogConfig) -> (CategoryListOptions, PaginationQuery) {
        let base = CategoryListOptions::from_config(defaults);
        let options = CategoryListOptions {
            prepare_breadcrumb: self.prepare_breadcrumb.unwrap_or(base.prepare_breadcrumb),
            breadcrumb_separator: self
                .breadcrumb_separator
                .unwrap_or(base.breadcrumb_separator),
            breadcrumb_deep_level: self
                .breadcrumb_deep_level
                .unwrap_or(base.breadcrumb_deep_level),
            breadcrumb_parent_only: self
                .breadcrumb_parent_only
                .unwrap_or(base.breadcrumb_parent_only),
            parent_id: self.parent_id,
            name_contains: self.name,
        };

        let mut pagination = PaginationQuery::default();
        if let Some(page) = self.page {
            pagination.page = page;
        }
        if let Some(page_size) = self.page_size {
            pagination.page_size = page_size;
        }

        (options, pagination)
    }
}

/// Query params for a single breadcrumb
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct BreadcrumbQuery {
    #[validate(
        length(min = 1, max = MAX_BREADCRUMB_SEPARATOR_LEN),
        custom(function = validate_separator)
    )]
    pub separator: Option<String>,

    /// Maximum number of ancestors; 0 or negative means unlimited
    pub deep_level: Option<i32>,

    pub parent_only: Option<bool>,
}

impl BreadcrumbQuery {
    pub fn into_options(self, defaults: &CatalogConfig) -> CategoryListOptions {
        let base = CategoryListOptions::from_config(defaults);
        CategoryListOptions {
            prepare_breadcrumb: true,
            breadcrumb_separator: self.separator.unwrap_or(base.breadcrumb_separator),
            breadcrumb_deep_level: self.deep_level.unwrap_or(base.breadcrumb_deep_level),
            breadcrumb_parent_only: self.parent_only.unwrap_or(base.breadcrumb_parent_only),
            parent_id: None,
            name_contains: None,
        }
    }
}
