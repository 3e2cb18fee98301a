use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::config::CatalogConfig;
use crate::core::error::Result;
use crate::features::categories::dtos::{
    BreadcrumbQuery, BreadcrumbResponseDto, CategoryListItemDto, CategoryResponseDto,
    CategoryTreeDto, ListCategoriesQuery,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// Shared state of the category routes
#[derive(Clone)]
pub struct CategoriesState {
    pub service: Arc<CategoryService>,
    /// Defaults merged under every request's listing options
    pub defaults: Arc<CatalogConfig>,
}

/// List categories
///
/// Ordered by display order, then id. With `prepare_breadcrumb=true` every
/// row carries its breadcrumb, or an `unavailable` marker when the parent
/// chain of that row is corrupt.
#[utoipa::path(
    get,
    path = "/api/categories",
    params(ListCategoriesQuery),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryListItemDto>>),
        (status = 400, description = "Invalid listing options"),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<CategoriesState>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<Vec<CategoryListItemDto>>>> {
    query.validate()?;
    let (options, pagination) = query.into_options(&state.defaults);

    let model = state.service.list_model(&options).await?;
    let (items, meta) = pagination.paginate(model.items);

    Ok(Json(ApiResponse::success(
        Some(items.into_iter().map(Into::into).collect()),
        None,
        Some(meta),
    )))
}

/// Category tree
#[utoipa::path(
    get,
    path = "/api/categories/tree",
    responses(
        (status = 200, description = "Category tree", body = ApiResponse<Vec<CategoryTreeDto>>),
    ),
    tag = "categories"
)]
pub async fn get_category_tree(
    State(state): State<CategoriesState>,
) -> Result<Json<ApiResponse<Vec<CategoryTreeDto>>>> {
    let tree = state.service.category_tree().await?;
    Ok(Json(ApiResponse::success(Some(tree), None, None)))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<CategoriesState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = state.service.get_category(id).await?;
    Ok(Json(ApiResponse::success(Some(category.into()), None, None)))
}

/// List direct children of a category
#[utoipa::path(
    get,
    path = "/api/categories/{id}/children",
    params(
        ("id" = i64, Path, description = "Parent category id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Child categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 404, description = "Parent category not found")
    ),
    tag = "categories"
)]
pub async fn list_children(
    State(state): State<CategoriesState>,
    Path(id): Path<i64>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let children = state.service.get_children(id).await?;
    let (page, meta) = pagination.paginate(children);

    Ok(Json(ApiResponse::success(
        Some(page.into_iter().map(Into::into).collect()),
        None,
        Some(meta),
    )))
}

/// Breadcrumb of a category
#[utoipa::path(
    get,
    path = "/api/categories/{id}/breadcrumb",
    params(
        ("id" = i64, Path, description = "Category id"),
        BreadcrumbQuery
    ),
    responses(
        (status = 200, description = "Rendered breadcrumb", body = ApiResponse<BreadcrumbResponseDto>),
        (status = 400, description = "Invalid breadcrumb options"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Parent chain is cyclic or dangling")
    ),
    tag = "categories"
)]
pub async fn get_breadcrumb(
    State(state): State<CategoriesState>,
    Path(id): Path<i64>,
    Query(query): Query<BreadcrumbQuery>,
) -> Result<Json<ApiResponse<BreadcrumbResponseDto>>> {
    query.validate()?;
    let options = query.into_options(&state.defaults);

    let breadcrumb = state.service.compose_breadcrumb(id, &options).await?;
    Ok(Json(ApiResponse::success(
        Some(BreadcrumbResponseDto::new(id, breadcrumb)),
        None,
        None,
    )))
}
