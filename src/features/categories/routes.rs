use axum::{routing::get, Router};

use crate::features::categories::handlers::{self, CategoriesState};

/// Create routes for the categories feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(state: CategoriesState) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/tree", get(handlers::get_category_tree))
        .route("/api/categories/{id}", get(handlers::get_category))
        .route(
            "/api/categories/{id}/children",
            get(handlers::list_children),
        )
        .route(
            "/api/categories/{id}/breadcrumb",
            get(handlers::get_breadcrumb),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;

    use super::*;
    use crate::core::config::CatalogConfig;
    use crate::features::categories::dtos::{
        BreadcrumbResponseDto, BreadcrumbStateDto, CategoryListItemDto, CategoryResponseDto,
        CategoryTreeDto,
    };
    use crate::features::categories::models::Category;
    use crate::features::categories::services::{CategoryService, InMemoryCategoryStore};
    use crate::shared::types::ApiResponse;

    fn server(categories: Vec<Category>) -> TestServer {
        let state = CategoriesState {
            service: Arc::new(CategoryService::new(Arc::new(InMemoryCategoryStore::new(
                categories,
            )))),
            defaults: Arc::new(CatalogConfig::default()),
        };
        TestServer::new(routes(state)).unwrap()
    }

    fn catalog() -> Vec<Category> {
        vec![
            Category::new(1, "Root", 0, None),
            Category::new(2, "Shoes", 0, Some(1)),
            Category::new(3, "Sneakers", 0, Some(2)),
            Category::new(8, "Loop A", 4, Some(9)),
            Category::new(9, "Loop B", 5, Some(8)),
        ]
    }

    #[tokio::test]
    async fn test_list_without_breadcrumbs() {
        let server = server(catalog());

        let response = server.get("/api/categories").await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<CategoryListItemDto>> = response.json();
        let data = body.data.unwrap();
        assert_eq!(body.meta.unwrap().total, 5);
        assert_eq!(data[0].category.id, 1);
        assert!(data.iter().all(|item| item.breadcrumb.is_none()));
    }

    #[tokio::test]
    async fn test_list_marks_corrupt_rows_unavailable() {
        let server = server(catalog());

        let response = server
            .get("/api/categories")
            .add_query_param("prepare_breadcrumb", true)
            .add_query_param("breadcrumb_separator", " > ")
            .await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<CategoryListItemDto>> = response.json();
        let data = body.data.unwrap();
        assert_eq!(data.len(), 5);

        match &data[2].breadcrumb {
            Some(BreadcrumbStateDto::Rendered { text, .. }) => {
                assert_eq!(text, "Root > Shoes > Sneakers")
            }
            other => panic!("expected rendered breadcrumb, got {:?}", other),
        }
        assert!(matches!(
            data[3].breadcrumb,
            Some(BreadcrumbStateDto::Unavailable { .. })
        ));
        assert!(matches!(
            data[4].breadcrumb,
            Some(BreadcrumbStateDto::Unavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_paginates_after_sorting() {
        let server = server(catalog());

        let response = server
            .get("/api/categories")
            .add_query_param("page", 2)
            .add_query_param("page_size", 2)
            .await;

        let body: ApiResponse<Vec<CategoryListItemDto>> = response.json();
        let ids: Vec<i64> = body
            .data
            .unwrap()
            .iter()
            .map(|item| item.category.id)
            .collect();
        assert_eq!(ids, vec![3, 8]);
        assert_eq!(body.meta.unwrap().total, 5);
    }

    #[tokio::test]
    async fn test_list_huge_page_is_empty() {
        let server = server(catalog());

        let response = server
            .get("/api/categories")
            .add_query_param("page", i64::MAX)
            .await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<CategoryListItemDto>> = response.json();
        assert!(body.data.unwrap().is_empty());
        assert_eq!(body.meta.unwrap().total, 5);

        let response = server
            .get("/api/categories/1/children")
            .add_query_param("page", i64::MAX)
            .await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<CategoryResponseDto>> = response.json();
        assert!(body.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_rejects_bad_separator() {
        let server = server(catalog());

        let response = server
            .get("/api/categories")
            .add_query_param("breadcrumb_separator", "-".repeat(40))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = response.json();
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_breadcrumb_depth_one() {
        let server = server(catalog());

        let response = server
            .get("/api/categories/3/breadcrumb")
            .add_query_param("separator", " > ")
            .add_query_param("deep_level", 1)
            .await;

        response.assert_status_ok();
        let body: ApiResponse<BreadcrumbResponseDto> = response.json();
        let breadcrumb = body.data.unwrap();
        assert_eq!(breadcrumb.text, "Shoes > Sneakers");
        assert_eq!(breadcrumb.segments.len(), 2);
    }

    #[tokio::test]
    async fn test_breadcrumb_errors() {
        let server = server(catalog());

        server
            .get("/api/categories/404/breadcrumb")
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .get("/api/categories/8/breadcrumb")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_category_and_children() {
        let server = server(catalog());

        let response = server.get("/api/categories/2").await;
        response.assert_status_ok();
        let body: ApiResponse<CategoryResponseDto> = response.json();
        assert_eq!(body.data.unwrap().parent_id, Some(1));

        let response = server.get("/api/categories/1/children").await;
        response.assert_status_ok();
        let body: ApiResponse<Vec<CategoryResponseDto>> = response.json();
        assert_eq!(body.data.unwrap()[0].name, "Shoes");

        server
            .get("/api/categories/77")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tree_route_is_not_shadowed_by_id() {
        let server = server(catalog());

        let response = server.get("/api/categories/tree").await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<CategoryTreeDto>> = response.json();
        let tree = body.data.unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children[0].children[0].name, "Sneakers");
    }
}
