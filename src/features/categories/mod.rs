//! Storefront catalog categories.
//!
//! Categories form a tree through `parent_id`. Listings are ordered by
//! display order then id, and can carry a breadcrumb per row composed by
//! walking the parent chain.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | Ordered listing, optional breadcrumbs |
//! | GET | `/api/categories/tree` | Category tree |
//! | GET | `/api/categories/{id}` | Get category by id |
//! | GET | `/api/categories/{id}/children` | Direct children |
//! | GET | `/api/categories/{id}/breadcrumb` | Breadcrumb of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use handlers::CategoriesState;
pub use services::{CategoryService, PgCategoryStore};
