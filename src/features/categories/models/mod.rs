mod category;
mod list_model;
mod list_options;

pub use category::{Category, Entity};
pub use list_model::{
    Breadcrumb, BreadcrumbEntry, BreadcrumbSegment, CategoryListItem, CategoryListModel,
};
pub use list_options::CategoryListOptions;
