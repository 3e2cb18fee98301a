mod breadcrumb;
mod category_service;
mod category_store;
mod list_assembler;

pub use category_service::CategoryService;
pub use category_store::PgCategoryStore;

#[cfg(test)]
pub use category_store::InMemoryCategoryStore;
