use crate::features::categories::models::{
    BreadcrumbEntry, Category, CategoryListItem, CategoryListModel, CategoryListOptions,
};
use crate::features::categories::services::breadcrumb::BreadcrumbComposer;

/// Packages an ordered listing into the view model
pub struct CategoryListAssembler;

impl CategoryListAssembler {
    /// `snapshot` is the full category set the breadcrumbs are walked over;
    /// `categories` is the (possibly filtered) ordered listing to render.
    ///
    /// A failing breadcrumb only marks its own row as unavailable.
    pub fn assemble(
        categories: Vec<Category>,
        snapshot: &[Category],
        options: &CategoryListOptions,
    ) -> CategoryListModel {
        if !options.prepare_breadcrumb {
            return CategoryListModel {
                items: categories
                    .into_iter()
                    .map(|category| CategoryListItem {
                        category,
                        breadcrumb: None,
                    })
                    .collect(),
            };
        }

        let composer = BreadcrumbComposer::new(snapshot);
        let items = categories
            .into_iter()
            .map(|category| {
                let entry = match composer.compose(category.id, options) {
                    Ok(breadcrumb) => BreadcrumbEntry::Rendered(breadcrumb),
                    Err(e) => {
                        tracing::warn!("Breadcrumb unavailable for category {}: {}", category.id, e);
                        BreadcrumbEntry::Unavailable {
                            reason: e.to_string(),
                        }
                    }
                };
                CategoryListItem {
                    category,
                    breadcrumb: Some(entry),
                }
            })
            .collect();

        CategoryListModel { items }
    }
}
