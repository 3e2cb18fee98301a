use crate::features::categories::models::Category;

/// One ancestor (or the leaf itself) in a rendered breadcrumb
#[derive(Debug, Clone, PartialEq)]
pub struct BreadcrumbSegment {
    pub id: i64,
    pub name: String,
}

/// Rendered ancestor path, root-most segment first
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub segments: Vec<BreadcrumbSegment>,
    pub text: String,
}

/// Breadcrumb slot of a listing row
#[derive(Debug, Clone, PartialEq)]
pub enum BreadcrumbEntry {
    Rendered(Breadcrumb),
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListItem {
    pub category: Category,
    /// `None` when breadcrumbs were not requested
    pub breadcrumb: Option<BreadcrumbEntry>,
}

/// View-ready listing, built fresh per request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryListModel {
    pub items: Vec<CategoryListItem>,
}

impl CategoryListModel {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows whose breadcrumb could not be composed
    pub fn unavailable_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.breadcrumb, Some(BreadcrumbEntry::Unavailable { .. })))
            .count()
    }
}
