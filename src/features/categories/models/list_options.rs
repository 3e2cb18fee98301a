use crate::core::config::CatalogConfig;

/// Per-call knobs for listing and breadcrumb rendering.
///
/// Built once per request and passed by reference; services never read
/// ambient configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListOptions {
    pub prepare_breadcrumb: bool,
    pub breadcrumb_separator: String,
    /// Maximum number of ancestors in a breadcrumb; 0 or negative is unlimited
    pub breadcrumb_deep_level: i32,
    /// Only the immediate parent is shown; takes precedence over the depth
    pub breadcrumb_parent_only: bool,
    /// Restrict the listing to direct children of this category
    pub parent_id: Option<i64>,
    /// Case-insensitive substring match on the category name
    pub name_contains: Option<String>,
}

impl Default for CategoryListOptions {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

impl CategoryListOptions {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            prepare_breadcrumb: false,
            breadcrumb_separator: config.breadcrumb_separator.clone(),
            breadcrumb_deep_level: config.breadcrumb_deep_level,
            breadcrumb_parent_only: config.breadcrumb_parent_only,
            parent_id: None,
            name_contains: None,
        }
    }

    /// Ancestor cap for the composer, `None` when unlimited
    pub fn effective_depth(&self) -> Option<usize> {
        if self.breadcrumb_parent_only {
            return Some(1);
        }
        usize::try_from(self.breadcrumb_deep_level)
            .ok()
            .filter(|&depth| depth > 0)
    }

    #[cfg(test)]
    pub fn with_breadcrumb(mut self, separator: impl Into<String>, deep_level: i32) -> Self {
        self.prepare_breadcrumb = true;
        self.breadcrumb_separator = separator.into();
        self.breadcrumb_deep_level = deep_level;
        self
    }
}
