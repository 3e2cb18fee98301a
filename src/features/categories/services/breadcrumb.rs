use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::core::error::AppError;
use crate::features::categories::models::{
    Breadcrumb, BreadcrumbSegment, Category, CategoryListOptions, Entity,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreadcrumbError {
    #[error("Category with id '{0}' not found")]
    NotFound(i64),

    #[error("Category '{category_id}' has a cyclic parent chain (revisited '{revisited}')")]
    Cycle { category_id: i64, revisited: i64 },

    #[error("Category '{category_id}' references missing parent '{missing_parent}'")]
    MissingParent {
        category_id: i64,
        missing_parent: i64,
    },
}

impl From<BreadcrumbError> for AppError {
    fn from(err: BreadcrumbError) -> Self {
        match err {
            BreadcrumbError::NotFound(_) => AppError::NotFound(err.to_string()),
            BreadcrumbError::Cycle { .. } | BreadcrumbError::MissingParent { .. } => {
                AppError::CorruptHierarchy(err.to_string())
            }
        }
    }
}

/// Walks parent links over one snapshot of the category set.
pub struct BreadcrumbComposer<'a> {
    by_id: HashMap<i64, &'a Category>,
}

impl<'a> BreadcrumbComposer<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        Self {
            by_id: categories.iter().map(|c| (c.id(), c)).collect(),
        }
    }

    /// Render the breadcrumb of `category_id`.
    ///
    /// Ancestors are collected upward until a root is reached, or the
    /// `effective_depth` of `options` is used up. The leaf is always the
    /// last segment.
    pub fn compose(
        &self,
        category_id: i64,
        options: &CategoryListOptions,
    ) -> Result<Breadcrumb, BreadcrumbError> {
        let leaf = self
            .by_id
            .get(&category_id)
            .copied()
            .ok_or(BreadcrumbError::NotFound(category_id))?;

        let max_ancestors = options.effective_depth();
        let mut visited = HashSet::from([leaf.id]);
        let mut chain = vec![leaf];
        let mut current = leaf;

        while let Some(parent_id) = current.parent() {
            if max_ancestors.is_some_and(|max| chain.len() > max) {
                break;
            }
            if !visited.insert(parent_id) {
                return Err(BreadcrumbError::Cycle {
                    category_id,
                    revisited: parent_id,
                });
            }
            let parent = self.by_id.get(&parent_id).copied().ok_or(
                BreadcrumbError::MissingParent {
                    category_id: current.id,
                    missing_parent: parent_id,
                },
            )?;
            chain.push(parent);
            current = parent;
        }

        let segments: Vec<BreadcrumbSegment> = chain
            .into_iter()
            .rev()
            .map(|c| BreadcrumbSegment {
                id: c.id,
                name: c.name.clone(),
            })
            .collect();
        let text = segments
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(&options.breadcrumb_separator);

        Ok(Breadcrumb { segments, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoes() -> Vec<Category> {
        vec![
            Category::new(1, "Root", 0, None),
            Category::new(2, "Shoes", 0, Some(1)),
            Category::new(3, "Sneakers", 0, Some(2)),
            Category::new(4, "Running", 0, Some(3)),
        ]
    }

    fn options(deep_level: i32) -> CategoryListOptions {
        CategoryListOptions::default().with_breadcrumb(" > ", deep_level)
    }

    #[test]
    fn test_depth_two_reaches_root() {
        let categories = shoes();
        let composer = BreadcrumbComposer::new(&categories);

        let breadcrumb = composer.compose(3, &options(2)).unwrap();

        assert_eq!(breadcrumb.text, "Root > Shoes > Sneakers");
        let ids: Vec<i64> = breadcrumb.segments.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_depth_one_keeps_immediate_parent() {
        let categories = shoes();
        let composer = BreadcrumbComposer::new(&categories);

        let breadcrumb = composer.compose(3, &options(1)).unwrap();

        assert_eq!(breadcrumb.text, "Shoes > Sneakers");
    }

    #[test]
    fn test_depth_below_chain_length_truncates() {
        let categories = shoes();
        let composer = BreadcrumbComposer::new(&categories);

        for k in 1..3 {
            let breadcrumb = composer.compose(4, &options(k)).unwrap();
            assert_eq!(breadcrumb.segments.len(), k as usize + 1);
            assert_eq!(breadcrumb.segments.last().unwrap().name, "Running");
        }
    }

    #[test]
    fn test_non_positive_depth_is_unlimited() {
        let categories = shoes();
        let composer = BreadcrumbComposer::new(&categories);

        for k in [0, -1] {
            let breadcrumb = composer.compose(4, &options(k)).unwrap();
            assert_eq!(breadcrumb.text, "Root > Shoes > Sneakers > Running");
        }
    }

    #[test]
    fn test_root_yields_own_name() {
        let categories = shoes();
        let composer = BreadcrumbComposer::new(&categories);

        for k in [0, 1, 5] {
            let breadcrumb = composer.compose(1, &options(k)).unwrap();
            assert_eq!(breadcrumb.text, "Root");
            assert_eq!(breadcrumb.segments.len(), 1);
        }
    }

    #[test]
    fn test_parent_only_yields_two_segments() {
        let categories = shoes();
        let composer = BreadcrumbComposer::new(&categories);
        let mut opts = options(0);
        opts.breadcrumb_parent_only = true;

        assert_eq!(composer.compose(4, &opts).unwrap().text, "Sneakers > Running");
        assert_eq!(composer.compose(2, &opts).unwrap().text, "Root > Shoes");
        assert_eq!(composer.compose(1, &opts).unwrap().segments.len(), 1);
    }

    #[test]
    fn test_cycle_is_reported() {
        let categories = vec![
            Category::new(1, "A", 0, Some(3)),
            Category::new(2, "B", 0, Some(1)),
            Category::new(3, "C", 0, Some(2)),
        ];
        let composer = BreadcrumbComposer::new(&categories);

        let err = composer.compose(2, &options(0)).unwrap_err();

        assert_eq!(
            err,
            BreadcrumbError::Cycle {
                category_id: 2,
                revisited: 2
            }
        );
    }

    #[test]
    fn test_depth_cap_stops_before_reaching_cycle() {
        let categories = vec![
            Category::new(1, "A", 0, Some(2)),
            Category::new(2, "B", 0, Some(1)),
            Category::new(3, "Leaf", 0, Some(1)),
        ];
        let composer = BreadcrumbComposer::new(&categories);

        assert_eq!(composer.compose(3, &options(1)).unwrap().text, "A > Leaf");
        assert!(matches!(
            composer.compose(3, &options(0)),
            Err(BreadcrumbError::Cycle { .. })
        ));
    }

    #[test]
    fn test_self_parent_is_a_cycle() {
        let categories = vec![Category::new(7, "Loop", 0, Some(7))];
        let composer = BreadcrumbComposer::new(&categories);

        assert!(matches!(
            composer.compose(7, &options(0)),
            Err(BreadcrumbError::Cycle { revisited: 7, .. })
        ));
    }

    #[test]
    fn test_missing_parent_and_unknown_id() {
        let categories = vec![Category::new(2, "Orphan", 0, Some(40))];
        let composer = BreadcrumbComposer::new(&categories);

        assert_eq!(
            composer.compose(2, &options(0)).unwrap_err(),
            BreadcrumbError::MissingParent {
                category_id: 2,
                missing_parent: 40
            }
        );
        assert_eq!(
            composer.compose(99, &options(0)).unwrap_err(),
            BreadcrumbError::NotFound(99)
        );
    }

    #[test]
    fn test_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(BreadcrumbError::NotFound(1)),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(BreadcrumbError::Cycle {
                category_id: 1,
                revisited: 1
            }),
            AppError::CorruptHierarchy(_)
        ));
    }
}
