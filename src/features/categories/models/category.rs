use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::shared::constants::ROOT_PARENT_ID;

/// Anything persisted with a catalog-wide numeric identity
pub trait Entity {
    fn id(&self) -> i64;
}

/// Database model for category
#[derive(Debug, Clone, PartialEq, FromRow)]
#[allow(dead_code)]
pub struct Category {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Category {
    #[cfg(test)]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        display_order: i32,
        parent_id: Option<i64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            parent_id,
            name: name.into(),
            description: None,
            display_order,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Parent id with the legacy `0` sentinel folded into `None`
    pub fn parent(&self) -> Option<i64> {
        self.parent_id.filter(|&id| id != ROOT_PARENT_ID)
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}
