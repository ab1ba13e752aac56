//! Trivia category.

use crate::domain::CategoryId;
use serde::Serialize;
use std::collections::BTreeMap;

/// A question category. Categories are seeded and read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category id to display name, ordered by id.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Build the id → type mapping the API exposes.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
