//! Domain primitives: QuestionId, CategoryId, FlexibleInt.

use serde::{Deserialize, Serialize};

/// Primary key of a question row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        QuestionId(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary key of a category row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> Self {
        CategoryId(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer scalar as clients send it: either a JSON number or a string
/// holding one (category ids arrive as object keys from the front end).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlexibleInt {
    Int(i64),
    Text(String),
}

impl FlexibleInt {
    /// Resolve to an integer, or `None` if the text is not numeric.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            FlexibleInt::Int(n) => Some(*n),
            FlexibleInt::Text(s) => s.trim().parse().ok(),
        }
    }
}
