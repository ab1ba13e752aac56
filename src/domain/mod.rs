//! Domain types for the trivia API.
//!
//! This module provides:
//! - Primitives: QuestionId, CategoryId and the lenient FlexibleInt scalar
//! - Category and Question records with their JSON shapes
//! - Fixed-size pagination over ordered results

pub mod category;
pub mod pagination;
pub mod primitives;
pub mod question;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::{paginate, Page, PageNumber, QUESTIONS_PER_PAGE};
pub use primitives::{CategoryId, FlexibleInt, QuestionId};
pub use question::{NewQuestion, Question};
