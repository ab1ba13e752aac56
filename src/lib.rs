pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{Category, CategoryId, NewQuestion, PageNumber, Question, QuestionId};
pub use engine::QuizSelector;
pub use error::AppError;
