//! Pure selection logic, independent of storage and HTTP.

pub mod quiz;

pub use quiz::QuizSelector;
