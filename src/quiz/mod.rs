//! Quiz answers and the per-step validation rules

mod data;
pub mod validation;

pub use data::{AnswerSet, Gender, MaritalStatus, TermLength};
pub use validation::{validate_all, validate_step, FieldError, QuizStep};
