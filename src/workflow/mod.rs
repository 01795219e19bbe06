pub mod question_builder;
pub mod question_ctx;

pub use question_builder::{BuildOptions, QuestionBuilder};
pub use question_ctx::QuestionCtx;
