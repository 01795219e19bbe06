pub mod chapter;
pub mod record;

pub use chapter::ChapterRef;
pub use record::{Answer, Marks, QuestionMetadata, QuestionOption, QuestionRecord, QuestionType, SOURCE};
