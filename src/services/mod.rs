pub mod answer_classifier;
pub mod failure_log;
pub mod record_writer;

pub use answer_classifier::{extract_numeric_answer, is_correct_option, pick_choice_answer, resolve_answer, CorrectnessSignals};
pub use failure_log::FailureLog;
pub use record_writer::{ensure_dir, record_file_name, write_record};
