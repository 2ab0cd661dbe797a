mod loader;

pub use loader::{
    DEFAULT_QUESTIONS_SOURCE, LoadError, QuestionSource, fetch_questions, parse_questions,
};
