mod feedback;
mod question;
mod session;
mod state;

pub use feedback::{Feedback, Tone, judge};
pub use question::{InputKind, OptionPair, Question, QuestionId};
pub use session::{Phase, QuizSession};
pub use state::AppState;
