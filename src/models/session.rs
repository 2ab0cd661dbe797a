use rand::Rng;

use crate::models::Question;
use crate::shuffle::shuffle;

/// Where the session currently stands.
#[derive(Debug, Clone, Copy)]
pub enum Phase<'a> {
    /// A question is on screen. `index` is 0-based.
    Active {
        question: &'a Question,
        index: usize,
        total: usize,
    },
    /// Every question has been passed.
    Complete,
}

/// The questions of one run, in their shuffled order, and the position.
///
/// The index only moves forward, one step per `advance`, and never past
/// the number of questions.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
}

impl QuizSession {
    /// Start a session with the questions shuffled by `rng`.
    pub fn new<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Self {
        shuffle(&mut questions, rng);
        Self {
            questions,
            index: 0,
        }
    }

    /// Start a session that keeps the given order.
    #[cfg(test)]
    pub fn in_order(questions: Vec<Question>) -> Self {
        Self {
            questions,
            index: 0,
        }
    }

    pub fn phase(&self) -> Phase<'_> {
        match self.questions.get(self.index) {
            Some(question) => Phase::Active {
                question,
                index: self.index,
                total: self.questions.len(),
            },
            None => Phase::Complete,
        }
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase(), Phase::Complete)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Move to the next question. Does nothing once complete.
    pub fn advance(&mut self) {
        if self.index < self.questions.len() {
            self.index += 1;
        }
    }

    /// Percentage of questions passed: `index / len * 100`, 100 when complete.
    pub fn progress_percent(&self) -> f64 {
        match self.phase() {
            Phase::Active { index, total, .. } => index as f64 / total as f64 * 100.0,
            Phase::Complete => 100.0,
        }
    }
}
