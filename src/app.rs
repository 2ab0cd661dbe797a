use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::data::{LoadError, QuestionSource, fetch_questions};
use crate::models::{AppState, Feedback, Phase, Question, QuizSession};
use crate::view::QuestionView;

pub struct App {
    state: AppState,
    session: QuizSession,
    rng: StdRng,
}

impl App {
    /// Create an app seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an app whose question and choice order is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: AppState::Loading,
            session: QuizSession::default(),
            rng,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// The question on screen, if any.
    pub fn current_view(&self) -> Option<&QuestionView> {
        match &self.state {
            AppState::Active(view) => Some(view),
            _ => None,
        }
    }

    fn current_view_mut(&mut self) -> Option<&mut QuestionView> {
        match &mut self.state {
            AppState::Active(view) => Some(view),
            _ => None,
        }
    }

    /// Fetch the questions and show the first one.
    ///
    /// Never fails: a load error is logged and turns into `LoadFailed`.
    pub async fn load(&mut self, source: &QuestionSource) {
        let result = fetch_questions(source).await;
        self.finish_loading(result);
    }

    /// Apply the outcome of a fetch started elsewhere.
    pub fn finish_loading(&mut self, result: Result<Vec<Question>, LoadError>) {
        match result {
            Ok(questions) => self.start(questions),
            Err(err) => {
                error!(error = %err, "failed to load questions");
                self.state = AppState::LoadFailed;
            }
        }
    }

    /// Shuffle `questions` into a new session and show the first one.
    pub fn start(&mut self, questions: Vec<Question>) {
        self.session = QuizSession::new(questions, &mut self.rng);
        self.display_question();
    }

    /// Rebuild the screen for the session's current position.
    pub fn display_question(&mut self) {
        self.state = match self.session.phase() {
            Phase::Active {
                question,
                index,
                total,
            } => AppState::Active(QuestionView::new(question, index, total, &mut self.rng)),
            Phase::Complete => {
                info!(total = self.session.len(), "quiz complete");
                AppState::Complete
            }
        };
    }

    /// Check Answer. Returns the feedback it produced, if any.
    pub fn check_answer(&mut self) -> Option<Feedback> {
        self.current_view_mut()?.check().cloned()
    }

    /// Next: advance one question and re-render.
    pub fn next_question(&mut self) {
        if let AppState::Active(_) = self.state {
            self.session.advance();
            self.display_question();
        }
    }

    pub fn select_next_option(&mut self) {
        if let Some(view) = self.current_view_mut() {
            view.cursor_down();
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(view) = self.current_view_mut() {
            view.cursor_up();
        }
    }

    pub fn toggle_option(&mut self) {
        if let Some(view) = self.current_view_mut() {
            view.toggle_at_cursor();
        }
    }

    /// Select the choice labelled `letter` on the current question.
    pub fn select_letter(&mut self, letter: &str) -> bool {
        self.current_view_mut()
            .is_some_and(|view| view.toggle_letter(letter))
    }

    /// Width of the progress indicator, in percent.
    pub fn progress_percent(&self) -> f64 {
        match &self.state {
            AppState::Active(_) | AppState::Complete => self.session.progress_percent(),
            AppState::Loading | AppState::LoadFailed => 0.0,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
