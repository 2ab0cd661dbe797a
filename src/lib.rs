//! # quiz-runner
//!
//! A terminal quiz runner. Questions are loaded from a JSON file or URL,
//! shown one at a time in random order with shuffled choices, and checked
//! against their correct letters.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_runner::{Quiz, QuizError, QuestionSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let source: QuestionSource = "quiz.json".parse().unwrap();
//!     Quiz::new().run(source).await
//! }
//! ```

mod app;
mod data;
pub mod logging;
mod models;
mod shuffle;
pub mod terminal;
pub mod ui;
mod view;

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::{Stream, StreamExt};
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::info;

pub use app::App;
pub use data::{
    DEFAULT_QUESTIONS_SOURCE, LoadError, QuestionSource, fetch_questions, parse_questions,
};
pub use models::{
    AppState, Feedback, InputKind, OptionPair, Phase, Question, QuestionId, QuizSession, Tone,
    judge,
};
pub use shuffle::shuffle;
pub use view::{ChoiceInput, ChoiceList, QuestionView};

/// Error type for running the quiz.
///
/// Loading failures are not listed here; they are shown on screen.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new() -> Self {
        Self { app: App::new() }
    }

    /// Create a quiz whose shuffles are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            app: App::with_seed(seed),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Questions are fetched from `source` in the background while a
    /// loading screen is shown. Returns when the user quits.
    pub async fn run(mut self, source: QuestionSource) -> Result<(), QuizError> {
        let (tx, rx) = oneshot::channel();
        let load_task = tokio::spawn(async move {
            let _ = tx.send(fetch_questions(&source).await);
        });

        let mut guard = terminal::TerminalGuard::enter()?;
        let terminal = guard.terminal();
        let result = run_event_loop(&mut self.app, rx, EventStream::new(), |app| {
            terminal.draw(|frame| ui::render(frame, app))?;
            Ok(())
        })
        .await;
        drop(guard);

        load_task.abort();
        info!("quiz closed");
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

type PendingLoad = oneshot::Receiver<Result<Vec<Question>, LoadError>>;

enum Step {
    Loaded(Result<Vec<Question>, LoadError>),
    Input(Option<io::Result<Event>>),
}

/// Draw, then wait for either the pending load or the next terminal event.
///
/// Both waits yield to the runtime, so the load task makes progress even on
/// a current-thread runtime. Ends on a quit key or when `events` runs dry.
async fn run_event_loop<S, D>(
    app: &mut App,
    pending: PendingLoad,
    mut events: S,
    mut draw: D,
) -> Result<(), QuizError>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
    D: FnMut(&App) -> io::Result<()>,
{
    let mut pending = Some(pending);

    loop {
        draw(app)?;

        let step = match pending.as_mut() {
            Some(load) => tokio::select! {
                biased;
                result = load => {
                    Step::Loaded(result.unwrap_or_else(|_| Err(LoadError::Interrupted)))
                }
                event = events.next() => Step::Input(event),
            },
            None => Step::Input(events.next().await),
        };

        match step {
            Step::Loaded(result) => {
                pending = None;
                app.finish_loading(result);
            }
            Step::Input(None) => break,
            Step::Input(Some(event)) => {
                if let Event::Key(key) = event? {
                    if key.kind == KeyEventKind::Press && handle_input(app, key.code) {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state() {
        AppState::Loading => is_quit(key),
        AppState::Active(_) => handle_quiz_input(app, key),
        AppState::Complete | AppState::LoadFailed => is_quit(key) || key == KeyCode::Enter,
    }
}

fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_option(),
        KeyCode::Enter | KeyCode::Char('c') => {
            app.check_answer();
        }
        KeyCode::Right | KeyCode::Char('n') => app.next_question(),
        _ => return is_quit(key),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::pin::Pin;
    use std::time::Duration;

    use crossterm::event::{KeyEvent, KeyModifiers};
    use futures_util::stream;
    use tokio::sync::mpsc;

    fn started_app() -> App {
        let mut app = App::with_seed(3);
        app.start(
            parse_questions(
                r#"[{"id": 1, "question": "?", "letters": ["A", "B"], "choices": ["x", "y"], "correct": ["A"]}]"#,
            )
            .unwrap(),
        );
        app
    }

    #[test]
    fn test_quiz_keys() {
        let mut app = started_app();
        assert!(!handle_input(&mut app, KeyCode::Char('j')));
        assert!(!handle_input(&mut app, KeyCode::Char(' ')));
        assert_eq!(app.current_view().unwrap().selection().len(), 1);

        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert!(!app.current_view().unwrap().check_enabled());

        assert!(!handle_input(&mut app, KeyCode::Char('n')));
        assert!(matches!(app.state(), AppState::Complete));
        assert!(handle_input(&mut app, KeyCode::Enter));
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn key_stream(
        keys: mpsc::UnboundedReceiver<io::Result<Event>>,
    ) -> Pin<Box<impl Stream<Item = io::Result<Event>>>> {
        Box::pin(stream::unfold(keys, |mut keys| async move {
            keys.recv().await.map(|event| (event, keys))
        }))
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_event_loop_applies_load_on_current_thread() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"id": 1, "question": "?", "letters": ["A", "B"], "choices": ["x", "y"], "correct": ["A"]}]"#,
        )
        .unwrap();
        let source = QuestionSource::File(file.path().to_path_buf());

        let (load_tx, load_rx) = oneshot::channel();
        let (key_tx, key_rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let _ = load_tx.send(fetch_questions(&source).await);
            let _ = key_tx.send(key(KeyCode::Char('q')));
        });

        let mut app = App::with_seed(0);
        let mut frames = Vec::new();
        let finished = tokio::time::timeout(
            Duration::from_secs(5),
            run_event_loop(&mut app, load_rx, key_stream(key_rx), |app| {
                frames.push(matches!(app.state(), AppState::Loading));
                Ok(())
            }),
        )
        .await;

        assert!(finished.expect("event loop stalled").is_ok());
        assert!(matches!(app.state(), AppState::Active(_)));
        assert_eq!(frames, vec![true, false]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_event_loop_reports_dropped_load() {
        let (load_tx, load_rx) = oneshot::channel();
        drop(load_tx);
        let (key_tx, key_rx) = mpsc::unbounded_channel();
        key_tx.send(key(KeyCode::Esc)).unwrap();

        let mut app = App::with_seed(0);
        run_event_loop(&mut app, load_rx, key_stream(key_rx), |_| Ok(()))
            .await
            .unwrap();
        assert!(matches!(app.state(), AppState::LoadFailed));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_event_loop_walks_through_quiz() {
        let questions = parse_questions(r#"[{"id": 1, "question": "?", "correct": ["A"]}]"#);
        let (load_tx, load_rx) = oneshot::channel();
        load_tx.send(questions).unwrap();

        let keys = stream::iter(vec![
            key(KeyCode::Enter),
            key(KeyCode::Char('n')),
            key(KeyCode::Enter),
        ]);
        let mut app = App::with_seed(0);
        run_event_loop(&mut app, load_rx, keys, |_| Ok(())).await.unwrap();
        assert!(matches!(app.state(), AppState::Complete));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = started_app();
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        assert!(handle_input(&mut app, KeyCode::Esc));
        assert!(!handle_input(&mut app, KeyCode::Char('z')));

        let mut loading = App::with_seed(0);
        assert!(!handle_input(&mut loading, KeyCode::Enter));
        assert!(handle_input(&mut loading, KeyCode::Char('Q')));
    }
}
