use crate::view::QuestionView;

/// Screen the application is on.
#[derive(Debug, Clone, Default)]
pub enum AppState {
    /// Questions are still being fetched.
    #[default]
    Loading,
    /// A question is shown and can be answered.
    Active(QuestionView),
    /// Every question has been passed.
    Complete,
    /// The question set could not be loaded.
    LoadFailed,
}
