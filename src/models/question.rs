use std::fmt;

use serde::Deserialize;

/// Identifier of a question, unique within a session.
///
/// Question files use both numeric and string ids, so either is accepted
/// and kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct QuestionId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawId> for QuestionId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single question record as it appears in the question file.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub letters: Option<Vec<String>>,
    #[serde(default)]
    pub choices: Option<Vec<String>>,
    #[serde(default)]
    pub correct: Option<Vec<String>>,
}

/// One answer choice: its letter label and display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPair {
    pub letter: String,
    pub text: String,
}

impl OptionPair {
    pub fn label(&self) -> String {
        format!("{}. {}", self.letter, self.text)
    }
}

/// How the choices of a question accept selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Exactly one choice may be selected.
    Radio,
    /// Any number of choices may be selected.
    Checkbox,
}

impl Question {
    /// Pair up `letters` and `choices` in file order.
    ///
    /// Returns `None` when the question has no usable choices: either array
    /// missing, lengths differ, or both empty.
    pub fn option_pairs(&self) -> Option<Vec<OptionPair>> {
        let (letters, choices) = (self.letters.as_ref()?, self.choices.as_ref()?);
        if letters.is_empty() || letters.len() != choices.len() {
            return None;
        }

        Some(
            letters
                .iter()
                .zip(choices)
                .map(|(letter, text)| OptionPair {
                    letter: letter.clone(),
                    text: text.clone(),
                })
                .collect(),
        )
    }

    /// The correct letters, empty when the file gives none.
    pub fn correct_answers(&self) -> &[String] {
        self.correct.as_deref().unwrap_or_default()
    }

    pub fn input_kind(&self) -> InputKind {
        if self.correct_answers().len() > 1 {
            InputKind::Checkbox
        } else {
            InputKind::Radio
        }
    }

    /// Identifier of the input control for `letter`.
    pub fn input_id(&self, letter: &str) -> String {
        format!("q{}_{}", self.id, letter)
    }
}
