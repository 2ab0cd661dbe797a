/// Colour class of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Warning,
    Success,
    Error,
}

/// Outcome of pressing Check Answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing was selected; not a judgment.
    SelectAtLeastOne,
    Correct,
    /// Wrong selection. `expected` holds the sorted correct letters.
    Incorrect { expected: Vec<String> },
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::SelectAtLeastOne => "Please select at least one option.".to_string(),
            Feedback::Correct => "Correct!".to_string(),
            Feedback::Incorrect { expected } if expected.is_empty() => {
                "Incorrect. Correct answer: Not provided".to_string()
            }
            Feedback::Incorrect { expected } => {
                format!("Incorrect. Correct answer: {}", expected.join(", "))
            }
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Feedback::SelectAtLeastOne => Tone::Warning,
            Feedback::Correct => Tone::Success,
            Feedback::Incorrect { .. } => Tone::Error,
        }
    }

    /// Whether this feedback is a final verdict on the question.
    pub fn is_judgment(&self) -> bool {
        !matches!(self, Feedback::SelectAtLeastOne)
    }
}

/// Compare a selection against the correct letters as sets.
///
/// Both sides are sorted and joined with `|`; the selection is correct only
/// when the joined strings are equal.
pub fn judge<S: AsRef<str>>(selection: &[S], correct: &[String]) -> Feedback {
    if selection.is_empty() {
        return Feedback::SelectAtLeastOne;
    }

    let mut selected: Vec<&str> = selection.iter().map(AsRef::as_ref).collect();
    selected.sort_unstable();
    let mut expected = correct.to_vec();
    expected.sort_unstable();

    if selected.join("|") == expected.join("|") {
        Feedback::Correct
    } else {
        Feedback::Incorrect { expected }
    }
}
