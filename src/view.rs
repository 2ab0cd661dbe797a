//! One render cycle of a question.
//!
//! A `QuestionView` is built every time a question is displayed. It owns its
//! own freshly shuffled choices, so selections and the Check Answer state of
//! one question can never leak into the next.

use rand::Rng;
use tracing::debug;

use crate::models::{Feedback, InputKind, OptionPair, Question, judge};
use crate::shuffle::shuffle;

/// A selectable input bound to one choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceInput {
    pub id: String,
    pub kind: InputKind,
    pub option: OptionPair,
    pub checked: bool,
}

/// What is listed under the question heading.
#[derive(Debug, Clone)]
pub enum ChoiceList {
    Inputs(Vec<ChoiceInput>),
    /// No usable choices; the prompt is listed as plain text.
    Static(String),
}

#[derive(Debug, Clone)]
pub struct QuestionView {
    heading: String,
    choices: ChoiceList,
    correct: Vec<String>,
    cursor: usize,
    feedback: Option<Feedback>,
    check_enabled: bool,
}

impl QuestionView {
    /// Build the view for `question` at 0-based position `index` of `total`.
    pub fn new<R: Rng + ?Sized>(
        question: &Question,
        index: usize,
        total: usize,
        rng: &mut R,
    ) -> Self {
        let choices = match question.option_pairs() {
            Some(mut pairs) => {
                shuffle(&mut pairs, rng);
                let kind = question.input_kind();
                ChoiceList::Inputs(
                    pairs
                        .into_iter()
                        .map(|option| ChoiceInput {
                            id: question.input_id(&option.letter),
                            kind,
                            option,
                            checked: false,
                        })
                        .collect(),
                )
            }
            None => ChoiceList::Static(question.text.clone()),
        };

        Self {
            heading: format!("Question {}/{}: {}", index + 1, total, question.text),
            choices,
            correct: question.correct_answers().to_vec(),
            cursor: 0,
            feedback: None,
            check_enabled: true,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn choices(&self) -> &ChoiceList {
        &self.choices
    }

    pub fn inputs(&self) -> &[ChoiceInput] {
        match &self.choices {
            ChoiceList::Inputs(inputs) => inputs,
            ChoiceList::Static(_) => &[],
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn check_enabled(&self) -> bool {
        self.check_enabled
    }

    pub fn cursor_down(&mut self) {
        let len = self.inputs().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.inputs().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Select the choice under the cursor.
    pub fn toggle_at_cursor(&mut self) {
        self.toggle(self.cursor);
    }

    /// Select the choice labelled `letter`. Returns false if there is none.
    pub fn toggle_letter(&mut self, letter: &str) -> bool {
        match self.inputs().iter().position(|i| i.option.letter == letter) {
            Some(position) => {
                self.cursor = position;
                self.toggle(position);
                true
            }
            None => false,
        }
    }

    fn toggle(&mut self, position: usize) {
        let ChoiceList::Inputs(inputs) = &mut self.choices else {
            return;
        };
        let Some(kind) = inputs.get(position).map(|i| i.kind) else {
            return;
        };

        match kind {
            InputKind::Radio => {
                for (i, input) in inputs.iter_mut().enumerate() {
                    input.checked = i == position;
                }
            }
            InputKind::Checkbox => inputs[position].checked = !inputs[position].checked,
        }
    }

    /// Letters of every checked input, in display order.
    pub fn selection(&self) -> Vec<&str> {
        self.inputs()
            .iter()
            .filter(|i| i.checked)
            .map(|i| i.option.letter.as_str())
            .collect()
    }

    /// Judge the current selection.
    ///
    /// An empty selection only produces a warning. Any verdict disables
    /// further checks for this view. Returns `None` when already disabled.
    pub fn check(&mut self) -> Option<&Feedback> {
        if !self.check_enabled {
            return None;
        }

        let feedback = judge(&self.selection(), &self.correct);
        debug!(heading = %self.heading, outcome = ?feedback, "answer checked");
        if feedback.is_judgment() {
            self.check_enabled = false;
        }
        self.feedback = Some(feedback);
        self.feedback.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn question(json: serde_json::Value) -> Question {
        serde_json::from_value(json).unwrap()
    }

    fn single() -> Question {
        question(serde_json::json!({
            "id": 1, "question": "Pick A",
            "letters": ["A", "B", "C"], "choices": ["x", "y", "z"], "correct": ["A"],
        }))
    }

    fn multi() -> Question {
        question(serde_json::json!({
            "id": 2, "question": "Pick A and C",
            "letters": ["A", "B", "C"], "choices": ["x", "y", "z"], "correct": ["C", "A"],
        }))
    }

    fn view(q: &Question) -> QuestionView {
        QuestionView::new(q, 0, 2, &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_inputs_have_unique_ids() {
        let v = view(&single());
        let inputs = v.inputs();
        assert_eq!(inputs.len(), 3);
        let ids: HashSet<&str> = inputs.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("q1_B"));
        assert!(inputs.iter().all(|i| i.kind == InputKind::Radio));
    }

    #[test]
    fn test_heading() {
        let v = QuestionView::new(&single(), 1, 4, &mut StdRng::seed_from_u64(0));
        assert_eq!(v.heading(), "Question 2/4: Pick A");
    }

    #[test]
    fn test_choice_order_is_a_permutation() {
        let v = view(&multi());
        let mut letters: Vec<&str> = v
            .inputs()
            .iter()
            .map(|i| i.option.letter.as_str())
            .collect();
        letters.sort();
        assert_eq!(letters, vec!["A", "B", "C"]);
        assert!(v.inputs().iter().all(|i| i.kind == InputKind::Checkbox));
    }

    #[test]
    fn test_radio_selection_is_exclusive() {
        let mut v = view(&single());
        v.toggle_letter("B");
        v.toggle_letter("C");
        assert_eq!(v.selection(), vec!["C"]);
    }

    #[test]
    fn test_checkbox_selection_toggles() {
        let mut v = view(&multi());
        v.toggle_letter("A");
        v.toggle_letter("B");
        v.toggle_letter("B");
        v.toggle_letter("C");
        let mut selection = v.selection();
        selection.sort();
        assert_eq!(selection, vec!["A", "C"]);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut v = view(&single());
        v.cursor_up();
        assert_eq!(v.cursor(), 2);
        v.cursor_down();
        assert_eq!(v.cursor(), 0);
        v.toggle_at_cursor();
        assert_eq!(v.selection().len(), 1);
    }

    #[test]
    fn test_empty_check_warns_and_stays_enabled() {
        let mut v = view(&single());
        assert_eq!(v.check(), Some(&Feedback::SelectAtLeastOne));
        assert!(v.check_enabled());

        v.toggle_letter("A");
        assert_eq!(v.check(), Some(&Feedback::Correct));
        assert!(!v.check_enabled());
    }

    #[test]
    fn test_judged_check_disables_further_checks() {
        let mut v = view(&multi());
        v.toggle_letter("A");
        let message = v.check().map(Feedback::message);
        assert_eq!(message.as_deref(), Some("Incorrect. Correct answer: A, C"));
        assert!(!v.check_enabled());

        v.toggle_letter("C");
        assert_eq!(v.check(), None);
        let message = v.feedback().map(Feedback::message);
        assert_eq!(message.as_deref(), Some("Incorrect. Correct answer: A, C"));
    }

    #[test]
    fn test_static_question_cannot_be_judged() {
        let q = question(serde_json::json!({
            "id": 9, "question": "Just read this", "letters": ["A", "B"], "choices": ["x"],
        }));
        let mut v = view(&q);
        assert!(matches!(v.choices(), ChoiceList::Static(text) if text == "Just read this"));
        assert!(v.inputs().is_empty());
        assert!(!v.toggle_letter("A"));
        v.toggle_at_cursor();
        assert_eq!(v.check(), Some(&Feedback::SelectAtLeastOne));
        assert!(v.check_enabled());
    }
}
