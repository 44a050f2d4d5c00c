use crate::model::{Question, QuestionBank};

/// Linear quiz state machine over a fixed question bank.
///
/// A quiz is either working through questions (`Active`) or finished
/// (`Completed`). Invalid transitions are guarded no-ops; the UI mirrors the
/// guards by disabling the matching buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizEngine {
    bank: QuestionBank,
    index: usize,
    selection: Option<usize>,
    explanation_shown: bool,
    open_answer: String,
    score: u32,
    completed: bool,
}

impl QuizEngine {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            index: 0,
            selection: None,
            explanation_shown: false,
            open_answer: String::new(),
            score: 0,
            completed: false,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The question currently on screen.
    ///
    /// Present for every reachable state: `index` never leaves `0..len` and
    /// the bank is non-empty by construction.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        // Bank construction rejects empty banks and advance() caps the index.
        &self.bank.questions()[self.index]
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    #[must_use]
    pub fn explanation_shown(&self) -> bool {
        self.explanation_shown
    }

    #[must_use]
    pub fn open_answer(&self) -> &str {
        &self.open_answer
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.bank.len()
    }

    /// Records the selected option for the current multiple-choice question.
    ///
    /// Ignored when the quiz is completed, the question is open-ended, or the
    /// index is outside the option list. Reselecting the same option is
    /// idempotent.
    pub fn select_answer(&mut self, option: usize) {
        if self.completed {
            return;
        }
        if option >= self.current_question().options().len() {
            return;
        }
        self.selection = Some(option);
    }

    /// Updates the free-text buffer for open-ended questions. Never scored.
    pub fn set_open_answer(&mut self, text: impl Into<String>) {
        if self.completed || self.current_question().is_multiple_choice() {
            return;
        }
        self.open_answer = text.into();
    }

    /// Whether the explanation may be revealed right now.
    #[must_use]
    pub fn can_reveal(&self) -> bool {
        if self.completed || self.explanation_shown {
            return false;
        }
        if self.current_question().is_multiple_choice() {
            self.selection.is_some()
        } else {
            true
        }
    }

    pub fn reveal_explanation(&mut self) {
        if self.can_reveal() {
            self.explanation_shown = true;
        }
    }

    /// Advancing is only allowed once the explanation has been revealed.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.completed && self.explanation_shown
    }

    /// Scores the current question and moves to the next, or completes the
    /// quiz on the last question. A no-op unless `can_advance()`.
    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }

        if let Some(correct) = self.current_question().correct_answer()
            && self.selection == Some(correct)
        {
            self.score += 1;
        }

        if self.is_last_question() {
            self.completed = true;
        } else {
            self.index += 1;
            self.selection = None;
            self.explanation_shown = false;
            self.open_answer.clear();
        }
    }

    /// Back to the first question with a clean slate, from any state.
    pub fn restart(&mut self) {
        self.index = 0;
        self.selection = None;
        self.explanation_shown = false;
        self.open_answer.clear();
        self.score = 0;
        self.completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradeScale, QuestionDraft};

    fn grades() -> GradeScale {
        GradeScale::new(2, "great", 1, "good", "keep going")
    }

    fn two_question_bank() -> QuestionBank {
        QuestionBank::new(
            "Demo",
            vec![
                QuestionDraft::multiple_choice("first?", &["right", "wrong"], 0, "why"),
                QuestionDraft::multiple_choice("second?", &["wrong", "right"], 1, "why"),
            ],
            grades(),
        )
        .unwrap()
    }

    fn mixed_bank() -> QuestionBank {
        QuestionBank::new(
            "Mixed",
            vec![
                QuestionDraft::multiple_choice("choose", &["right", "wrong"], 0, "why"),
                QuestionDraft::open_ended("describe", "an example"),
                QuestionDraft::multiple_choice("choose again", &["wrong", "right"], 1, "why"),
            ],
            grades(),
        )
        .unwrap()
    }

    fn answer(engine: &mut QuizEngine, option: usize) {
        engine.select_answer(option);
        engine.reveal_explanation();
        engine.advance();
    }

    #[test]
    fn perfect_run_completes_with_full_score() {
        let mut engine = QuizEngine::new(two_question_bank());

        answer(&mut engine, 0);
        assert!(!engine.is_completed());
        assert_eq!(engine.index(), 1);

        answer(&mut engine, 1);
        assert!(engine.is_completed());
        assert_eq!(engine.score(), 2);
    }

    #[test]
    fn score_counts_only_correct_selections() {
        let mut engine = QuizEngine::new(two_question_bank());
        answer(&mut engine, 1); // wrong
        answer(&mut engine, 1); // right
        assert!(engine.is_completed());
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn advance_without_reveal_is_a_no_op() {
        let mut engine = QuizEngine::new(two_question_bank());
        engine.select_answer(0);
        assert!(!engine.can_advance());
        engine.advance();
        assert_eq!(engine.index(), 0);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn reveal_requires_a_selection_for_multiple_choice() {
        let mut engine = QuizEngine::new(two_question_bank());
        assert!(!engine.can_reveal());
        engine.reveal_explanation();
        assert!(!engine.explanation_shown());

        engine.select_answer(0);
        assert!(engine.can_reveal());
        engine.reveal_explanation();
        assert!(engine.explanation_shown());
    }

    #[test]
    fn open_ended_reveals_unconditionally_and_never_scores() {
        let mut engine = QuizEngine::new(mixed_bank());
        answer(&mut engine, 0);

        // Now on the open-ended question.
        assert!(!engine.current_question().is_multiple_choice());
        assert!(engine.can_reveal());
        engine.set_open_answer("S -> a S b");
        assert_eq!(engine.open_answer(), "S -> a S b");
        engine.reveal_explanation();
        engine.advance();

        // Buffer is cleared for the next question.
        assert_eq!(engine.open_answer(), "");
        answer(&mut engine, 1);
        assert!(engine.is_completed());
        assert_eq!(engine.score(), 2);
    }

    #[test]
    fn selection_is_idempotent_and_bounds_checked() {
        let mut engine = QuizEngine::new(two_question_bank());
        engine.select_answer(1);
        engine.select_answer(1);
        assert_eq!(engine.selection(), Some(1));

        engine.select_answer(9);
        assert_eq!(engine.selection(), Some(1));
    }

    #[test]
    fn open_answer_ignored_on_multiple_choice() {
        let mut engine = QuizEngine::new(two_question_bank());
        engine.set_open_answer("stray text");
        assert_eq!(engine.open_answer(), "");
    }

    #[test]
    fn restart_resets_from_mid_quiz_and_from_completed() {
        let mut engine = QuizEngine::new(two_question_bank());
        answer(&mut engine, 0);
        engine.restart();
        assert_eq!(engine.index(), 0);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.selection(), None);
        assert!(!engine.explanation_shown());
        assert!(!engine.is_completed());

        answer(&mut engine, 0);
        answer(&mut engine, 1);
        assert!(engine.is_completed());
        engine.restart();
        assert!(!engine.is_completed());
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn completed_quiz_ignores_further_input() {
        let mut engine = QuizEngine::new(two_question_bank());
        answer(&mut engine, 0);
        answer(&mut engine, 1);
        assert!(engine.is_completed());

        engine.select_answer(0);
        assert_eq!(engine.selection(), Some(1), "selection frozen after completion");
        engine.advance();
        assert_eq!(engine.score(), 2);
    }
}
