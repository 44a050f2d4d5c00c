use syntax_core::quiz::QuizEngine;

use crate::vm::markdown::markdown_to_html;

/// One option row of the active question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

/// Everything the quiz card needs while the quiz is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuizVm {
    pub progress_label: String,
    pub score_label: String,
    pub progress_percent: u32,
    pub prompt: String,
    pub is_multiple_choice: bool,
    pub options: Vec<QuizOptionVm>,
    pub open_answer: String,
    pub explanation_html: Option<String>,
    pub can_reveal: bool,
    pub can_advance: bool,
    pub advance_label: &'static str,
}

/// The completion card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedQuizVm {
    pub title: String,
    pub score_label: String,
    pub message: String,
}

#[must_use]
pub fn map_active(engine: &QuizEngine) -> ActiveQuizVm {
    let question = engine.current_question();
    let total = engine.bank().len();
    let position = engine.index() + 1;

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| QuizOptionVm {
            letter: option_letter(index),
            text: text.clone(),
            selected: engine.selection() == Some(index),
        })
        .collect();

    ActiveQuizVm {
        progress_label: format!("Question {position} of {total}"),
        score_label: format!("Score: {}", engine.score()),
        progress_percent: (position * 100 / total) as u32,
        prompt: question.prompt.clone(),
        is_multiple_choice: question.is_multiple_choice(),
        options,
        open_answer: engine.open_answer().to_string(),
        explanation_html: engine
            .explanation_shown()
            .then(|| markdown_to_html(&question.explanation)),
        can_reveal: engine.can_reveal(),
        can_advance: engine.can_advance(),
        advance_label: if engine.is_last_question() {
            "Finish Quiz →"
        } else {
            "Next Question →"
        },
    }
}

#[must_use]
pub fn map_completed(engine: &QuizEngine) -> CompletedQuizVm {
    let bank = engine.bank();
    CompletedQuizVm {
        title: format!("{} Complete!", bank.title()),
        score_label: format!(
            "Your score: {}/{}",
            engine.score(),
            bank.multiple_choice_count()
        ),
        message: bank.grades().message_for(engine.score()).to_string(),
    }
}

fn option_letter(index: usize) -> char {
    // Option lists are tiny; anything past Z would be a content bug.
    char::from(b'A' + u8::try_from(index % 26).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntax_core::model::{GradeScale, QuestionBank, QuestionDraft};

    fn engine() -> QuizEngine {
        let bank = QuestionBank::new(
            "Demo Quiz",
            vec![
                QuestionDraft::multiple_choice("first?", &["right", "wrong"], 0, "because *so*"),
                QuestionDraft::multiple_choice("second?", &["wrong", "right"], 1, "because"),
            ],
            GradeScale::new(2, "great", 1, "good", "keep going"),
        )
        .unwrap();
        QuizEngine::new(bank)
    }

    #[test]
    fn active_vm_labels_progress_and_options() {
        let vm = map_active(&engine());
        assert_eq!(vm.progress_label, "Question 1 of 2");
        assert_eq!(vm.score_label, "Score: 0");
        assert_eq!(vm.progress_percent, 50);
        assert_eq!(vm.options.len(), 2);
        assert_eq!(vm.options[0].letter, 'A');
        assert_eq!(vm.options[1].letter, 'B');
        assert!(!vm.can_reveal);
        assert_eq!(vm.advance_label, "Next Question →");
    }

    #[test]
    fn explanation_renders_as_html_once_revealed() {
        let mut engine = engine();
        engine.select_answer(0);
        engine.reveal_explanation();
        let vm = map_active(&engine);
        let html = vm.explanation_html.expect("explanation shown");
        assert!(html.contains("<em>so</em>"));
        assert!(vm.can_advance);
    }

    #[test]
    fn last_question_changes_the_advance_label() {
        let mut engine = engine();
        engine.select_answer(0);
        engine.reveal_explanation();
        engine.advance();
        let vm = map_active(&engine);
        assert_eq!(vm.advance_label, "Finish Quiz →");
        assert_eq!(vm.progress_percent, 100);
    }

    #[test]
    fn completed_vm_reports_score_out_of_scorable_questions() {
        let mut engine = engine();
        for option in [0, 1] {
            engine.select_answer(option);
            engine.reveal_explanation();
            engine.advance();
        }
        assert!(engine.is_completed());
        let vm = map_completed(&engine);
        assert_eq!(vm.title, "Demo Quiz Complete!");
        assert_eq!(vm.score_label, "Your score: 2/2");
        assert_eq!(vm.message, "great");
    }
}
