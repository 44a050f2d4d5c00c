use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// The two shapes a quiz question can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// A fixed list of options with exactly one correct index.
    MultipleChoice {
        options: Vec<String>,
        correct: usize,
    },
    /// Free-text answer; never scored.
    OpenEnded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub kind: QuestionKind,
    pub explanation: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn multiple_choice(
        prompt: impl Into<String>,
        options: &[&str],
        correct: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            kind: QuestionKind::MultipleChoice {
                options: options.iter().map(|opt| (*opt).to_string()).collect(),
                correct,
            },
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn open_ended(prompt: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            kind: QuestionKind::OpenEnded,
            explanation: explanation.into(),
        }
    }

    /// Validates the draft and assigns it an id within its bank.
    ///
    /// # Errors
    ///
    /// Returns a `QuestionValidationError` when the prompt or explanation is
    /// blank, when a multiple-choice question has fewer than two options, a
    /// blank option, or a correct index outside the option list.
    pub fn validate(self, id: QuestionId) -> Result<Question, QuestionValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionValidationError::EmptyPrompt);
        }
        if self.explanation.trim().is_empty() {
            return Err(QuestionValidationError::EmptyExplanation);
        }

        if let QuestionKind::MultipleChoice { options, correct } = &self.kind {
            if options.len() < 2 {
                return Err(QuestionValidationError::TooFewOptions {
                    len: options.len(),
                });
            }
            if let Some(index) = options.iter().position(|opt| opt.trim().is_empty()) {
                return Err(QuestionValidationError::EmptyOption { index });
            }
            if *correct >= options.len() {
                return Err(QuestionValidationError::CorrectOutOfRange {
                    correct: *correct,
                    len: options.len(),
                });
            }
        }

        Ok(Question {
            id,
            prompt: self.prompt,
            kind: self.kind,
            explanation: self.explanation,
        })
    }
}

/// A validated quiz question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub kind: QuestionKind,
    pub explanation: String,
}

impl Question {
    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    /// The option list for multiple-choice questions, empty for open-ended.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::OpenEnded => &[],
        }
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<usize> {
        match &self.kind {
            QuestionKind::MultipleChoice { correct, .. } => Some(*correct),
            QuestionKind::OpenEnded => None,
        }
    }
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Maps a final score to a short completion message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeScale {
    pub high_threshold: u32,
    pub high: String,
    pub mid_threshold: u32,
    pub mid: String,
    pub low: String,
}

impl GradeScale {
    #[must_use]
    pub fn new(
        high_threshold: u32,
        high: impl Into<String>,
        mid_threshold: u32,
        mid: impl Into<String>,
        low: impl Into<String>,
    ) -> Self {
        Self {
            high_threshold,
            high: high.into(),
            mid_threshold,
            mid: mid.into(),
            low: low.into(),
        }
    }

    #[must_use]
    pub fn message_for(&self, score: u32) -> &str {
        if score >= self.high_threshold {
            &self.high
        } else if score >= self.mid_threshold {
            &self.mid
        } else {
            &self.low
        }
    }
}

/// An ordered, validated, non-empty list of questions for one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    title: String,
    questions: Vec<Question>,
    grades: GradeScale,
}

impl QuestionBank {
    /// Validates every draft and assigns sequential ids starting at 1.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` for an empty draft list, or
    /// `QuestionBankError::Question` naming the first invalid draft.
    pub fn new(
        title: impl Into<String>,
        drafts: Vec<QuestionDraft>,
        grades: GradeScale,
    ) -> Result<Self, QuestionBankError> {
        if drafts.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        let mut questions = Vec::with_capacity(drafts.len());
        for (index, draft) in drafts.into_iter().enumerate() {
            let id = QuestionId::new(index as u64 + 1);
            let question = draft
                .validate(id)
                .map_err(|source| QuestionBankError::Question { id, source })?;
            questions.push(question);
        }

        Ok(Self {
            title: title.into(),
            questions,
            grades,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// A bank is never empty once constructed; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// How many questions can actually contribute to the score.
    #[must_use]
    pub fn multiple_choice_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|question| question.is_multiple_choice())
            .count()
    }

    #[must_use]
    pub fn grades(&self) -> &GradeScale {
        &self.grades
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("question explanation is empty")]
    EmptyExplanation,

    #[error("multiple-choice question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct answer index {correct} is outside the {len} options")]
    CorrectOutOfRange { correct: usize, len: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionBankError {
    #[error("question bank has no questions")]
    Empty,

    #[error("invalid question {id}: {source}")]
    Question {
        id: QuestionId,
        #[source]
        source: QuestionValidationError,
    },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn grades() -> GradeScale {
        GradeScale::new(7, "great", 5, "good", "keep going")
    }

    #[test]
    fn draft_fails_if_prompt_blank() {
        let draft = QuestionDraft::multiple_choice("   ", &["a", "b"], 0, "because");
        let err = draft.validate(QuestionId::new(1)).unwrap_err();
        assert_eq!(err, QuestionValidationError::EmptyPrompt);
    }

    #[test]
    fn draft_fails_if_correct_out_of_range() {
        let draft = QuestionDraft::multiple_choice("pick one", &["a", "b"], 2, "because");
        let err = draft.validate(QuestionId::new(1)).unwrap_err();
        assert!(matches!(
            err,
            QuestionValidationError::CorrectOutOfRange { correct: 2, len: 2 }
        ));
    }

    #[test]
    fn draft_fails_with_single_option() {
        let draft = QuestionDraft::multiple_choice("pick one", &["only"], 0, "because");
        let err = draft.validate(QuestionId::new(1)).unwrap_err();
        assert!(matches!(err, QuestionValidationError::TooFewOptions { len: 1 }));
    }

    #[test]
    fn open_ended_draft_skips_option_checks() {
        let draft = QuestionDraft::open_ended("describe it", "an example answer");
        let question = draft.validate(QuestionId::new(3)).unwrap();
        assert_eq!(question.id, QuestionId::new(3));
        assert!(!question.is_multiple_choice());
        assert!(question.options().is_empty());
        assert_eq!(question.correct_answer(), None);
    }

    #[test]
    fn bank_assigns_sequential_ids() {
        let bank = QuestionBank::new(
            "Demo",
            vec![
                QuestionDraft::multiple_choice("one?", &["a", "b"], 0, "a"),
                QuestionDraft::open_ended("two?", "free"),
            ],
            grades(),
        )
        .unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.question(0).unwrap().id, QuestionId::new(1));
        assert_eq!(bank.question(1).unwrap().id, QuestionId::new(2));
        assert_eq!(bank.multiple_choice_count(), 1);
    }

    #[test]
    fn bank_rejects_empty_draft_list() {
        let err = QuestionBank::new("Demo", Vec::new(), grades()).unwrap_err();
        assert_eq!(err, QuestionBankError::Empty);
    }

    #[test]
    fn bank_names_the_offending_question() {
        let err = QuestionBank::new(
            "Demo",
            vec![
                QuestionDraft::multiple_choice("fine", &["a", "b"], 0, "a"),
                QuestionDraft::multiple_choice("broken", &["a", "b"], 9, "a"),
            ],
            grades(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            QuestionBankError::Question { id, .. } if id == QuestionId::new(2)
        ));
    }

    #[test]
    fn grade_scale_picks_band_by_threshold() {
        let scale = grades();
        assert_eq!(scale.message_for(9), "great");
        assert_eq!(scale.message_for(7), "great");
        assert_eq!(scale.message_for(5), "good");
        assert_eq!(scale.message_for(2), "keep going");
    }
}
