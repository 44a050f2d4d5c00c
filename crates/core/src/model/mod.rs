mod ids;
mod question;
mod tree;

pub use ids::{ParseIdError, QuestionId};
pub use question::{
    GradeScale, Question, QuestionBank, QuestionBankError, QuestionDraft, QuestionKind,
    QuestionValidationError,
};
pub use tree::TreeNode;
