use thiserror::Error;

use crate::model::QuestionBankError;
use crate::share::ShareLinkError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    QuestionBank(#[from] QuestionBankError),
    #[error(transparent)]
    ShareLink(#[from] ShareLinkError),
}
