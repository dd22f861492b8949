use thiserror::Error;

use crate::fraction::FractionError;
use crate::progress::ProgressError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Fraction(#[from] FractionError),
}
