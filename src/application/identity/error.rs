use thiserror::Error;

use crate::infrastructure::crypto::AuthError;
use crate::shared::errors::DomainError;

/// Failure of an identity use-case: either an authentication problem or a
/// domain/persistence problem.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type IdentityResult<T> = Result<T, IdentityError>;
