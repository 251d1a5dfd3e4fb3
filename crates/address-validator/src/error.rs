use thiserror::Error;

/// Errors raised while building validator inputs from untyped data.
///
/// The validation call itself has no error path; it answers with a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("invalid network type: {0}")]
    InvalidNetworkType(String),
}
