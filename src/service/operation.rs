use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::types::{RewriteRequest, SuggestRequest, TranslateRequest, Translation};

/// Errors an operation can report back to a view.
///
/// Views never see a panic or a dropped task: every failure arrives as one
/// of these and is shown inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The backend rejected the call or could not be reached.
    OperationFailed(String),
    /// The request itself was unusable (e.g. empty source text). The
    /// control surface disables triggers that would produce this.
    InvalidInput(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::OperationFailed(msg) => write!(f, "operation failed: {msg}"),
            ServiceError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// A single asynchronous call across the service boundary.
#[async_trait]
pub trait Operation: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;

    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Runs the operation to completion.
    async fn invoke(&self, input: Self::Input) -> Result<Self::Output, ServiceError>;
}

pub type SuggestOperation = Arc<dyn Operation<Input = SuggestRequest, Output = String>>;
pub type RewriteOperation = Arc<dyn Operation<Input = RewriteRequest, Output = String>>;
pub type TranslateOperation = Arc<dyn Operation<Input = TranslateRequest, Output = Translation>>;

/// The full set of operations the views depend on.
#[derive(Clone)]
pub struct Services {
    pub suggest: SuggestOperation,
    pub rewrite: RewriteOperation,
    pub translate: TranslateOperation,
}
