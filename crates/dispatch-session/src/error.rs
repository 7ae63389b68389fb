use thiserror::Error;

use dispatch_store::StoreError;

/// Errors surfaced by a session.
///
/// Validation failures are not here: they are encoded in
/// [`Dispatch`](crate::Dispatch) outcomes. A persistence failure is
/// recoverable — the ledger keeps the accepted message and the append can
/// be retried.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to persist message: {0}")]
    Persist(#[from] StoreError),
}
