use thiserror::Error;

use crate::domain::{OverrideError, ScheduleError};
use crate::ports::StoreError;

/// Errors surfaced by `StatusService` operations.
///
/// Reading a status never fails on its own; only the store lookup or a
/// rejected update can.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid schedule entry #{index}: {source}")]
    Schedule {
        index: usize,
        #[source]
        source: ScheduleError,
    },

    #[error(transparent)]
    Override(#[from] OverrideError),
}
