use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

use crate::table::Keyed;

/// Failures from construction, lookup and enumeration.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("unable to allocate slot storage: {0}")]
    AllocationFailed(#[from] TryReserveError),
    #[error("table is empty")]
    TableEmpty,
    #[error("no record found for key {0:?}")]
    NotFound(String),
}

/// Why an insert was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertErrorKind {
    #[error("table is full")]
    TableFull,
    #[error("a record with an equal key is already present")]
    DuplicateKey,
    /// Probe cycle visited every slot without resolving. Unreachable while
    /// the occupancy count is consistent; treat as a logic error.
    #[error("probe cycle exhausted without a free slot")]
    ProbeCycleExhausted,
}

/// A rejected insert. The record is handed back untouched so the caller
/// can keep or discard it.
#[derive(Debug)]
pub struct InsertError<R> {
    record: R,
    kind: InsertErrorKind,
}

impl<R> InsertError<R> {
    pub(crate) fn new(kind: InsertErrorKind, record: R) -> Self {
        Self { record, kind }
    }

    pub fn kind(&self) -> InsertErrorKind {
        self.kind
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn into_record(self) -> R {
        self.record
    }
}

impl<R: Keyed> fmt::Display for InsertError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot insert record with key {:?}: {}",
            self.record.key(),
            self.kind
        )
    }
}

impl<R: Keyed + fmt::Debug> std::error::Error for InsertError<R> {}
