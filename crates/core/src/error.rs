use crate::store::StoreError;
use medreg_types::Nric;

/// Failures an edit can surface to the caller.
///
/// Every variant except `InternalConsistency` is recoverable: the
/// caller can correct the request and resubmit. `InternalConsistency`
/// means the registry's identifier-uniqueness invariant has already
/// been violated and the data is corrupt; callers should abort rather
/// than attempt repair.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("at least one field to edit must be provided")]
    NoFieldsSpecified,
    #[error("no record with NRIC {nric} exists in the registry")]
    RecordNotFound { nric: Nric },
    #[error("doctors cannot have condition or blood type fields")]
    InapplicableFieldForRole,
    #[error("this person already exists in the registry")]
    DuplicateRecord,
    #[error("registry holds {count} records with NRIC {nric}: identifiers must be unique")]
    InternalConsistency { nric: Nric, count: usize },
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CommandResult<T> = std::result::Result<T, CommandError>;
