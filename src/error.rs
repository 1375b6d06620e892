use crate::{QualifiedName, SourceLocation};
use thiserror::Error;

/// Failures surfaced during registration, capability resolution, flattening,
/// and emission. `DuplicateSymbol` aborts the whole batch at registration
/// time; every other variant is fatal only for the record it names.
#[derive(Debug, Error)]
pub enum Error {
    /// A second declaration was registered under an already-taken name.
    #[error("duplicate symbol `{name}` at {location}")]
    DuplicateSymbol {
        name: QualifiedName,
        location: SourceLocation,
    },

    /// Capability resolution re-entered a record before completing it.
    #[error("cyclic inheritance involving `{name}`")]
    CyclicInheritance { name: QualifiedName },

    /// Flattening was requested for a record that does not participate in
    /// reflection. Contract violation on the caller's side.
    #[error("record `{name}` does not participate in reflection")]
    NotCapable { name: QualifiedName },

    /// A field refers to a record that is not capable, so no encode/decode
    /// routines exist to delegate to.
    #[error("field `{field}` of `{record}`: referenced record `{target}` is not serializable")]
    NonSerializableFieldType {
        record: QualifiedName,
        field: String,
        target: QualifiedName,
    },

    /// A field's declared type is outside the closed descriptor set.
    #[error("field `{field}` of `{record}`: unsupported type `{spelling}`")]
    UnsupportedType {
        record: QualifiedName,
        field: String,
        spelling: String,
    },
}
