//! Reflection-driven generation of serialization code
//! ===================================================
//!
//! This crate is the field-resolution and code-emission engine of an opt-in
//! reflection system for record types. A front end (parser, macro expander,
//! build driver -- all external to this crate) produces a closed set of
//! [`RecordDeclaration`]s: qualified names, base references, fields and their
//! type descriptors, plus a marker flag for records that opt into reflection.
//! From that model this crate decides, per record, which inherited fields are
//! visible and in what order, and emits the record's encode/decode pair as
//! Rust source, eliminating the hand-written conversion boilerplate.
//!
//! The pipeline runs strictly forward over a frozen model:
//!
//! 1. [`SymbolRegistry`] holds every declaration and, once closed, resolves
//!    base references -- or leaves them external, which is not an error.
//! 2. [`CapabilityResolver`] computes whether a record participates in
//!    reflection, directly or through a capable base, memoized and
//!    cycle-safe.
//! 3. [`FieldFlattener`] walks the capable ancestry in declaration order and
//!    produces the ordered, name-deduplicated field list. Non-participating
//!    bases are skipped entirely; collisions resolve first-occurrence-wins
//!    with a recorded diagnostic.
//! 4. [`CodeEmitter`] maps each field's descriptor onto encode/decode
//!    operations against the [`runtime`] wire value model, recursing into
//!    nested records. Unsupported shapes fail at generation time, never at
//!    the generated code's runtime.
//!
//! The output is deterministic: it depends only on declaration order in the
//! source model, never on internal storage or traversal order, so two runs
//! over the same closed registry produce byte-identical source.
//!
//! ```
//! use reflectgen::{
//!     generate, FieldDeclaration, QualifiedName, RecordDeclaration, SourceLocation,
//!     SymbolRegistry, TypeDescriptor,
//! };
//!
//! let mut registry = SymbolRegistry::new();
//! registry.register(
//!     RecordDeclaration::new(
//!         QualifiedName::parse("app::Person"),
//!         SourceLocation::new("person.h", 4, 1),
//!     )
//!     .marked()
//!     .with_fields(vec![
//!         FieldDeclaration::new("age", TypeDescriptor::integer()),
//!         FieldDeclaration::new("name", TypeDescriptor::text()),
//!     ]),
//! )?;
//!
//! let generation = generate(&registry.close());
//! assert_eq!(generation.artifacts.len(), 1);
//! assert!(!generation.has_failures());
//! # Ok::<(), reflectgen::Error>(())
//! ```

pub mod runtime;

mod capability;
mod declaration;
mod descriptor;
mod diagnostic;
mod emit;
mod error;
mod flatten;
mod generate;
mod index;
mod name;
mod print;
mod registry;

pub use crate::capability::CapabilityResolver;
pub use crate::declaration::{BaseReference, FieldDeclaration, RecordDeclaration, SourceLocation};
pub use crate::descriptor::{PrimitiveKind, TypeDescriptor};
pub use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use crate::emit::CodeEmitter;
pub use crate::error::Error;
pub use crate::flatten::{FieldFlattener, FlatField};
pub use crate::generate::{generate, Artifact, Failure, Generation};
pub use crate::name::QualifiedName;
pub use crate::registry::{ClosedRegistry, SymbolRegistry};

use crate::index::DeclRef;
use crate::print::Print;
