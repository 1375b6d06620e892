use crate::{QualifiedName, TypeDescriptor};
use std::fmt::{self, Display};

/// Position of a declaration in the original source, carried for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        SourceLocation {
            file: file.into(),
            line,
            column,
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Reference to a base record by qualified name. Resolves through the registry
/// or stays external/unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseReference {
    pub(crate) target: QualifiedName,
}

impl BaseReference {
    pub fn new(target: QualifiedName) -> Self {
        BaseReference { target }
    }

    pub fn target(&self) -> &QualifiedName {
        &self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub(crate) name: String,
    pub(crate) descriptor: TypeDescriptor,
}

impl FieldDeclaration {
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        FieldDeclaration {
            name: name.into(),
            descriptor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }
}

/// The shape of one record type as produced by the front end: name, bases in
/// declaration order, fields in declaration order, and whether the record
/// itself declares the reflection marker. Immutable once registered.
#[derive(Debug, Clone)]
pub struct RecordDeclaration {
    pub(crate) name: QualifiedName,
    pub(crate) marked: bool,
    pub(crate) bases: Vec<BaseReference>,
    pub(crate) fields: Vec<FieldDeclaration>,
    pub(crate) location: SourceLocation,
}

impl RecordDeclaration {
    pub fn new(name: QualifiedName, location: SourceLocation) -> Self {
        RecordDeclaration {
            name,
            marked: false,
            bases: Vec::new(),
            fields: Vec::new(),
            location,
        }
    }

    /// Marks the record as declaring the reflection marker itself,
    /// independent of anything it may inherit.
    #[must_use]
    pub fn marked(mut self) -> Self {
        self.marked = true;
        self
    }

    #[must_use]
    pub fn with_bases(mut self, bases: Vec<BaseReference>) -> Self {
        self.bases = bases;
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FieldDeclaration>) -> Self {
        self.fields = fields;
        self
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn declares_marker(&self) -> bool {
        self.marked
    }

    pub fn bases(&self) -> &[BaseReference] {
        &self.bases
    }

    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}
