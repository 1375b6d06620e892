use crate::{QualifiedName, SourceLocation};
use std::fmt::{self, Display};
use std::slice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A base reference points outside the closed declaration set. Not an
    /// error: the base degrades to non-capable and contributes no fields.
    UnresolvedBase,
    /// A later field with an already-collected name was dropped during
    /// flattening; the first occurrence wins.
    FieldCollision,
    /// A record's generation failed and produced no artifact.
    GenerationFailed,
}

/// One non-fatal (or per-record fatal) event observed during a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub location: SourceLocation,
    pub record: QualifiedName,
    pub field: Option<String>,
    pub detail: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} ({})", self.severity, self.detail, self.location)
    }
}

/// Collector for the diagnostics of one generation run. Entries are pushed in
/// traversal order and sorted into a stable order (location, record, field)
/// before the run's result is handed back.
#[derive(Debug, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Info => tracing::debug!(record = %diagnostic.record, "{}", diagnostic.detail),
            Severity::Warning => {
                tracing::warn!(record = %diagnostic.record, "{}", diagnostic.detail);
            }
            Severity::Error => {
                tracing::error!(record = %diagnostic.record, "{}", diagnostic.detail);
            }
        }
        self.entries.push(diagnostic);
    }

    pub(crate) fn unresolved_base(
        &mut self,
        record: &QualifiedName,
        base: &QualifiedName,
        location: &SourceLocation,
    ) {
        self.push(Diagnostic {
            kind: DiagnosticKind::UnresolvedBase,
            severity: Severity::Info,
            location: location.clone(),
            record: record.clone(),
            field: None,
            detail: format!("base `{}` of `{}` is external or unresolved", base, record),
        });
    }

    pub(crate) fn field_collision(
        &mut self,
        record: &QualifiedName,
        field: &str,
        kept: &QualifiedName,
        dropped: &QualifiedName,
        location: &SourceLocation,
    ) {
        self.push(Diagnostic {
            kind: DiagnosticKind::FieldCollision,
            severity: Severity::Warning,
            location: location.clone(),
            record: record.clone(),
            field: Some(field.to_owned()),
            detail: format!(
                "field `{}` from `{}` collides with the one from `{}`; first occurrence wins",
                field, dropped, kept,
            ),
        });
    }

    pub(crate) fn generation_failed(
        &mut self,
        record: &QualifiedName,
        location: &SourceLocation,
        detail: String,
    ) {
        self.push(Diagnostic {
            kind: DiagnosticKind::GenerationFailed,
            severity: Severity::Error,
            location: location.clone(),
            record: record.clone(),
            field: None,
            detail,
        });
    }

    pub(crate) fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| {
                (&a.location, &a.record, &a.field).cmp(&(&b.location, &b.record, &b.field))
            });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
