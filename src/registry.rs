use crate::index::Push;
use crate::{DeclRef, Error, QualifiedName, RecordDeclaration};
use std::collections::BTreeMap;

/// The open, write-side registry. Declarations are registered once, in bulk,
/// by the front end; `close` freezes the model and everything downstream
/// reads from the resulting [`ClosedRegistry`] only.
#[derive(Debug, Default)]
pub struct SymbolRegistry {
    decls: Vec<RecordDeclaration>,
    by_name: BTreeMap<QualifiedName, DeclRef>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        SymbolRegistry::default()
    }

    pub fn register(&mut self, decl: RecordDeclaration) -> Result<(), Error> {
        if self.by_name.contains_key(&decl.name) {
            return Err(Error::DuplicateSymbol {
                name: decl.name.clone(),
                location: decl.location.clone(),
            });
        }
        let name = decl.name.clone();
        let decl_ref = self.decls.index_push(decl);
        self.by_name.insert(name, decl_ref);
        Ok(())
    }

    pub fn close(self) -> ClosedRegistry {
        tracing::debug!(records = self.decls.len(), "registry closed");
        ClosedRegistry {
            decls: self.decls,
            by_name: self.by_name,
        }
    }
}

/// Frozen declaration set. All reads are pure; base references that do not
/// resolve here are external and simply absent.
#[derive(Debug)]
pub struct ClosedRegistry {
    decls: Vec<RecordDeclaration>,
    by_name: BTreeMap<QualifiedName, DeclRef>,
}

impl ClosedRegistry {
    pub fn resolve(&self, name: &QualifiedName) -> Option<&RecordDeclaration> {
        self.lookup(name).map(|decl_ref| self.decl(decl_ref))
    }

    pub(crate) fn lookup(&self, name: &QualifiedName) -> Option<DeclRef> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn decl(&self, decl_ref: DeclRef) -> &RecordDeclaration {
        &self.decls[decl_ref.0]
    }

    /// Declarations in registration order.
    pub fn records(&self) -> impl Iterator<Item = &RecordDeclaration> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
