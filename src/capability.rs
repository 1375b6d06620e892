use crate::{ClosedRegistry, DeclRef, Error, QualifiedName};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Decides, per record, whether it participates in reflection: either the
/// record declares the marker itself, or at least one resolved base does,
/// computed recursively. Unknown and external names are never capable.
///
/// Results are memoized per declaration. Cycle detection is per entry point:
/// re-entering a record before its computation completes fails that record
/// with [`Error::CyclicInheritance`] and leaves every other record untouched.
pub struct CapabilityResolver<'a> {
    registry: &'a ClosedRegistry,
    memo: RefCell<BTreeMap<DeclRef, bool>>,
}

impl<'a> CapabilityResolver<'a> {
    pub fn new(registry: &'a ClosedRegistry) -> Self {
        CapabilityResolver {
            registry,
            memo: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn is_capable(&self, name: &QualifiedName) -> Result<bool, Error> {
        match self.registry.lookup(name) {
            Some(decl_ref) => self.resolve(decl_ref, &mut Vec::new()),
            None => Ok(false),
        }
    }

    fn resolve(&self, decl_ref: DeclRef, in_progress: &mut Vec<DeclRef>) -> Result<bool, Error> {
        if let Some(&capable) = self.memo.borrow().get(&decl_ref) {
            return Ok(capable);
        }
        let decl = self.registry.decl(decl_ref);
        if in_progress.contains(&decl_ref) {
            return Err(Error::CyclicInheritance {
                name: decl.name.clone(),
            });
        }
        let mut capable = decl.marked;
        if !capable {
            in_progress.push(decl_ref);
            for base in &decl.bases {
                if let Some(base_ref) = self.registry.lookup(base.target()) {
                    if self.resolve(base_ref, in_progress)? {
                        capable = true;
                        break;
                    }
                }
            }
            in_progress.pop();
        }
        self.memo.borrow_mut().insert(decl_ref, capable);
        Ok(capable)
    }
}
