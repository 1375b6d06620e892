use crate::{
    CapabilityResolver, ClosedRegistry, DeclRef, Diagnostics, Error, QualifiedName, TypeDescriptor,
};

/// One entry of a record's flattened field list: the field name, its declared
/// type, and the record that originally declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatField {
    pub name: String,
    pub descriptor: TypeDescriptor,
    pub origin: QualifiedName,
}

/// Computes the ordered, deduplicated list of visible fields for a capable
/// record: bases in declaration order, left to right, capable bases flattened
/// recursively, non-capable bases skipped entirely, own fields last. Fields
/// are identified by name; on collision the first occurrence wins and the
/// dropped duplicate is recorded as a warning.
///
/// The result is a pure function of declared order in the source model.
pub struct FieldFlattener<'a> {
    registry: &'a ClosedRegistry,
    resolver: &'a CapabilityResolver<'a>,
}

impl<'a> FieldFlattener<'a> {
    pub fn new(registry: &'a ClosedRegistry, resolver: &'a CapabilityResolver<'a>) -> Self {
        FieldFlattener { registry, resolver }
    }

    pub fn flatten(
        &self,
        name: &QualifiedName,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<FlatField>, Error> {
        if !self.resolver.is_capable(name)? {
            return Err(Error::NotCapable { name: name.clone() });
        }
        // Capable implies registered.
        let Some(decl_ref) = self.registry.lookup(name) else {
            return Err(Error::NotCapable { name: name.clone() });
        };
        let mut fields = Vec::new();
        self.walk(decl_ref, &mut Vec::new(), &mut fields, diagnostics)?;
        Ok(fields)
    }

    fn walk(
        &self,
        decl_ref: DeclRef,
        in_progress: &mut Vec<DeclRef>,
        out: &mut Vec<FlatField>,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), Error> {
        let decl = self.registry.decl(decl_ref);
        if in_progress.contains(&decl_ref) {
            return Err(Error::CyclicInheritance {
                name: decl.name.clone(),
            });
        }
        in_progress.push(decl_ref);
        for base in decl.bases() {
            match self.registry.lookup(base.target()) {
                Some(base_ref) => {
                    if self.resolver.is_capable(base.target())? {
                        self.walk(base_ref, in_progress, out, diagnostics)?;
                    }
                }
                None => diagnostics.unresolved_base(&decl.name, base.target(), &decl.location),
            }
        }
        for field in decl.fields() {
            match out.iter().find(|flat| flat.name == field.name()) {
                Some(existing) => diagnostics.field_collision(
                    &decl.name,
                    field.name(),
                    &existing.origin,
                    &decl.name,
                    &decl.location,
                ),
                None => out.push(FlatField {
                    name: field.name().to_owned(),
                    descriptor: field.descriptor().clone(),
                    origin: decl.name.clone(),
                }),
            }
        }
        in_progress.pop();
        Ok(())
    }
}
