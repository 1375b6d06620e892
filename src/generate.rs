use crate::{
    CapabilityResolver, ClosedRegistry, CodeEmitter, Diagnostics, Error, FieldFlattener,
    QualifiedName,
};

use proc_macro2::TokenStream;
use quote::quote;

/// The generated encode/decode pair for one record.
#[derive(Debug)]
pub struct Artifact {
    pub record: QualifiedName,
    pub tokens: TokenStream,
}

impl Artifact {
    pub fn source(&self) -> String {
        self.tokens.to_string()
    }
}

/// A record whose generation failed. Siblings are unaffected.
#[derive(Debug)]
pub struct Failure {
    pub record: QualifiedName,
    pub error: Error,
}

/// Result of one generation run over a closed registry: everything that was
/// generated, everything that failed, and the full diagnostic list. Whether
/// any failure makes the run a failure overall is the caller's policy.
#[derive(Debug)]
pub struct Generation {
    pub artifacts: Vec<Artifact>,
    pub failures: Vec<Failure>,
    pub diagnostics: Diagnostics,
}

impl Generation {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// All artifacts concatenated into a single stream, in registration order.
    pub fn combined(&self) -> TokenStream {
        let artifacts = self.artifacts.iter().map(|artifact| &artifact.tokens);
        quote!(#(#artifacts)*)
    }
}

/// Single-pass batch generation: every capable record in the registry, in
/// registration order, flattened and emitted. Per-record failures are
/// collected and do not abort the batch; a failed record emits nothing.
pub fn generate(registry: &ClosedRegistry) -> Generation {
    let resolver = CapabilityResolver::new(registry);
    let flattener = FieldFlattener::new(registry, &resolver);
    let emitter = CodeEmitter::new(&resolver);

    let mut artifacts = Vec::new();
    let mut failures = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for decl in registry.records() {
        let name = decl.name();
        let result = resolver.is_capable(name).and_then(|capable| {
            if !capable {
                return Ok(None);
            }
            let fields = flattener.flatten(name, &mut diagnostics)?;
            emitter.emit(name, &fields).map(Some)
        });
        match result {
            Ok(None) => {}
            Ok(Some(tokens)) => {
                tracing::debug!(record = %name, "generated encode/decode pair");
                artifacts.push(Artifact {
                    record: name.clone(),
                    tokens,
                });
            }
            Err(error) => {
                diagnostics.generation_failed(name, decl.location(), error.to_string());
                failures.push(Failure {
                    record: name.clone(),
                    error,
                });
            }
        }
    }

    diagnostics.sort();
    Generation {
        artifacts,
        failures,
        diagnostics,
    }
}
