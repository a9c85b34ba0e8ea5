//! Builds one package's [`FuncMap`] from its declarations.

use crate::core::{Declaration, ExampleEntry, FuncMap};
use crate::naming::{classify, DeclKind};

/// Classify every declaration in order and accumulate the owner → examples
/// map. Tests and benchmarks are dropped.
pub fn group_declarations<'a, I>(declarations: I) -> FuncMap
where
    I: IntoIterator<Item = &'a Declaration>,
{
    let mut funcs = FuncMap::new();
    for decl in declarations {
        record_declaration(&mut funcs, decl);
    }
    funcs
}

/// Add a single declaration to `funcs`. Returns the kind it was classified as.
pub fn record_declaration(funcs: &mut FuncMap, decl: &Declaration) -> DeclKind {
    let classification = classify(&decl.name);
    match (classification.kind, classification.owner) {
        (DeclKind::Plain, Some(owner)) => funcs.ensure_owner(owner),
        (kind, Some(owner)) if kind.is_example() => {
            funcs.push_example(owner, ExampleEntry::from(decl));
        }
        _ => log::trace!("Skipping {} at {}", decl.name, decl.position),
    }
    classification.kind
}
