mod field;
pub(crate) use field::{Field, FieldTy, FlattenAccess};

mod record;
pub(crate) use record::Record;

/// Folds `err` into `acc` so every problem in the input surfaces in one
/// compile pass instead of one per rebuild.
fn combine(acc: &mut Option<syn::Error>, err: syn::Error) {
    match acc {
        Some(acc) => acc.combine(err),
        None => *acc = Some(err),
    }
}
