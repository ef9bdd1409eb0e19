use crate::{
    catalog::{Catalog, FieldPath},
    Error, Record, Store, Target, Value,
};

/// Where one column's value goes: a field locator, or nowhere.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Binding {
    Field(FieldPath),

    /// The column value is read and dropped. Used for columns with no
    /// matching catalog entry in tagged mode, and for surplus columns in
    /// non-strict positional mode.
    Discard,
}

/// Computes one binding per column, in the cursor's column order.
///
/// Tagged mode (any explicit external name anywhere in the record): columns
/// are matched by name, misses are discarded, unmatched fields keep their
/// value. Positional mode: column `i` binds leaf `i`; `strict` rejects a
/// cursor reporting more columns than there are leaves.
pub(crate) fn bind(
    catalog: &Catalog,
    columns: &[String],
    strict: bool,
) -> crate::Result<Vec<Binding>> {
    if catalog.is_tagged() {
        return Ok(columns
            .iter()
            .map(|column| match catalog.get(column) {
                Some(path) => Binding::Field(path.clone()),
                None => Binding::Discard,
            })
            .collect());
    }

    if strict && catalog.leaf_count() < columns.len() {
        return Err(Error::column_count_mismatch(
            catalog.leaf_count(),
            columns.len(),
        ));
    }

    Ok((0..columns.len())
        .map(|index| match catalog.leaf(index) {
            Some(path) => Binding::Field(path.clone()),
            None => Binding::Discard,
        })
        .collect())
}

/// The ordered, addressable write targets for one row, handed to
/// [`Cursor::scan`].
///
/// One slot per reported column. Writing resolves the column's binding
/// against the live destination borrow, so nested allocate-if-absent
/// happens at write time and stays visible through the caller's reference.
///
/// [`Cursor::scan`]: crate::Cursor::scan
pub struct Slots<'a> {
    inner: SlotsInner<'a>,
}

enum SlotsInner<'a> {
    /// Single-column scalar destination.
    Scalar(&'a mut dyn Store),

    Record {
        record: &'a mut dyn Record,
        plan: &'a [Binding],
    },
}

impl<'a> Slots<'a> {
    pub(crate) fn scalar(slot: &'a mut dyn Store) -> Slots<'a> {
        Slots {
            inner: SlotsInner::Scalar(slot),
        }
    }

    pub(crate) fn record(record: &'a mut dyn Record, plan: &'a [Binding]) -> Slots<'a> {
        Slots {
            inner: SlotsInner::Record { record, plan },
        }
    }

    /// Number of slots; always the column count the plan was built for.
    pub fn len(&self) -> usize {
        match &self.inner {
            SlotsInner::Scalar(_) => 1,
            SlotsInner::Record { plan, .. } => plan.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes column `index`'s decoded value into its slot.
    pub fn set(&mut self, index: usize, value: Value) -> crate::Result<()> {
        match &mut self.inner {
            SlotsInner::Scalar(slot) => {
                if index != 0 {
                    return Err(Error::slot_index_out_of_range(index, 1));
                }
                slot.store(value)
            }
            SlotsInner::Record { record, plan } => {
                let Some(binding) = plan.get(index) else {
                    return Err(Error::slot_index_out_of_range(index, plan.len()));
                };

                match binding {
                    Binding::Discard => Ok(()),
                    Binding::Field(path) => resolve(&mut **record, path)?.store(value),
                }
            }
        }
    }
}

/// Walks a locator path down to its leaf field, descending through
/// flattened sub-records.
fn resolve<'a>(record: &'a mut dyn Record, path: &[usize]) -> crate::Result<&'a mut dyn Store> {
    let (&index, rest) = path.split_first().expect("empty field path");

    match record.field(index) {
        Target::Scalar(slot) => {
            debug_assert!(rest.is_empty(), "scalar field mid-path");
            Ok(slot)
        }
        Target::Record(inner) => resolve(inner, rest),
    }
}
