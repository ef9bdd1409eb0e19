use crate::{
    record::{FieldDef, FieldKind},
    Error,
};

use indexmap::IndexMap;

/// Path of field indexes from a record root down to one leaf field,
/// descending through flattened sub-records.
pub(crate) type FieldPath = Vec<usize>;

/// Flattened external-name → field-locator mapping for a record type.
///
/// Built per fetch from the type's static descriptors; a pure function of
/// the type. Flattened sub-records contribute their fields directly, with
/// no prefixing, so external names must be unique across the whole tree;
/// a duplicate is reported as an ambiguity rather than silently shadowed.
#[derive(Debug)]
pub struct Catalog {
    entries: IndexMap<String, FieldPath>,

    /// Non-flattened leaf fields in declaration order, for positional
    /// binding.
    leaves: Vec<FieldPath>,

    /// Whether any field, at any depth, carries an explicit
    /// `#[column("...")]` name.
    tagged: bool,
}

impl Catalog {
    pub fn build(fields: &'static [FieldDef]) -> crate::Result<Catalog> {
        let mut catalog = Catalog {
            entries: IndexMap::new(),
            leaves: Vec::new(),
            tagged: false,
        };
        catalog.merge(fields, &[])?;
        Ok(catalog)
    }

    fn merge(&mut self, fields: &'static [FieldDef], prefix: &[usize]) -> crate::Result<()> {
        for (index, def) in fields.iter().enumerate() {
            let mut path = prefix.to_vec();
            path.push(index);

            match def.kind {
                FieldKind::Scalar => {
                    let name = match def.column {
                        Some(column) => {
                            self.tagged = true;
                            column.to_string()
                        }
                        None => snake_name(def.name),
                    };

                    if self.entries.insert(name.clone(), path.clone()).is_some() {
                        return Err(Error::ambiguous_column(name));
                    }

                    self.leaves.push(path);
                }
                FieldKind::Flatten { fields } => self.merge(fields(), &path)?,
            }
        }

        Ok(())
    }

    /// Locator for the given external name, in tagged mode.
    pub(crate) fn get(&self, column: &str) -> Option<&FieldPath> {
        self.entries.get(column)
    }

    /// Locator for the `index`-th leaf field, in positional mode.
    pub(crate) fn leaf(&self, index: usize) -> Option<&FieldPath> {
        self.leaves.get(index)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_tagged(&self) -> bool {
        self.tagged
    }

    /// External names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Default external name for a declared field: an underscore before every
/// uppercase-start segment, each segment lowercased. The split is strictly
/// per uppercase character, not per acronym: `UserID` becomes `user_i_d`.
pub(crate) fn snake_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
