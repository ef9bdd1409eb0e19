use crate::Target;

/// Static description of one declared field of a record type.
///
/// Produced by `#[derive(Record)]`. Fields marked `#[skip]` are not
/// described at all: they contribute no catalog entry and are never
/// counted for positional binding.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Declared field name.
    pub name: &'static str,

    /// Explicit external name from `#[column("...")]`, if any.
    pub column: Option<&'static str>,

    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Leaf field written directly by the cursor.
    Scalar,

    /// `#[flatten]` field whose own fields are hoisted, unprefixed, into
    /// the parent's catalog.
    Flatten { fields: fn() -> &'static [FieldDef] },
}

/// A record type whose fields can be enumerated and mutably addressed.
///
/// Implemented by `#[derive(Record)]`; the catalog builder and binder drive
/// everything through this trait.
pub trait Record {
    /// Field descriptors in declaration order, `#[skip]` fields excluded.
    fn field_defs() -> &'static [FieldDef]
    where
        Self: Sized;

    /// Mutable access to the field at `index` within [`field_defs`].
    ///
    /// For nullable flattened fields (`Option<..>`), a fresh default value
    /// is installed before its address is taken, so writes through the
    /// returned target stay observable through the original reference.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indexes only ever come from
    /// catalogs built over the same descriptors, so this is unreachable
    /// from the fetch entry points.
    ///
    /// [`field_defs`]: Record::field_defs
    fn field(&mut self, index: usize) -> Target<'_>;
}
