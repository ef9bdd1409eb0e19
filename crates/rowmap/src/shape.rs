use crate::{record::FieldDef, value::Primitive, Record, Store};

/// Classification of a single-row destination, resolved once per fetch.
///
/// Together with the entry point (`fetch_one` vs `fetch_all`) this covers
/// the four destination shapes: scalar, record, and a collection of either.
/// Unsupported shapes do not get here at all; a type without a [`Bind`]
/// impl cannot be used as a destination.
#[derive(Clone, Copy)]
pub enum Kind {
    Scalar,

    /// Record destination. Carries the field descriptors so a catalog can
    /// be built before any row value exists.
    Record { fields: fn() -> &'static [FieldDef] },
}

/// Borrowed view of a destination, matching its [`Kind`].
pub enum Target<'a> {
    Scalar(&'a mut dyn Store),
    Record(&'a mut dyn Record),
}

/// A value that can serve as the destination for one row.
///
/// Implemented for primitive scalars, `Option` of one, `Box<T: Bind>`
/// (the reference-element variant for collections), and by
/// `#[derive(Record)]` for record types.
pub trait Bind {
    const KIND: Kind;

    fn target(&mut self) -> Target<'_>;
}

macro_rules! scalar_bind {
    ( $( $ty:ty ),* ) => {
        $(
            impl Bind for $ty {
                const KIND: Kind = Kind::Scalar;

                fn target(&mut self) -> Target<'_> {
                    Target::Scalar(self)
                }
            }
        )*
    };
}

scalar_bind!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Vec<u8>);

impl<T: Primitive> Bind for Option<T> {
    const KIND: Kind = Kind::Scalar;

    fn target(&mut self) -> Target<'_> {
        Target::Scalar(self)
    }
}

impl<T: Bind> Bind for Box<T> {
    const KIND: Kind = T::KIND;

    fn target(&mut self) -> Target<'_> {
        (**self).target()
    }
}

/// A destination collection for `fetch_all`.
///
/// Whether elements are held by value (`Vec<T>`) or by allocation
/// (`Vec<Box<T>>`) is decided by the element type: `Box<T>` materializes a
/// fresh allocation per row via its `Default`.
pub trait Collection {
    type Elem: Bind + Default;

    fn append(&mut self, elem: Self::Elem);
}

impl<T: Bind + Default> Collection for Vec<T> {
    type Elem = T;

    fn append(&mut self, elem: T) {
        self.push(elem);
    }
}
