//! Bind tabular query results to plain Rust structs without per-type
//! scanning code.
//!
//! A [`Cursor`] yields ordered rows of named columns. `rowmap` decides where
//! each column's value lands in a caller-owned destination: a scalar, a
//! `#[derive(Record)]` struct, or a `Vec` of either. The derive emits per-type
//! field metadata and accessors; classification, catalog construction,
//! binding, and row materialization are runtime code.
//!
//! ```ignore
//! #[derive(Default, rowmap::Record)]
//! struct User {
//!     id: i64,
//!     #[column("user_name")]
//!     name: String,
//! }
//!
//! let mut users: Vec<User> = vec![];
//! rowmap::fetch_all(&mut users, &mut cursor)?;
//! ```

mod bind;
pub use bind::Slots;

mod catalog;
pub use catalog::Catalog;

mod cursor;
pub use cursor::Cursor;

mod error;
pub use error::Error;

mod record;
pub use record::{FieldDef, FieldKind, Record};

mod row;
pub use row::{fetch_all, fetch_one};

mod shape;
pub use shape::{Bind, Collection, Kind, Target};

mod value;
pub use value::{Primitive, Store, Value};

pub use rowmap_macros::Record;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        record::{FieldDef, FieldKind, Record},
        shape::{Bind, Kind, Target},
    };
    pub use std::{boxed::Box, default::Default, option::Option};
}
