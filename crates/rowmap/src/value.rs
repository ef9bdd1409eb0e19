use crate::Error;

/// A scalar value decoded by a cursor.
///
/// This is the currency between cursor implementations and destination
/// fields: the cursor decides how column bytes decode into a `Value`, the
/// engine only decides where the value goes.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Widens any integer variant. `None` for everything else.
    pub fn to_int(&self) -> Option<i128> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v.into()),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v.into()),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
        }
    }
}

/// A type that can be loaded from a single column [`Value`].
///
/// Representation-preserving integer conversions are accepted (a cursor
/// reporting `I64` can fill an `i32` field when the value fits); anything
/// else is a type mismatch. No other coercion happens here.
pub trait Primitive: Sized {
    fn load(value: Value) -> crate::Result<Self>;
}

/// Object-safe, in-place form of [`Primitive`] used by slots.
pub trait Store {
    fn store(&mut self, value: Value) -> crate::Result<()>;
}

impl<T: Primitive> Store for T {
    fn store(&mut self, value: Value) -> crate::Result<()> {
        *self = T::load(value)?;
        Ok(())
    }
}

macro_rules! int_primitive {
    ( $( $ty:ty ),* ) => {
        $(
            impl Primitive for $ty {
                fn load(value: Value) -> crate::Result<Self> {
                    let Some(v) = value.to_int() else {
                        return Err(Error::type_mismatch(stringify!($ty), value.type_name()));
                    };
                    <$ty>::try_from(v).map_err(|_| Error::value_out_of_range(stringify!($ty)))
                }
            }
        )*
    };
}

int_primitive!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Primitive for bool {
    fn load(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // SQLite and friends report booleans as integers.
            Value::I64(0) => Ok(false),
            Value::I64(1) => Ok(true),
            other => Err(Error::type_mismatch("bool", other.type_name())),
        }
    }
}

impl Primitive for f64 {
    fn load(value: Value) -> crate::Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v.into()),
            other => Err(Error::type_mismatch("f64", other.type_name())),
        }
    }
}

impl Primitive for f32 {
    fn load(value: Value) -> crate::Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            Value::F64(v) => Ok(v as f32),
            other => Err(Error::type_mismatch("f32", other.type_name())),
        }
    }
}

impl Primitive for String {
    fn load(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl Primitive for Vec<u8> {
    fn load(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            other => Err(Error::type_mismatch("bytes", other.type_name())),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: Value) -> crate::Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => Ok(Some(T::load(other)?)),
        }
    }
}
