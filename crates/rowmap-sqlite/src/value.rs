use rowmap::{Error, Value};
use rusqlite::types::ValueRef;

/// Converts a SQLite column value into a rowmap value.
///
/// SQLite's dynamic types map directly: integers arrive as `I64`, reals as
/// `F64`; width narrowing for smaller destination fields happens in
/// `Primitive::load`.
pub(crate) fn decode(value: ValueRef<'_>) -> rowmap::Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::I64(v),
        ValueRef::Real(v) => Value::F64(v),
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(Error::cursor)?;
            Value::String(text.to_owned())
        }
        ValueRef::Blob(bytes) => Value::Bytes(bytes.to_vec()),
    })
}
