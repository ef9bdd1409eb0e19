/// An error that can occur while binding rows to a destination.
///
/// Cursor-reported failures pass through unchanged; everything else is a
/// binding or classification failure produced by this crate. Nothing is
/// retried or recovered internally.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// Opaque failure reported by the cursor collaborator.
    Cursor(Box<dyn std::error::Error + Send + Sync>),

    /// Single-record fetch on an exhausted cursor. Callers are expected to
    /// special-case this; "no such row" is a normal outcome, not a fault.
    NoRecordFound,

    /// Strict positional binding with more columns than destination fields.
    ColumnCountMismatch { fields: usize, columns: usize },

    /// Two fields resolved to the same external name after flattening.
    AmbiguousColumn(String),

    /// A column value of the wrong kind for its destination field.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An integer column value that does not fit the destination field.
    ValueOutOfRange { expected: &'static str },

    /// The cursor wrote past the end of the slot list.
    SlotIndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Wraps a cursor-internal error. The engine never inspects it.
    pub fn cursor(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        ErrorKind::Cursor(err.into()).into()
    }

    pub fn no_record_found() -> Error {
        ErrorKind::NoRecordFound.into()
    }

    pub(crate) fn column_count_mismatch(fields: usize, columns: usize) -> Error {
        ErrorKind::ColumnCountMismatch { fields, columns }.into()
    }

    pub(crate) fn ambiguous_column(name: impl Into<String>) -> Error {
        ErrorKind::AmbiguousColumn(name.into()).into()
    }

    pub(crate) fn type_mismatch(expected: &'static str, found: &'static str) -> Error {
        ErrorKind::TypeMismatch { expected, found }.into()
    }

    pub(crate) fn value_out_of_range(expected: &'static str) -> Error {
        ErrorKind::ValueOutOfRange { expected }.into()
    }

    pub(crate) fn slot_index_out_of_range(index: usize, len: usize) -> Error {
        ErrorKind::SlotIndexOutOfRange { index, len }.into()
    }

    pub fn is_cursor(&self) -> bool {
        matches!(self.kind, ErrorKind::Cursor(_))
    }

    /// Returns `true` if a single-record fetch found no row.
    pub fn is_no_record_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NoRecordFound)
    }

    pub fn is_column_count_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::ColumnCountMismatch { .. })
    }

    pub fn is_ambiguous_column(&self) -> bool {
        matches!(self.kind, ErrorKind::AmbiguousColumn(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    pub fn is_value_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::ValueOutOfRange { .. })
    }

    pub fn is_slot_index_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::SlotIndexOutOfRange { .. })
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ErrorKind::Cursor(err) => write!(f, "cursor error: {err}"),
            ErrorKind::NoRecordFound => f.write_str("no record found"),
            ErrorKind::ColumnCountMismatch { fields, columns } => write!(
                f,
                "destination/column count mismatch: {fields} fields, {columns} columns"
            ),
            ErrorKind::AmbiguousColumn(name) => {
                write!(f, "ambiguous column name `{name}` after flattening")
            }
            ErrorKind::TypeMismatch { expected, found } => {
                write!(f, "cannot store {found} value into {expected} field")
            }
            ErrorKind::ValueOutOfRange { expected } => {
                write!(f, "integer value out of range for {expected} field")
            }
            ErrorKind::SlotIndexOutOfRange { index, len } => {
                write!(f, "slot index {index} out of range for {len} slots")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Cursor(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
