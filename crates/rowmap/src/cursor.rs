use crate::{Error, Slots};

/// External collaborator yielding ordered rows of named columns.
///
/// All blocking (statement execution, network round-trips) happens behind
/// this trait; the binding engine itself is synchronous and performs no
/// I/O. A cursor and its destination are owned by one logical fetch call
/// and are not safe for concurrent reuse.
pub trait Cursor {
    /// Reported column names. Stable for the lifetime of one query; the
    /// order defines positional correspondence with the slot list.
    fn columns(&mut self) -> crate::Result<Vec<String>>;

    /// Advances to the next row. `false` means either exhausted or failed;
    /// [`finish`] tells the two apart.
    ///
    /// [`finish`]: Cursor::finish
    fn advance(&mut self) -> bool;

    /// Writes the current row's values into the slot list, one value per
    /// column, in column order.
    fn scan(&mut self, slots: &mut Slots<'_>) -> crate::Result<()>;

    /// Terminal error check, consulted after [`advance`] returns `false`.
    ///
    /// [`advance`]: Cursor::advance
    fn finish(&mut self) -> Option<Error>;
}
