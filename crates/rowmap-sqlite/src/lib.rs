//! SQLite [`Cursor`] implementation for rowmap, backed by `rusqlite`.
//!
//! [`SqliteRows`] adapts a prepared statement's result rows to the cursor
//! contract; [`ConnectionExt`] adds one-call query helpers on
//! [`rusqlite::Connection`] (and, through deref, on transactions).

mod value;

use rowmap::{Bind, Collection, Cursor, Error, Slots, Value};
use rusqlite::{Connection, Params, Statement};
use tracing::{debug, error};

/// Cursor over the rows of an executed SQLite statement.
///
/// Column names are captured before execution; each row's values are
/// decoded into [`Value`]s during [`advance`], and a statement failure is
/// held back until [`finish`] so exhaustion and errors stay distinguishable.
///
/// [`advance`]: Cursor::advance
/// [`finish`]: Cursor::finish
pub struct SqliteRows<'stmt> {
    rows: rusqlite::Rows<'stmt>,
    columns: Vec<String>,
    current: Vec<Value>,
    failure: Option<Error>,
}

impl<'stmt> SqliteRows<'stmt> {
    /// Executes the prepared statement and returns a cursor over its rows.
    pub fn query(stmt: &'stmt mut Statement<'_>, params: impl Params) -> rowmap::Result<Self> {
        let columns = stmt
            .column_names()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect();

        let rows = stmt.query(params).map_err(Error::cursor)?;

        Ok(SqliteRows {
            rows,
            columns,
            current: Vec::new(),
            failure: None,
        })
    }
}

impl Cursor for SqliteRows<'_> {
    fn columns(&mut self) -> rowmap::Result<Vec<String>> {
        Ok(self.columns.clone())
    }

    fn advance(&mut self) -> bool {
        let row = match self.rows.next() {
            Ok(Some(row)) => row,
            Ok(None) => return false,
            Err(err) => {
                self.failure = Some(Error::cursor(err));
                return false;
            }
        };

        let mut current = Vec::with_capacity(self.columns.len());
        for index in 0..self.columns.len() {
            let raw = match row.get_ref(index) {
                Ok(raw) => raw,
                Err(err) => {
                    self.failure = Some(Error::cursor(err));
                    return false;
                }
            };

            match value::decode(raw) {
                Ok(value) => current.push(value),
                Err(err) => {
                    self.failure = Some(err);
                    return false;
                }
            }
        }

        self.current = current;
        true
    }

    fn scan(&mut self, slots: &mut Slots<'_>) -> rowmap::Result<()> {
        let row = std::mem::take(&mut self.current);
        for (index, value) in row.into_iter().enumerate() {
            slots.set(index, value)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Option<Error> {
        self.failure.take()
    }
}

/// One-call query helpers, the counterpart of the binding engine's fetch
/// entry points for callers holding a [`Connection`].
pub trait ConnectionExt {
    /// Runs `sql` and binds the first row into `dest`.
    /// [`Error::is_no_record_found`] on the result distinguishes "no such
    /// row" from failures.
    fn query_one<T: Bind>(&self, sql: &str, params: impl Params, dest: &mut T)
        -> rowmap::Result<()>;

    /// Runs `sql` and appends every row to `dest`.
    fn query_all<C: Collection>(
        &self,
        sql: &str,
        params: impl Params,
        dest: &mut C,
    ) -> rowmap::Result<()>;
}

impl ConnectionExt for Connection {
    fn query_one<T: Bind>(
        &self,
        sql: &str,
        params: impl Params,
        dest: &mut T,
    ) -> rowmap::Result<()> {
        debug!(sql, "query one");
        let mut stmt = self.prepare(sql).map_err(Error::cursor)?;
        let mut rows = SqliteRows::query(&mut stmt, params)?;

        let result = rowmap::fetch_one(dest, &mut rows);
        if let Err(err) = &result {
            if !err.is_no_record_found() {
                error!(sql, %err, "query one failed");
            }
        }
        result
    }

    fn query_all<C: Collection>(
        &self,
        sql: &str,
        params: impl Params,
        dest: &mut C,
    ) -> rowmap::Result<()> {
        debug!(sql, "query all");
        let mut stmt = self.prepare(sql).map_err(Error::cursor)?;
        let mut rows = SqliteRows::query(&mut stmt, params)?;

        let result = rowmap::fetch_all(dest, &mut rows);
        if let Err(err) = &result {
            error!(sql, %err, "query all failed");
        }
        result
    }
}
