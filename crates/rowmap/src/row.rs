use crate::{
    bind::{bind, Slots},
    Bind, Catalog, Collection, Cursor, Error, Kind, Target,
};

/// Fetches exactly one row into `dest`.
///
/// An exhausted cursor is [`Error::no_record_found`], distinct from any
/// cursor-internal failure, so callers can treat "no such row" as a normal
/// outcome. Record destinations bind strictly: a cursor reporting more
/// columns than the destination has fields is an error, not silent loss.
pub fn fetch_one<T, C>(dest: &mut T, cursor: &mut C) -> crate::Result<()>
where
    T: crate::Bind,
    C: Cursor + ?Sized,
{
    if !cursor.advance() {
        return Err(cursor.finish().unwrap_or_else(Error::no_record_found));
    }

    match T::KIND {
        Kind::Scalar => {
            let Target::Scalar(slot) = dest.target() else {
                unreachable!("scalar destination produced a record target")
            };
            let mut slots = Slots::scalar(slot);
            cursor.scan(&mut slots)
        }
        Kind::Record { fields } => {
            let columns = cursor.columns()?;
            let catalog = Catalog::build(fields())?;
            let plan = bind(&catalog, &columns, true)?;

            let Target::Record(record) = dest.target() else {
                unreachable!("record destination produced a scalar target")
            };
            let mut slots = Slots::record(record, &plan);
            cursor.scan(&mut slots)
        }
    }
}

/// Fetches every remaining row, appending one element per row to `dest`.
///
/// Zero rows is success, with the collection left untouched. The column
/// list and binding plan are computed once and reused across rows. On any
/// error the remaining rows are abandoned; elements already appended stay
/// in the collection. Partial results are documented behavior, not rolled
/// back.
pub fn fetch_all<C, R>(dest: &mut C, cursor: &mut R) -> crate::Result<()>
where
    C: Collection,
    R: Cursor + ?Sized,
{
    match <C::Elem as crate::Bind>::KIND {
        Kind::Scalar => {
            while cursor.advance() {
                let mut elem = C::Elem::default();
                let Target::Scalar(slot) = elem.target() else {
                    unreachable!("scalar element produced a record target")
                };
                let mut slots = Slots::scalar(slot);
                cursor.scan(&mut slots)?;
                dest.append(elem);
            }
        }
        Kind::Record { fields } => {
            let columns = cursor.columns()?;
            let catalog = Catalog::build(fields())?;
            let plan = bind(&catalog, &columns, true)?;

            while cursor.advance() {
                let mut elem = C::Elem::default();
                let Target::Record(record) = elem.target() else {
                    unreachable!("record element produced a scalar target")
                };
                let mut slots = Slots::record(record, &plan);
                cursor.scan(&mut slots)?;
                dest.append(elem);
            }
        }
    }

    match cursor.finish() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
