use rowmap::{fetch_all, fetch_one, Value};
use tests::MockCursor;

#[test]
fn single_column_row_into_an_integer() {
    let mut cursor = MockCursor::new(["count"]).row(vec![Value::I64(7)]);

    let mut count = 0i64;
    fetch_one(&mut count, &mut cursor).unwrap();
    assert_eq!(count, 7);
}

#[test]
fn single_column_row_into_a_string() {
    let mut cursor = MockCursor::new(["name"]).row(vec![Value::String("ada".into())]);

    let mut name = String::new();
    fetch_one(&mut name, &mut cursor).unwrap();
    assert_eq!(name, "ada");
}

#[test]
fn null_lands_in_an_option() {
    let mut cursor = MockCursor::new(["deleted_at"]).row(vec![Value::Null]);

    let mut deleted_at = Some(9i64);
    fetch_one(&mut deleted_at, &mut cursor).unwrap();
    assert_eq!(deleted_at, None);
}

#[test]
fn cross_kind_values_are_a_type_mismatch() {
    let mut cursor = MockCursor::new(["count"]).row(vec![Value::String("7".into())]);

    let mut count = 0i64;
    let err = fetch_one(&mut count, &mut cursor).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn narrowing_checks_the_value_range() {
    let mut cursor = MockCursor::new(["flags"]).row(vec![Value::I64(300)]);

    let mut flags = 0i8;
    let err = fetch_one(&mut flags, &mut cursor).unwrap_err();
    assert!(err.is_value_out_of_range());
}

#[test]
fn a_scalar_destination_accepts_exactly_one_column() {
    let mut cursor =
        MockCursor::new(["id", "name"]).row(vec![Value::I64(1), Value::String("a".into())]);

    let mut id = 0i64;
    let err = fetch_one(&mut id, &mut cursor).unwrap_err();
    assert!(err.is_slot_index_out_of_range());
}

#[test]
fn collections_of_scalars_fill_row_by_row() {
    let mut cursor = MockCursor::new(["id"])
        .row(vec![Value::I64(1)])
        .row(vec![Value::I64(2)])
        .row(vec![Value::I64(3)]);

    let mut ids: Vec<i64> = vec![];
    fetch_all(&mut ids, &mut cursor).unwrap();
    assert_eq!(ids, vec![1, 2, 3]);
}
