use rowmap::{fetch_one, Value};
use tests::MockCursor;

#[derive(Debug, Default, PartialEq, rowmap::Record)]
struct Address {
    city: String,
    zip: String,
}

#[test]
fn flattened_fields_bind_unprefixed() {
    #[derive(Debug, Default, rowmap::Record)]
    struct User {
        id: i64,
        #[flatten]
        address: Address,
    }

    let mut cursor = MockCursor::new(["id", "city", "zip"]).row(vec![
        Value::I64(1),
        Value::String("oslo".into()),
        Value::String("0150".into()),
    ]);

    let mut user = User::default();
    fetch_one(&mut user, &mut cursor).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.address.city, "oslo");
    assert_eq!(user.address.zip, "0150");
}

#[test]
fn nullable_nested_record_is_materialized_on_demand() {
    #[derive(Debug, Default, rowmap::Record)]
    struct User {
        id: i64,
        #[flatten]
        address: Option<Address>,
    }

    let mut cursor = MockCursor::new(["id", "city", "zip"]).row(vec![
        Value::I64(1),
        Value::String("oslo".into()),
        Value::String("0150".into()),
    ]);

    let mut user = User::default();
    assert!(user.address.is_none());
    fetch_one(&mut user, &mut cursor).unwrap();

    let address = user.address.expect("allocated during binding");
    assert_eq!(address.city, "oslo");
    assert_eq!(address.zip, "0150");
}

#[test]
fn boxed_nested_record_binds_through_the_allocation() {
    #[derive(Debug, rowmap::Record)]
    struct User {
        id: i64,
        #[flatten]
        address: Box<Address>,
    }

    impl Default for User {
        fn default() -> Self {
            User {
                id: 0,
                address: Box::default(),
            }
        }
    }

    let mut cursor = MockCursor::new(["id", "city", "zip"]).row(vec![
        Value::I64(1),
        Value::String("oslo".into()),
        Value::String("0150".into()),
    ]);

    let mut user = User::default();
    fetch_one(&mut user, &mut cursor).unwrap();

    assert_eq!(user.address.city, "oslo");
}

#[test]
fn optional_boxed_nested_record() {
    #[derive(Debug, Default, rowmap::Record)]
    struct User {
        id: i64,
        #[flatten]
        address: Option<Box<Address>>,
    }

    let mut cursor = MockCursor::new(["id", "city", "zip"]).row(vec![
        Value::I64(1),
        Value::String("oslo".into()),
        Value::String("0150".into()),
    ]);

    let mut user = User::default();
    fetch_one(&mut user, &mut cursor).unwrap();

    assert_eq!(user.address.unwrap().city, "oslo");
}

#[test]
fn annotation_inside_nested_record_switches_to_tagged_mode() {
    #[derive(Debug, Default, rowmap::Record)]
    struct Contact {
        #[column("email_address")]
        email: String,
    }

    #[derive(Debug, Default, rowmap::Record)]
    struct User {
        id: i64,
        #[flatten]
        contact: Contact,
    }

    // tagged mode: matched by name, column order irrelevant
    let mut cursor = MockCursor::new(["email_address", "id"])
        .row(vec![Value::String("ada@example.com".into()), Value::I64(1)]);

    let mut user = User::default();
    fetch_one(&mut user, &mut cursor).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.contact.email, "ada@example.com");
}

#[test]
fn duplicate_names_across_flattening_are_ambiguous() {
    #[derive(Debug, Default, rowmap::Record)]
    struct User {
        city: String,
        #[flatten]
        address: Address,
    }

    let mut cursor = MockCursor::new(["city", "zip"])
        .row(vec![Value::String("oslo".into()), Value::String("0150".into())]);

    let mut user = User::default();
    let err = fetch_one(&mut user, &mut cursor).unwrap_err();
    assert!(err.is_ambiguous_column());
}
