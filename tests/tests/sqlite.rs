use rowmap_sqlite::{ConnectionExt, SqliteRows};
use rusqlite::Connection;

#[derive(Debug, Default, PartialEq, rowmap::Record)]
struct User {
    id: i64,
    name: String,
    age: i32,
}

fn seeded() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, age INTEGER NOT NULL);
         INSERT INTO users (id, name, age) VALUES (1, 'ada', 36), (2, 'grace', 45);",
    )
    .unwrap();
    conn
}

#[test]
fn query_one_binds_the_first_row() {
    let conn = seeded();

    let mut user = User::default();
    conn.query_one(
        "SELECT id, name, age FROM users WHERE id = ?1",
        [2i64],
        &mut user,
    )
    .unwrap();

    assert_eq!(
        user,
        User {
            id: 2,
            name: "grace".into(),
            age: 45,
        }
    );
}

#[test]
fn query_one_without_a_match_is_no_record_found() {
    let conn = seeded();

    let mut user = User::default();
    let err = conn
        .query_one(
            "SELECT id, name, age FROM users WHERE id = ?1",
            [99i64],
            &mut user,
        )
        .unwrap_err();

    assert!(err.is_no_record_found());
}

#[test]
fn query_all_collects_every_row() {
    let conn = seeded();

    let mut users: Vec<User> = vec![];
    conn.query_all("SELECT id, name, age FROM users ORDER BY id", [], &mut users)
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "ada");
    assert_eq!(users[1].name, "grace");
}

#[test]
fn scalar_queries_need_no_struct() {
    let conn = seeded();

    let mut total = 0i64;
    conn.query_one("SELECT COUNT(*) FROM users", [], &mut total)
        .unwrap();
    assert_eq!(total, 2);

    let mut names: Vec<String> = vec![];
    conn.query_all("SELECT name FROM users ORDER BY name", [], &mut names)
        .unwrap();
    assert_eq!(names, vec!["ada", "grace"]);
}

#[test]
fn column_aliases_switch_a_tagged_query_on() {
    #[derive(Debug, Default, rowmap::Record)]
    struct Summary {
        #[column("who")]
        name: String,
        #[column("years")]
        age: i32,
    }

    let conn = seeded();

    let mut summary = Summary::default();
    conn.query_one(
        "SELECT age AS years, name AS who FROM users WHERE id = 1",
        [],
        &mut summary,
    )
    .unwrap();

    assert_eq!(summary.name, "ada");
    assert_eq!(summary.age, 36);
}

#[test]
fn null_columns_land_in_options() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);
         INSERT INTO notes (id, body) VALUES (1, NULL);",
    )
    .unwrap();

    #[derive(Debug, Default, rowmap::Record)]
    struct Note {
        id: i64,
        body: Option<String>,
    }

    let mut note = Note::default();
    conn.query_one("SELECT id, body FROM notes", [], &mut note)
        .unwrap();

    assert_eq!(note.id, 1);
    assert_eq!(note.body, None);
}

#[test]
fn the_cursor_works_standalone() {
    let conn = seeded();

    let mut stmt = conn
        .prepare("SELECT id, name, age FROM users WHERE age > ?1 ORDER BY id")
        .unwrap();
    let mut rows = SqliteRows::query(&mut stmt, [40i64]).unwrap();

    let mut users: Vec<User> = vec![];
    rowmap::fetch_all(&mut users, &mut rows).unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 2);
}
