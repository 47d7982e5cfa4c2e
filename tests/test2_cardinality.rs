use sql_template::cardinality::{single_optional, single_required};
use sql_template::prelude::*;
use tempfile::TempDir;

fn name_mapper(row: &SqlRow) -> Result<String, DataAccessError> {
    row.get("name")
        .and_then(RowValues::as_text)
        .map(ToString::to_string)
        .ok_or_else(|| DataAccessError::MappingError("missing name".into()))
}

fn setup(template: &SqlTemplate<SqliteSource>) -> Result<(), DataAccessError> {
    template.execute_batch("CREATE TABLE pets (recid INTEGER PRIMARY KEY, name TEXT NOT NULL);")?;
    for (id, name) in [(1, "ada"), (2, "grace"), (3, "edsger")] {
        template.execute_dml(
            "INSERT INTO pets (recid, name) VALUES (?1, ?2)",
            &[RowValues::Int(id), RowValues::Text(name.to_string())],
        )?;
    }
    Ok(())
}

#[test]
fn query_one_enforces_exactly_one_row() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let template = SqlTemplate::new(SqliteSource::new(dir.path().join("test2.db")));
    setup(&template)?;

    let name = template.query_one(
        "SELECT name FROM pets WHERE recid = ?1",
        &[RowValues::Int(2)],
        name_mapper,
    )?;
    assert_eq!(name, "grace");

    let zero = template.query_one(
        "SELECT name FROM pets WHERE recid = ?1",
        &[RowValues::Int(42)],
        name_mapper,
    );
    assert!(matches!(
        zero,
        Err(DataAccessError::IncorrectResultSize {
            expected: 1,
            actual: 0
        })
    ));

    let three = template.query_one("SELECT name FROM pets", &[], name_mapper);
    assert!(matches!(
        three,
        Err(DataAccessError::IncorrectResultSize {
            expected: 1,
            actual: 3
        })
    ));

    Ok(())
}

#[test]
fn query_optional_tolerates_absence_but_not_excess() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let template = SqlTemplate::new(SqliteSource::new(dir.path().join("test2b.db")));
    setup(&template)?;

    let absent = template.query_optional(
        "SELECT name FROM pets WHERE recid = ?1",
        &[RowValues::Int(42)],
        name_mapper,
    )?;
    assert_eq!(absent, None);

    let present = template.query_optional(
        "SELECT name FROM pets WHERE recid = ?1",
        &[RowValues::Int(1)],
        name_mapper,
    )?;
    assert_eq!(present.as_deref(), Some("ada"));

    let excess = template.query_optional("SELECT name FROM pets", &[], name_mapper);
    assert!(matches!(
        excess,
        Err(DataAccessError::IncorrectResultSize {
            expected: 1,
            actual: 3
        })
    ));

    Ok(())
}

#[test]
fn cardinality_policy_is_pure_post_processing() {
    assert_eq!(single_required(vec![7]).unwrap(), 7);
    assert!(matches!(
        single_required(Vec::<i32>::new()),
        Err(DataAccessError::IncorrectResultSize {
            expected: 1,
            actual: 0
        })
    ));
    assert!(matches!(
        single_required(vec![1, 2, 3]),
        Err(DataAccessError::IncorrectResultSize {
            expected: 1,
            actual: 3
        })
    ));

    assert_eq!(single_optional(Vec::<i32>::new()).unwrap(), None);
    assert_eq!(single_optional(vec!["x"]).unwrap(), Some("x"));
    assert!(matches!(
        single_optional(vec![1, 2]),
        Err(DataAccessError::IncorrectResultSize {
            expected: 1,
            actual: 2
        })
    ));
}
