//! Usage example: the Person table walkthrough.
//!
//! Creates a record, ages it through an update thunk, reads it back, and
//! deletes it, asserting the descriptor contract at each step. Run with:
//!
//! ```text
//! cargo run --example person
//! ```

use tabledb::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabledb=debug".into()),
        )
        .init();

    let mut db = Database::new();
    let people = db.create_table::<Person>("Person")?;

    let created = people.create(Person {
        name: "John".to_string(),
        age: 42,
    });
    println!("created {} as {}", created.new_value.name, created.key);

    let update = people.update(created.key, |john| match john {
        Some(john) => Update::Replace(Person {
            age: john.age + 1,
            ..john.clone()
        }),
        None => Update::Keep,
    });
    assert!(update.updated, "expected the birthday update to take effect");

    let entry = people.read(created.key);
    assert!(entry.exists, "expected to see the existing entry");
    let age = entry.value.map(|p| p.age);
    assert_eq!(age, Some(43), "John's age should have become 43");
    println!("after the update John is {:?}", age);

    let deleted = people.delete(created.key);
    assert!(deleted.deleted);
    assert!(
        !people.read(deleted.key).exists,
        "expected the entry to be gone"
    );
    println!("deleted {}", deleted.key);

    Ok(())
}
