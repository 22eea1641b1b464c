//! Reads a list of people and prints whichever name parts are present.
//!
//! Run with `RUST_LOG=dynjson=debug` to see parse diagnostics.

use tracing_subscriber::EnvFilter;

const PEOPLE: &str = r#"[
    {"fname": "John", "lname": "Doe"},
    {"fname": "Jane", "mname": "Maria", "lname": "Dane"}
]"#;

fn main() -> dynjson::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let people = dynjson::parse_list(PEOPLE)?;
    for item in &people {
        let person = item.object();
        for (field, label) in [("fname", "First"), ("mname", "Middle"), ("lname", "Last")] {
            if person.has(field) {
                println!("{label} name: {}", person.string(field));
            }
        }
        println!();
    }

    if let Err(err) = dynjson::parse_object(PEOPLE) {
        println!("not an object: {err}");
    }
    Ok(())
}
