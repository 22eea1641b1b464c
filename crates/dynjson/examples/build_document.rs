//! Builds a nested document from scratch and prints it.

use dynjson::{List, Object};

fn main() -> dynjson::Result<()> {
    let john = Object::new();
    john.set_string("fname", "John");
    john.set_string("lname", "Doe");

    let jane = Object::new();
    jane.set_string("fname", "Jane");
    jane.set_string("mname", "Maria");
    jane.set_string("lname", "Dane");

    let people = List::new();
    people.append([john, jane]);

    let stats = Object::new();
    stats.set_number("count", people.len() as f64);
    stats.set_number("ratio", 0.5);

    let root = Object::new();
    root.set_list("people", people);
    root.set_object("stats", stats);
    root.set_bool("complete", true);

    // {"people":[...],"stats":{"count":2,"ratio":0.5},"complete":true}
    println!("{root}");
    println!("{}", root.to_json_pretty()?);

    let middle = root
        .list("people")
        .iter()
        .filter_map(|item| item.object().string_ok("mname"))
        .collect::<Vec<_>>();
    println!("middle names: {middle:?}");
    Ok(())
}
