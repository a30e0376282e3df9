//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use serde_markdown::{to_value, value_to_string, MarkdownOptions, Mapping, Record, Value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = MarkdownOptions::new();

    // Mapping keys keep their own type
    let mut ports = Mapping::new();
    ports.insert(Value::from(80), Value::from("http"));
    ports.insert(Value::from(443), Value::from("https"));
    println!("{}", value_to_string(&Value::from(ports), "Ports", &options)?);

    // Records render their fields in insertion order, without a header
    let mut server = Record::new();
    server.insert("host".to_string(), Value::from("localhost"));
    server.insert("tags".to_string(), Value::from(vec!["edge", "eu"]));
    println!("{}", value_to_string(&Value::from(server), "Server", &options)?);

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("Type checks:");
    println!("  is_record:   {}", user_value.is_record());
    println!("  is_sequence: {}", user_value.is_sequence());
    if let Some(fields) = user_value.as_record() {
        println!("  fields:      {:?}", fields.keys().collect::<Vec<_>>());
    }

    Ok(())
}
