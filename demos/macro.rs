//! Using the md! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use serde_markdown::{md, value_to_string, MarkdownOptions, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = MarkdownOptions::new().with_include_null_values(true);

    println!("Primitives:");
    println!("  bool:   {}", value_to_string(&md!(true), "flag", &options)?.trim_end());
    println!("  number: {}", value_to_string(&md!(42), "answer", &options)?.trim_end());
    println!("  null:   {}\n", value_to_string(&md!(null), "nothing", &options)?);

    let config = md!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Nested structures:");
    println!("{}", value_to_string(&config, "Config", &options)?);

    if let Value::Mapping(map) = &config {
        if let Some(Value::Sequence(features)) = map.get(&Value::from("features")) {
            println!("Features: {}", features.len());
        }
    }

    Ok(())
}
