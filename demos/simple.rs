//! Rendering a struct as Markdown prompt context.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_markdown::to_string;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

#[derive(Debug, Serialize)]
struct Team {
    name: String,
    members: Vec<User>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let team = Team {
        name: "Platform".to_string(),
        members: vec![
            User {
                id: 42,
                name: "Alice Johnson".to_string(),
                email: "alice@example.com".to_string(),
            },
            User {
                id: 43,
                name: "Bob Smith".to_string(),
                email: "bob@example.com".to_string(),
            },
        ],
    };

    let markdown = to_string(&team, "Team")?;
    println!("Markdown output:\n{}", markdown);

    Ok(())
}
