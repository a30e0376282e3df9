//! Assembling a prompt with a serialized data block.
//!
//! Run with: cargo run --example structured_prompt

use serde::Serialize;
use serde_markdown::{MarkdownOptions, StructuredPrompt};
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Order {
    id: u32,
    items: Vec<String>,
    total: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut orders = BTreeMap::new();
    orders.insert(
        "latest".to_string(),
        Order {
            id: 1001,
            items: vec!["keyboard".to_string(), "mouse".to_string()],
            total: 129.5,
        },
    );

    let prompt = StructuredPrompt::new("You are a helpful support agent.")
        .with_user_prompt("Where is my order?")
        .with_closing_prompt("Answer in two sentences.")
        .with_input_data(Some(&orders), &MarkdownOptions::new())?;

    println!("{}\n", prompt.system_prompt);
    println!("{}", prompt.structured_data);
    if let Some(user) = &prompt.user_prompt {
        println!("{}", user);
    }
    if let Some(closing) = &prompt.closing_prompt {
        println!("{}", closing);
    }

    Ok(())
}
