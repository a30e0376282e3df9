//! Customizing Markdown output with MarkdownOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_markdown::{to_string_with_options, EntryNumbering, MarkdownOptions};
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Task {
    title: String,
    assignee: Option<String>,
    subtasks: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let task = Task {
        title: "Write release notes".to_string(),
        assignee: None,
        subtasks: Vec::new(),
    };

    println!("Defaults (nulls dropped, empty collections kept):");
    println!("{}", to_string_with_options(&task, "Task", &MarkdownOptions::new())?);

    println!("Nulls shown, empty collections dropped:");
    let options = MarkdownOptions::new()
        .with_include_null_values(true)
        .with_include_empty_collections(false);
    println!("{}", to_string_with_options(&task, "Task", &options)?);

    let mut groups = BTreeMap::new();
    groups.insert("backend", vec!["api", "db"]);
    groups.insert("frontend", vec!["web"]);

    println!("Legacy entry numbering:");
    let legacy = MarkdownOptions::new().with_entry_numbering(EntryNumbering::Repeated);
    println!("{}", to_string_with_options(&groups, "Groups", &legacy)?);

    println!("Depth limit:");
    let shallow = MarkdownOptions::new().with_max_depth(1)?;
    match to_string_with_options(&groups, "Groups", &shallow) {
        Ok(markdown) => println!("{}", markdown),
        Err(err) => println!("  {}", err),
    }

    Ok(())
}
