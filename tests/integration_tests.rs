use serde::Serialize;
use serde_markdown::{
    to_string, to_string_with_options, to_value, EntryNumbering, Error, MarkdownOptions, Value,
};
use chrono::{TimeZone, Utc};
use serde_markdown::Number;
use std::collections::{BTreeMap, HashMap};

#[derive(Serialize)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Serialize)]
struct Address {
    street: String,
    city: String,
}

#[derive(Serialize)]
struct Contact {
    person: Person,
    address: Address,
}

#[derive(Serialize)]
struct Profile {
    name: Option<String>,
    description: Option<String>,
}

fn no_empty_collections() -> MarkdownOptions {
    MarkdownOptions::new().with_include_empty_collections(false)
}

#[test]
fn test_empty_list_with_empty_collections() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(to_string(&empty, "my list").unwrap(), "# my list\n");
}

#[test]
fn test_empty_list_without_empty_collections() {
    let empty: Vec<String> = Vec::new();
    let md = to_string_with_options(&empty, "Empty collection", &no_empty_collections()).unwrap();
    assert_eq!(md, "");
}

#[test]
fn test_list_with_items() {
    let list = vec!["item1", "item2", "item3"];
    assert_eq!(
        to_string(&list, "My List").unwrap(),
        "# My List\n- item1\n\n- item2\n\n- item3\n\n"
    );
}

#[test]
fn test_array_and_tuple_are_sequences() {
    assert_eq!(
        to_string(&[1, 2, 3], "my array").unwrap(),
        "# my array\n- 1\n\n- 2\n\n- 3\n\n"
    );
    assert_eq!(
        to_string(&(1, "two"), "pair").unwrap(),
        "# pair\n- 1\n\n- two\n\n"
    );
}

#[test]
fn test_null_values() {
    let nothing: Option<String> = None;
    let with_nulls = MarkdownOptions::new().with_include_null_values(true);

    assert_eq!(
        to_string_with_options(&nothing, "null test", &with_nulls).unwrap(),
        "null test: Null"
    );
    assert_eq!(to_string(&nothing, "Null string test").unwrap(), "");
    assert_eq!(to_string(&(), "unit").unwrap(), "");
}

#[test]
fn test_optional_with_value_renders_inner() {
    assert_eq!(to_string(&Some(123), "int test").unwrap(), "123\n");
}

#[test]
fn test_empty_dictionary() {
    let empty: HashMap<String, String> = HashMap::new();
    assert_eq!(to_string(&empty, "empty test").unwrap(), "# empty test\n");

    let md = to_string_with_options(&empty, "empty dictionary", &no_empty_collections()).unwrap();
    assert_eq!(md, "");
}

#[test]
fn test_dictionary_with_items() {
    let mut dict = BTreeMap::new();
    dict.insert("key1", 1);
    dict.insert("key2", 2);

    assert_eq!(
        to_string(&dict, "full dictionary").unwrap(),
        "# full dictionary\nkey1\n\n1\n\nkey2\n\n2\n\n"
    );
}

#[test]
fn test_dictionary_entry_numbering() {
    let mut dict = BTreeMap::new();
    dict.insert("a", vec!["x"]);
    dict.insert("b", vec!["y"]);

    let md = to_string(&dict, "groups").unwrap();
    assert!(md.contains("### 1. Value \n- x\n"));
    assert!(md.contains("### 2. Value \n- y\n"));

    let legacy = MarkdownOptions::new().with_entry_numbering(EntryNumbering::Repeated);
    let md = to_string_with_options(&dict, "groups", &legacy).unwrap();
    assert!(md.contains("### 1. Value \n- x\n"));
    assert!(md.contains("### 1. Value \n- y\n"));
}

#[test]
fn test_dictionary_container_key_uses_key_label() {
    let mut dict = BTreeMap::new();
    dict.insert(vec![1, 2], "pair");

    assert_eq!(
        to_string(&dict, "by list").unwrap(),
        "# by list\n## 1. Key \n- 1\n\n- 2\n\n\npair\n\n"
    );
}

#[test]
fn test_dictionary_null_value_label() {
    let mut dict = BTreeMap::new();
    dict.insert("k", None::<i32>);

    let options = MarkdownOptions::new().with_include_null_values(true);
    assert_eq!(
        to_string_with_options(&dict, "d", &options).unwrap(),
        "# d\nk\n\n1. Value : Null\n"
    );
}

#[test]
fn test_primitives() {
    assert_eq!(to_string(&42, "Primitive test").unwrap(), "42\n");
    assert_eq!(to_string(&true, "Bool primitive test").unwrap(), "true\n");
    assert_eq!(to_string(&3.25, "Double test").unwrap(), "3.25\n");
    assert_eq!(to_string(&'c', "char").unwrap(), "c\n");
    assert_eq!(to_string(&u64::MAX, "big").unwrap(), "18446744073709551615\n");
}

#[test]
fn test_strings() {
    assert_eq!(to_string("Hello World", "String test").unwrap(), "Hello World\n");
    assert_eq!(to_string("", "Test").unwrap(), "\n");
    assert_eq!(to_string("Hello\nWorld\t!", "Test").unwrap(), "Hello\nWorld\t!\n");
}

#[test]
fn test_simple_object() {
    let person = Person {
        name: "John".to_string(),
        age: 30,
    };
    assert_eq!(to_string(&person, "Test").unwrap(), "John\n\n30\n\n");
}

#[test]
fn test_object_with_null_property() {
    let profile = Profile {
        name: Some("John".to_string()),
        description: None,
    };

    assert_eq!(to_string(&profile, "Test").unwrap(), "John\n\n\n");

    let options = MarkdownOptions::new().with_include_null_values(true);
    assert_eq!(
        to_string_with_options(&profile, "Test", &options).unwrap(),
        "John\n\ndescription: Null\n"
    );
}

#[test]
fn test_nested_object() {
    let contact = Contact {
        person: Person {
            name: "John".to_string(),
            age: 30,
        },
        address: Address {
            street: "123 Main St".to_string(),
            city: "Anytown".to_string(),
        },
    };

    assert_eq!(
        to_string(&contact, "Test").unwrap(),
        "John\n\n30\n\n\n123 Main St\n\nAnytown\n\n\n"
    );
}

#[test]
fn test_object_fields_label_nested_containers() {
    #[derive(Serialize)]
    struct Team {
        name: String,
        members: Vec<String>,
        scores: BTreeMap<String, u32>,
    }

    let mut scores = BTreeMap::new();
    scores.insert("ann".to_string(), 3);

    let team = Team {
        name: "core".to_string(),
        members: vec!["ann".to_string()],
        scores,
    };

    assert_eq!(
        to_string(&team, "Team").unwrap(),
        "core\n\n## members\n- ann\n\n\n## scores\nann\n\n3\n\n\n"
    );
}

#[test]
fn test_nested_collections_use_correct_header_levels() {
    let mut inner = BTreeMap::new();
    inner.insert("key1", "value1");
    let list = vec![inner];

    assert_eq!(
        to_string(&list, "Test").unwrap(),
        "# Test\n- ## 1.\nkey1\n\nvalue1\n\n\n"
    );
}

#[test]
fn test_deep_nesting_caps_header_level_at_six() {
    let deep = vec![vec![vec![vec![vec![vec!["deep value"]]]]]];
    let md = to_string(&deep, "Test").unwrap();

    assert_eq!(
        md,
        "# Test\n- ## 1.\n- ### 1.\n- #### 1.\n- ##### 1.\n- ###### 1.\n- deep value\n\n\n\n\n\n\n"
    );
}

#[test]
fn test_depth_limit() {
    let too_deep = vec![vec![vec![1]]];
    let shallow = MarkdownOptions::new().with_max_depth(1).unwrap();

    let err = to_string_with_options(&too_deep, "Test", &shallow).unwrap_err();
    assert_eq!(
        err,
        Error::DepthExceeded {
            max_depth: 1,
            depth: 2,
            label: "1.".to_string(),
        }
    );

    let roomy = MarkdownOptions::new().with_max_depth(2).unwrap();
    assert!(to_string_with_options(&too_deep, "Test", &roomy).is_ok());
}

#[test]
fn test_enums_are_externally_tagged() {
    #[derive(Serialize)]
    enum Status {
        Open,
        Blocked { reason: String },
    }

    assert_eq!(to_string(&Status::Open, "status").unwrap(), "Open\n");

    let blocked = Status::Blocked {
        reason: "waiting on review".to_string(),
    };
    assert_eq!(
        to_string(&blocked, "status").unwrap(),
        "waiting on review\n\n\n"
    );
}

#[test]
fn test_json_values() {
    let json: serde_json::Value = serde_json::json!({
        "name": "Alice",
        "tags": ["rust", "llm"],
        "manager": null
    });

    let value = to_value(&json).unwrap();
    assert!(value.is_mapping());

    let md = to_string(&json, "User").unwrap();
    assert!(md.starts_with("# User\n"));
    assert!(md.contains(". Value \n- rust\n\n- llm\n\n"));
    assert!(!md.contains("Null"));
}

#[test]
fn test_value_is_serializable_by_other_formats() {
    let value = to_value(&vec![Some(1), None]).unwrap();
    assert_eq!(
        value,
        Value::Sequence(vec![Value::from(1), Value::Null])
    );
    assert_eq!(serde_json::to_string(&value).unwrap(), "[1,null]");
}

#[test]
fn test_wide_integers() {
    assert_eq!(to_string(&5i128, "n").unwrap(), "5\n");
    assert_eq!(
        to_string(&i128::MIN, "n").unwrap(),
        format!("{}\n", i128::MIN)
    );
    assert_eq!(
        to_string(&u128::MAX, "n").unwrap(),
        format!("{}\n", u128::MAX)
    );

    assert_eq!(
        to_value(&u128::from(u64::MAX)).unwrap(),
        Value::Number(Number::Unsigned(u64::MAX))
    );
    assert!(matches!(
        to_value(&i128::MIN).unwrap(),
        Value::Number(Number::Big(_))
    ));
}

#[test]
fn test_large_map_keeps_every_entry() {
    let map: HashMap<String, u32> = (0..20_000).map(|i| (format!("key{}", i), i)).collect();

    let value = to_value(&map).unwrap();
    let mapping = value.as_mapping().unwrap();
    assert_eq!(mapping.len(), 20_000);
    assert_eq!(mapping.get(&Value::from("key19999")), Some(&Value::from(19_999)));
}

#[test]
fn test_timestamps_render_the_same_from_serde_and_value() {
    #[derive(Serialize)]
    struct Event {
        at: chrono::DateTime<Utc>,
    }

    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let from_struct = to_string(&Event { at }, "event").unwrap();
    let from_value = serde_markdown::value_to_string(
        &Value::from(at),
        "event",
        &MarkdownOptions::new(),
    )
    .unwrap();

    assert_eq!(from_struct, "2024-01-02T03:04:05Z\n\n");
    assert_eq!(from_value, "2024-01-02T03:04:05Z\n");
}
