/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects become [`Mapping`](crate::Mapping)s with string keys, arrays become
/// sequences, and any other expression goes through [`to_value`](crate::to_value).
///
/// # Examples
///
/// ```rust
/// use serde_markdown::{md, Value};
///
/// let data = md!({
///     "name": "Alice",
///     "tags": ["rust", "llm"],
///     "manager": null
/// });
/// assert_eq!(data.as_mapping().map(|m| m.len()), Some(3));
/// ```
#[macro_export]
macro_rules! md {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::md!($elem)),*])
    };

    ({}) => {
        $crate::Value::Mapping($crate::Mapping::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($crate::Value::from($key), $crate::md!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    // Any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
