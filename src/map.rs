//! Ordered container types for [`Value`](crate::Value).
//!
//! - [`Mapping`]: key-value association whose keys are themselves values, so
//!   integer, boolean or string keys all survive introspection unchanged
//! - [`Record`]: named fields of a composite object, in declaration order
//!
//! Both preserve insertion order, which is the order entries are rendered in.
//!
//! ## Examples
//!
//! ```rust
//! use serde_markdown::{Mapping, Record, Value};
//!
//! let mut scores = Mapping::new();
//! scores.insert(Value::from(7), Value::from("seven"));
//! scores.insert(Value::from("x"), Value::from(1.5));
//! assert_eq!(scores.len(), 2);
//!
//! let mut person = Record::new();
//! person.insert("name".to_string(), Value::from("Alice"));
//! person.insert("age".to_string(), Value::from(30));
//! let fields: Vec<_> = person.keys().cloned().collect();
//! assert_eq!(fields, vec!["name", "age"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// An insertion-ordered association of [`Value`] keys to [`Value`]s.
///
/// Keys cannot be hashed in general (floats), so [`Mapping::insert`] and
/// [`Mapping::get`] scan linearly. Maps coming through serde already have unique
/// keys and are appended without the scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping(Vec<(Value, Value)>);

impl Mapping {
    /// Creates an empty `Mapping`.
    #[must_use]
    pub fn new() -> Self {
        Mapping(Vec::new())
    }

    /// Creates an empty `Mapping` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Mapping(Vec::with_capacity(capacity))
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced in place (keeping the
    /// original position) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_markdown::{Mapping, Value};
    ///
    /// let mut map = Mapping::new();
    /// assert!(map.insert(Value::from("k"), Value::from(1)).is_none());
    /// assert_eq!(map.insert(Value::from("k"), Value::from(2)), Some(Value::from(1)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Appends an entry without looking for an existing key.
    pub(crate) fn push(&mut self, key: Value, value: Value) {
        self.0.push((key, value));
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.0.iter().map(|(k, v)| (k, v))
    }
}

impl IntoIterator for Mapping {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Mapping::new();
        for (k, v) in iter {
            map.insert(k.into(), v.into());
        }
        map
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Mapping {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Mapping {
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

/// The named fields of a composite object, in declaration order.
///
/// This is a thin wrapper around [`IndexMap`]; field names are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty record with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Sets a field, returning its previous value if it was already present.
    pub fn insert(&mut self, name: String, value: Value) -> Option<Value> {
        self.0.insert(name, value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in declaration order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the field values, in declaration order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over `(name, value)` pairs, in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Record(IndexMap::from_iter(iter))
    }
}
