//! Markdown serialization.
//!
//! Serialization happens in two steps:
//!
//! 1. [`ValueSerializer`] is a `serde::Serializer` that turns any `T: Serialize`
//!    into a [`Value`]. This is the only place that looks at the shape of user types.
//! 2. [`Serializer`] walks the [`Value`] recursively and produces Markdown.
//!
//! ## Rendering Rules
//!
//! Each value is rendered with a *label* and a *depth* (0 at the top level):
//!
//! - **Null**: `"{label}: Null"` when `include_null_values` is set, otherwise nothing
//! - **Mapping**: a `"{marks} {label}"` header, then for every entry the key labeled
//!   `"{i}. Key "` at `depth + 1` and the value labeled `"{i}. Value "` at `depth + 2`
//! - **Scalar**: its plain text, no header and no label
//! - **Sequence**: a `"{marks} {label}"` header, then one `"- "` line per item,
//!   labeled `"{i}."` at `depth + 1`
//! - **Record**: no header of its own; each field labeled with its name at `depth + 1`
//!
//! `marks` is `min(depth + 1, 6)` `#` characters. Nested blocks are not indented;
//! nesting is conveyed by header level only.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_markdown::{md, MarkdownOptions, Serializer};
//!
//! let serializer = Serializer::new(MarkdownOptions::new()).unwrap();
//! let md = serializer.serialize(&md!([1, 2]), "numbers").unwrap();
//! assert_eq!(md, "# numbers\n- 1\n\n- 2\n\n");
//! ```

use crate::options::header_marks;
use crate::{Error, Mapping, MarkdownOptions, Number, Record, Result, Value};
use serde::{ser, Serialize};
use tracing::{trace, warn};

/// The Markdown serializer.
///
/// Holds a validated copy of [`MarkdownOptions`] and renders [`Value`]s. It keeps
/// no state between calls, so one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct Serializer {
    options: MarkdownOptions,
}

impl Serializer {
    /// Creates a serializer after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxDepth`] if `options.max_depth` is outside `1..=15`.
    pub fn new(options: MarkdownOptions) -> Result<Self> {
        options.validate()?;
        Ok(Serializer { options })
    }

    #[must_use]
    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    /// Renders `value` as a Markdown document captioned `label`.
    ///
    /// An empty string is a valid result: it means everything was suppressed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] if a mapping or sequence is nested deeper
    /// than `max_depth`.
    pub fn serialize(&self, value: &Value, label: &str) -> Result<String> {
        self.render(value, label, 0)
    }

    fn render(&self, value: &Value, label: &str, depth: usize) -> Result<String> {
        match value {
            Value::Null => Ok(if self.options.include_null_values {
                format!("{}: Null", label)
            } else {
                String::new()
            }),
            Value::Mapping(map) => self.render_mapping(map, label, depth),
            Value::Sequence(items) => self.render_sequence(items, label, depth),
            Value::Record(fields) => self.render_record(fields, depth),
            scalar => Ok(format!("{}\n", scalar)),
        }
    }

    fn render_mapping(&self, map: &Mapping, label: &str, depth: usize) -> Result<String> {
        if map.is_empty() && !self.options.include_empty_collections {
            return Ok(String::new());
        }
        self.check_depth(label, depth)?;
        trace!(label, depth, entries = map.len(), "rendering mapping");

        let mut output = String::with_capacity(64);
        push_line(&mut output, &format!("{} {}", header_marks(depth), label));
        for (position, (key, value)) in map.iter().enumerate() {
            let index = self.options.entry_numbering.index_for(position);
            let key_label = format!("{}. Key ", index);
            let value_label = format!("{}. Value ", index);
            push_line(&mut output, &self.render(key, &key_label, depth + 1)?);
            push_line(&mut output, &self.render(value, &value_label, depth + 2)?);
        }
        Ok(output)
    }

    fn render_sequence(&self, items: &[Value], label: &str, depth: usize) -> Result<String> {
        if items.is_empty() && !self.options.include_empty_collections {
            return Ok(String::new());
        }
        self.check_depth(label, depth)?;
        trace!(label, depth, items = items.len(), "rendering sequence");

        let mut output = String::with_capacity(64);
        push_line(&mut output, &format!("{} {}", header_marks(depth), label));
        for (position, item) in items.iter().enumerate() {
            let item_label = format!("{}.", position + 1);
            output.push_str("- ");
            push_line(&mut output, &self.render(item, &item_label, depth + 1)?);
        }
        Ok(output)
    }

    // Records are transparent: the caption comes from whoever holds them.
    fn render_record(&self, fields: &Record, depth: usize) -> Result<String> {
        let mut output = String::with_capacity(64);
        for (name, value) in fields.iter() {
            push_line(&mut output, &self.render(value, name, depth + 1)?);
        }
        Ok(output)
    }

    fn check_depth(&self, label: &str, depth: usize) -> Result<()> {
        if depth > usize::from(self.options.max_depth) {
            warn!(
                label,
                depth,
                max_depth = self.options.max_depth,
                "container nested past max_depth"
            );
            return Err(Error::depth_exceeded(self.options.max_depth, depth, label));
        }
        Ok(())
    }
}

#[inline]
fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push('\n');
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// Enum variants carrying data are externally tagged, the way `serde_json` does
/// it: `Shape::Circle { r: 1 }` becomes a record `{ Circle: { r: 1 } }`.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMapping {
    map: Mapping,
    current_key: Option<Value>,
}

pub struct SerializeRecord {
    fields: Record,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    fields: Record,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMapping;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Sequence(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    // A unit struct is an object without fields.
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Record(Record::new()))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut fields = Record::with_capacity(1);
        fields.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Record(fields))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMapping> {
        Ok(SerializeMapping {
            map: Mapping::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeRecord> {
        Ok(SerializeRecord {
            fields: Record::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            fields: Record::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut fields = Record::with_capacity(1);
        fields.insert(self.variant.to_string(), Value::Sequence(self.vec));
        Ok(Value::Record(fields))
    }
}

impl ser::SerializeMap for SerializeMapping {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        // serde maps never repeat a key
        self.map.push(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.map))
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.fields))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = Record::with_capacity(1);
        outer.insert(self.variant.to_string(), Value::Record(self.fields));
        Ok(Value::Record(outer))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
