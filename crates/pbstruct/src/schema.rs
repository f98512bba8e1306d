//! JSON schema input.
//!
//! Two layers:
//! - **Deserialization layer**: [`RawSchema`], a 1:1 mapping of the file
//! - **Layout layer**: [`StructDefinition`]s computed by [`LayoutBuilder`]
//!
//! ```json
//! {
//!   "Person": {
//!     "fields": [
//!       { "name": "id", "number": 1, "type": "int32", "label": "required" },
//!       { "name": "tags", "number": 2, "type": "string", "label": "repeated" }
//!     ]
//!   }
//! }
//! ```
//!
//! `label` defaults to `optional`. Messages keep their file order, and a
//! message name may appear only once.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::definition::{Label, LayoutBuilder, StructDefinition};
use crate::error::SchemaError;
use crate::trace::debug;
use crate::value_type::ValueType;

/// Message name to message declaration, in file order.
#[derive(Debug, Clone, Default)]
pub struct RawSchema {
    pub messages: IndexMap<String, RawMessage>,
}

/// One message declaration.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMessage {
    pub fields: Vec<RawField>,
}

/// One field declaration.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawField {
    pub name: String,
    pub number: u32,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub label: Label,
}

/// Top-level schema entries exactly as written, repeated names included.
struct MessageEntries(Vec<(String, RawMessage)>);

impl<'de> Deserialize<'de> for MessageEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = MessageEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from message names to message declarations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(MessageEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parse schema JSON.
pub fn parse_schema(json: &str) -> Result<RawSchema, SchemaError> {
    let MessageEntries(entries) = serde_json::from_str(json)?;

    let mut messages = IndexMap::with_capacity(entries.len());
    for (name, message) in entries {
        if messages.contains_key(&name) {
            return Err(SchemaError::DuplicateMessage(name));
        }
        messages.insert(name, message);
    }
    Ok(RawSchema { messages })
}

/// Read and parse a schema file.
pub fn load_schema(path: impl AsRef<Path>) -> Result<RawSchema, SchemaError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = json.len(), "loaded schema");
    parse_schema(&json)
}

impl RawSchema {
    pub fn message_names(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Lay out the named message.
    pub fn definition(&self, name: &str) -> Result<StructDefinition, SchemaError> {
        let message = self
            .messages
            .get(name)
            .ok_or_else(|| SchemaError::UnknownMessage(name.to_string()))?;
        message.layout(name)
    }

    /// Lay out every message, in file order.
    pub fn definitions(&self) -> Result<Vec<StructDefinition>, SchemaError> {
        self.messages
            .iter()
            .map(|(name, message)| message.layout(name))
            .collect()
    }
}

impl RawMessage {
    fn layout(&self, name: &str) -> Result<StructDefinition, SchemaError> {
        let mut builder = LayoutBuilder::new(name);
        for field in &self.fields {
            builder.push_field(field.name.as_str(), field.number, field.value_type, field.label);
        }
        builder.build().map_err(|source| SchemaError::Definition {
            message: name.to_string(),
            source,
        })
    }
}
