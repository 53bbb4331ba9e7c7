//! Named JSON documents with an object root

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::{Kind, SyncResult, synchronize};

/// Widest indentation `render` produces; wider requests are clamped.
pub const MAX_INDENT: usize = 10;

/// A JSON document that can take part in synchronization.
///
/// The root is always an object; anything else is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    root: Map<String, Value>,
}

impl Document {
    pub fn new(name: impl Into<String>, root: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Parse document text. Blank text is an empty object.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::new(name, Map::new()));
        }

        let value: Value =
            serde_json::from_str(trimmed).map_err(|e| Error::parse(&name, e.to_string()))?;
        Self::from_value(name, value)
    }

    /// Wrap an already parsed value, checking that its root is an object.
    pub fn from_value(name: impl Into<String>, value: Value) -> Result<Self> {
        let name = name.into();
        match value {
            Value::Object(root) => Ok(Self { name, root }),
            other => Err(Error::UnsyncableRoot {
                name,
                kind: Kind::of(&other),
            }),
        }
    }

    /// Display name used in messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.root
    }

    /// Align this document's key structure with `primary`.
    pub fn sync_from(&mut self, primary: &Document) -> SyncResult {
        synchronize(&primary.root, &mut self.root)
    }

    /// Serialize with `indent` spaces per level; `0` renders on one line.
    pub fn render(&self, indent: usize) -> Result<String> {
        if indent == 0 {
            return Ok(serde_json::to_string(&self.root)?);
        }

        let indent = " ".repeat(indent.min(MAX_INDENT));
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| Error::parse(&self.name, e.to_string()))
    }
}
