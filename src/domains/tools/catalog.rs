//! Operation catalog types.
//!
//! Every tool exposed by the server is described by a static [`Operation`]:
//! its name, description, the remote path it queries and an ordered list of
//! [`FieldSpec`]s. A field doubles as the entry of the per-operation rename
//! table, mapping the tool argument onto a remote query parameter.
//!
//! The catalog is plain data. It declares defaults and allowed values for
//! clients, but enforces neither: enum membership and required fields are
//! left to the remote API.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Map, Value};

/// Declared type of a tool argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    String,
}

impl FieldKind {
    /// JSON Schema type keyword.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

/// Default value applied when a field is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Integer(i64),
}

impl DefaultValue {
    pub fn to_json(self) -> Value {
        match self {
            Self::Integer(n) => Value::from(n),
        }
    }
}

/// A single input field of an operation.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Argument name as seen by MCP clients.
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub default: Option<DefaultValue>,
    /// Allowed values advertised as a JSON Schema `enum`. Empty means free-form.
    pub allowed: &'static [&'static str],
    pub required: bool,
    /// Remote query parameter this field is copied into. `None` for fields
    /// consumed by the execution mode itself (e.g. a year range bound).
    pub param: Option<&'static str>,
}

impl FieldSpec {
    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::Integer)
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::String)
    }

    const fn new(name: &'static str, description: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            description,
            kind,
            default: None,
            allowed: &[],
            required: false,
            param: None,
        }
    }

    /// Copy this field into the given remote parameter.
    pub const fn param(mut self, param: &'static str) -> Self {
        self.param = Some(param);
        self
    }

    pub const fn default_int(mut self, value: i64) -> Self {
        self.default = Some(DefaultValue::Integer(value));
        self
    }

    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// JSON Schema fragment describing this field.
    pub fn schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".into(), self.kind.schema_type().into());
        schema.insert("description".into(), self.description.into());
        if let Some(default) = self.default {
            schema.insert("default".into(), default.to_json());
        }
        if !self.allowed.is_empty() {
            schema.insert("enum".into(), self.allowed.iter().copied().collect());
        }
        Value::Object(schema)
    }
}

/// How an operation turns one invocation into remote requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// A single GET request.
    Single,
    /// One GET per year in the inclusive range `[start, end]`, issued
    /// sequentially. `param` receives the year of each request.
    PerYear {
        start: &'static str,
        end: &'static str,
        param: &'static str,
    },
}

/// A named, schema-described remote query.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub description: &'static str,
    /// Noun phrase used in failure messages ("Error fetching <label>: ...").
    pub label: &'static str,
    /// Path relative to the profile base URL.
    pub path: &'static str,
    pub fields: &'static [FieldSpec],
    /// Parameters appended unconditionally after the mapped fields.
    pub fixed_params: &'static [(&'static str, &'static str)],
    pub mode: ExecutionMode,
    /// Include the HTTP status and base URL in failure messages.
    pub diagnostics: bool,
}

/// Population type codes accepted by the statistics API.
pub const POPULATION_TYPES: &[&str] = &["REF", "ASY", "IDP", "STA", "OOC", "VDA"];

impl Operation {
    /// Look up a field by argument name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Render the JSON Schema object advertised for this operation.
    pub fn input_schema(&self) -> JsonObject {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.schema()))
            .collect();
        let required: Vec<Value> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| Value::from(f.name))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), "object".into());
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), Value::Array(required));
        schema
    }

    /// Create a Tool model for this operation (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
