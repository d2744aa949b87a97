//! Argument to request mapping.
//!
//! Turns the loosely typed arguments of a tool call into a [`RemoteRequest`]
//! by walking the operation's field table. Values are coerced to text per
//! the field's declared kind but never rejected: anything the remote API
//! would refuse is left for it to refuse.

use rmcp::model::JsonObject;
use serde::Serialize;
use serde_json::Value;

use super::catalog::{ExecutionMode, FieldKind, FieldSpec, Operation};
use super::error::ToolError;

/// HTTP method of an outbound request. The statistics API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

/// A fully resolved outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub method: Method,
    /// Path relative to the API base URL.
    pub path: String,
    /// Query parameters in the order they are sent.
    pub query: Vec<(String, String)>,
}

impl RemoteRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.query.push((name.into(), value.into()));
    }

    /// Value of the first parameter with the given name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Path plus encoded query string, for logging.
    pub fn path_and_query(&self) -> String {
        match encode_query(&self.query) {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

fn encode_query<T: Serialize>(query: &T) -> Option<String> {
    serde_urlencoded::to_string(query)
        .ok()
        .filter(|q| !q.is_empty())
}

/// Render an argument as a query value according to the field kind.
///
/// `null` and empty strings count as omitted. Integers accept JSON numbers
/// and numeric strings; a value that does not look like an integer is sent
/// as-is.
pub fn coerce(kind: FieldKind, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => match kind {
            FieldKind::Integer => Some(
                s.trim()
                    .parse::<i64>()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|_| s.clone()),
            ),
            FieldKind::String => Some(s.clone()),
        },
        Value::Number(n) => match kind {
            FieldKind::Integer => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| is_integral_i64(*f)).map(|f| f as i64))
                .map(|i| i.to_string())
                .or_else(|| Some(n.to_string())),
            FieldKind::String => Some(n.to_string()),
        },
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Whether a float is a whole number that fits an `i64` without saturating.
fn is_integral_i64(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Supplied value of a field, falling back to its declared default.
fn resolve(field: &FieldSpec, arguments: &JsonObject) -> Option<String> {
    match arguments.get(field.name).and_then(|v| coerce(field.kind, v)) {
        Some(value) => Some(value),
        None => field
            .default
            .and_then(|d| coerce(field.kind, &d.to_json())),
    }
}

fn integer_argument(operation: &Operation, name: &str, arguments: &JsonObject) -> Option<i64> {
    let field = operation.field(name)?;
    resolve(field, arguments)?.parse().ok()
}

/// Longest year range a per-year operation will walk.
pub const MAX_SERIES_YEARS: i64 = 200;

impl Operation {
    /// Build the request for a single-request operation.
    pub fn build_request(&self, arguments: &JsonObject) -> RemoteRequest {
        let mut request = RemoteRequest::get(self.path);

        for field in self.fields {
            let Some(param) = field.param else {
                continue;
            };
            if let Some(value) = resolve(field, arguments) {
                request.push(param, value);
            }
        }

        for (name, value) in self.fixed_params {
            request.push(*name, *value);
        }

        request
    }

    /// Build the request for one year of a per-year operation.
    pub fn build_year_request(&self, arguments: &JsonObject, year: i64) -> RemoteRequest {
        let mut request = self.build_request(arguments);
        if let ExecutionMode::PerYear { param, .. } = self.mode {
            request.query.insert(0, (param.to_string(), year.to_string()));
        }
        request
    }

    /// Inclusive year range of a per-year operation.
    ///
    /// A reversed range yields no years. Both bounds must be present and
    /// integral, since there is no request to issue otherwise, and the range
    /// may span at most [`MAX_SERIES_YEARS`] years.
    pub fn year_range(
        &self,
        arguments: &JsonObject,
    ) -> Result<std::ops::RangeInclusive<i64>, ToolError> {
        let ExecutionMode::PerYear { start, end, .. } = self.mode else {
            return Err(ToolError::internal(format!(
                "{} does not iterate over years",
                self.name
            )));
        };

        let from = integer_argument(self, start, arguments).ok_or_else(|| {
            ToolError::invalid_arguments(format!("'{start}' must be an integer year"))
        })?;
        let to = integer_argument(self, end, arguments).ok_or_else(|| {
            ToolError::invalid_arguments(format!("'{end}' must be an integer year"))
        })?;

        if to.saturating_sub(from) >= MAX_SERIES_YEARS {
            return Err(ToolError::invalid_arguments(format!(
                "year range {from}..={to} spans more than {MAX_SERIES_YEARS} years"
            )));
        }

        Ok(from..=to)
    }
}
