//! Tool dispatcher - central listing and execution of catalog operations.
//!
//! The dispatcher owns the active [`ApiProfile`] and the shared
//! [`ApiClient`]. A call resolves the tool name against the profile's
//! catalog first; only a known operation gets its arguments mapped and its
//! request(s) issued.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use super::catalog::{ExecutionMode, Operation};
use super::client::ApiClient;
use super::common::{error_result, pretty_json, success_result};
use super::error::{FetchError, ToolError};
use super::profile::ApiProfile;

/// Catalog-driven dispatcher for one API profile.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    profile: ApiProfile,
    client: ApiClient,
}

impl Dispatcher {
    pub fn new(profile: ApiProfile, client: ApiClient) -> Self {
        Self { profile, client }
    }

    pub fn profile(&self) -> ApiProfile {
        self.profile
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.profile.operations().iter().map(|op| op.name).collect()
    }

    /// Get all tools as Tool models, in catalog order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.profile
            .operations()
            .iter()
            .map(Operation::to_tool)
            .collect()
    }

    /// Execute a tool call.
    ///
    /// Returns `Err` only for protocol-level failures such as an unknown
    /// tool. Upstream failures and unusable year ranges come back as an `Ok`
    /// result with `is_error` set.
    #[instrument(skip(self, arguments), fields(profile = %self.profile))]
    pub async fn call(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let Some(operation) = self.profile.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        info!("Calling tool {}", operation.name);

        let outcome = match operation.mode {
            ExecutionMode::Single => {
                self.client
                    .fetch(&operation.build_request(&arguments))
                    .await
            }
            ExecutionMode::PerYear { .. } => match operation.year_range(&arguments) {
                Ok(years) => self.fetch_series(operation, &arguments, years).await,
                Err(ToolError::InvalidArguments(reason)) => {
                    return Ok(error_result(&format!(
                        "Error fetching {}: {}",
                        operation.label, reason
                    )));
                }
                Err(err) => return Err(err),
            },
        };

        match outcome {
            Ok(data) => Ok(success_result(pretty_json(&data)?)),
            Err(err) => Ok(error_result(&self.describe_failure(operation, &err))),
        }
    }

    /// Fetch each year sequentially; the first failure ends the series.
    async fn fetch_series(
        &self,
        operation: &Operation,
        arguments: &JsonObject,
        years: std::ops::RangeInclusive<i64>,
    ) -> Result<Value, FetchError> {
        let mut series = Vec::new();

        for year in years {
            let request = operation.build_year_request(arguments, year);
            let data = self
                .client
                .fetch(&request)
                .await
                .map_err(|e| e.for_year(year))?;
            series.push(json!({ "year": year, "data": data }));
        }

        info!("Fetched {} year(s) for {}", series.len(), operation.name);
        Ok(Value::Array(series))
    }

    fn describe_failure(&self, operation: &Operation, err: &FetchError) -> String {
        let base_url = operation.diagnostics.then(|| self.client.base_url());
        err.render(operation.label, base_url)
    }
}
