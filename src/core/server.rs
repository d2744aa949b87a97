//! MCP Server implementation and lifecycle management.
//!
//! The handler advertises the tools capability only. Tool listing and
//! execution are delegated to the [`Dispatcher`], which is built once here
//! together with the shared HTTP client and lives as long as the server.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{ApiClient, Dispatcher};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Catalog dispatcher bound to the configured API profile.
    dispatcher: Arc<Dispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the HTTP client cannot be built from the API settings.
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(
            config.api.base_url(),
            config.api.timeout(),
            &config.api.user_agent,
        )?;
        let dispatcher = Dispatcher::new(config.api.profile, client);

        info!(
            "API profile {} at {} ({} tools)",
            config.api.profile,
            dispatcher.client().base_url(),
            dispatcher.tool_names().len()
        );

        Ok(Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn implementation(&self) -> Implementation {
        let mut implementation = Implementation::from_build_env();
        implementation.name = self.name().to_string();
        implementation.version = self.version().to_string();
        implementation
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Execute a tool call, mapping protocol-level failures to MCP errors.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatcher
            .call(name, arguments.unwrap_or_default())
            .await
            .map_err(|e| e.to_mcp())
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Query UNHCR refugee statistics: population figures, demographics, countries \
                 and displacement data. Tool results are the raw JSON returned by the API."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: self.implementation(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.invoke(&request.name, request.arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ApiProfile;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(base_url: &str, profile: ApiProfile) -> Config {
        let mut config = Config::default();
        config.api.profile = profile;
        config.api.base_url = Some(base_url.to_string());
        config
    }

    #[test]
    fn test_server_info_advertises_tools_only() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "unhcr-api");
    }

    #[test]
    fn test_profile_selects_catalog() {
        let server = McpServer::new(config_for("http://localhost:1", ApiProfile::PortalV2)).unwrap();
        assert!(server.dispatcher().tool_names().contains(&"get_time_series"));
        assert!(!server.dispatcher().tool_names().contains(&"get_idps"));
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_is_method_not_found() {
        let server = McpServer::new(Config::default()).unwrap();
        let err = server.invoke("get_weather", None).await.unwrap_err();
        assert_eq!(err.code.0, ErrorCode::METHOD_NOT_FOUND.0);
        assert!(err.message.contains("get_weather"));
    }

    #[tokio::test]
    async fn test_invoke_countries() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countries"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "items": [{ "iso": "SYR" }] })),
            )
            .expect(1)
            .mount(&mock)
            .await;

        let server =
            McpServer::new(config_for(&mock.uri(), ApiProfile::PopulationV1)).unwrap();
        let result = server.invoke("get_countries", None).await.unwrap();
        assert!(!result.is_error.unwrap_or(false));
    }
}
