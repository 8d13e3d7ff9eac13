//! Assistant (Conversation v1) façade.

use tracing::debug;

use super::types::{
    ListWorkspacesOptions, MessageOptions, MessageResponse, Workspace, WorkspaceCollection,
    WorkspaceProperties,
};
use super::{DEFAULT_URL, DEFAULT_VERSION, SERVICE_NAME};
use crate::auth::{Authenticator, CredentialResolver, EnvResolver};
use crate::client::WatsonClient;
use crate::error::WatsonResult;
use crate::request::{ServiceRequest, require};
use crate::response::DetailedResponse;

/// Client for the Assistant (Conversation) v1 REST API.
///
/// One method per documented operation. The workspace identifier names the
/// dialog skill; the `message` operation threads the opaque conversation
/// context the caller receives from one response into the next request.
///
/// # Example
///
/// ```rust,no_run
/// use watson_sdk::{Assistant, Authenticator};
/// use watson_sdk::services::assistant::types::{MessageInput, MessageOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let assistant = Assistant::new(Authenticator::iam("your-api-key")?)?;
///
///     let options = MessageOptions {
///         input: Some(MessageInput::text("hello")),
///         alternate_intents: Some(true),
///         ..Default::default()
///     };
///     let response = assistant.message("workspace-id", options).await?;
///     println!("{:?}", response.result.output);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Assistant {
    client: WatsonClient,
}

impl Assistant {
    /// New client against the default endpoint and version date.
    pub fn new(authenticator: Authenticator) -> WatsonResult<Self> {
        Self::with_options(DEFAULT_URL, DEFAULT_VERSION, authenticator)
    }

    /// New client with explicit endpoint and version date.
    pub fn with_options(
        url: &str,
        version: &str,
        authenticator: Authenticator,
    ) -> WatsonResult<Self> {
        let client = WatsonClient::new(SERVICE_NAME, url, Some(version), authenticator)?;
        Ok(Self { client })
    }

    /// New client with credentials discovered from the environment
    /// (`CONVERSATION_APIKEY`, `CONVERSATION_URL`, ...).
    pub fn from_env() -> WatsonResult<Self> {
        Self::from_resolver(&EnvResolver)
    }

    /// New client with credentials from an explicit resolver.
    pub fn from_resolver(resolver: &dyn CredentialResolver) -> WatsonResult<Self> {
        let creds = resolver.resolve(SERVICE_NAME)?;
        let authenticator = Authenticator::from_credentials(&creds)?;
        let url = creds.url.as_deref().unwrap_or(DEFAULT_URL);
        Self::with_options(url, DEFAULT_VERSION, authenticator)
    }

    /// Stage a custom header for the next request only.
    pub fn with_header(&self, name: &str, value: &str) -> WatsonResult<()> {
        self.client.with_header(name, value)
    }

    /// Access the underlying transport (default headers, base URL).
    pub fn client_mut(&mut self) -> &mut WatsonClient {
        &mut self.client
    }

    /// Send a message turn to a workspace.
    ///
    /// The `context` carried in `options` is serialized back exactly as it
    /// was received from the previous response; the client never interprets
    /// or rewrites it.
    pub async fn message(
        &self,
        workspace_id: &str,
        options: MessageOptions,
    ) -> WatsonResult<DetailedResponse<MessageResponse>> {
        let workspace_id = require("workspace_id", workspace_id)?;

        debug!(workspace_id, "assistant message");

        let include_audit = options.include_audit;
        let request = ServiceRequest::post(&["v1", "workspaces", workspace_id, "message"])
            .query_opt("include_audit", include_audit)
            .json(&options.into_request())?;

        self.client.send_json(request).await
    }

    /// List workspaces in the service instance.
    pub async fn list_workspaces(
        &self,
        options: ListWorkspacesOptions,
    ) -> WatsonResult<DetailedResponse<WorkspaceCollection>> {
        let request = ServiceRequest::get(&["v1", "workspaces"])
            .query_opt("page_limit", options.page_limit)
            .query_opt("include_count", options.include_count)
            .query_opt("sort", options.sort)
            .query_opt("cursor", options.cursor)
            .query_opt("include_audit", options.include_audit);

        self.client.send_json(request).await
    }

    /// Get a workspace, optionally with its full export.
    pub async fn get_workspace(
        &self,
        workspace_id: &str,
        export: Option<bool>,
    ) -> WatsonResult<DetailedResponse<Workspace>> {
        let workspace_id = require("workspace_id", workspace_id)?;

        let request = ServiceRequest::get(&["v1", "workspaces", workspace_id])
            .query_opt("export", export);

        self.client.send_json(request).await
    }

    /// Create a workspace.
    pub async fn create_workspace(
        &self,
        properties: WorkspaceProperties,
    ) -> WatsonResult<DetailedResponse<Workspace>> {
        let request = ServiceRequest::post(&["v1", "workspaces"]).json(&properties)?;
        self.client.send_json(request).await
    }

    /// Update an existing workspace. Unset fields are left unchanged by the
    /// service because they are omitted from the request body.
    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        properties: WorkspaceProperties,
    ) -> WatsonResult<DetailedResponse<Workspace>> {
        let workspace_id = require("workspace_id", workspace_id)?;

        let request =
            ServiceRequest::post(&["v1", "workspaces", workspace_id]).json(&properties)?;
        self.client.send_json(request).await
    }

    /// Delete a workspace.
    pub async fn delete_workspace(
        &self,
        workspace_id: &str,
    ) -> WatsonResult<DetailedResponse<()>> {
        let workspace_id = require("workspace_id", workspace_id)?;

        let request = ServiceRequest::delete(&["v1", "workspaces", workspace_id]);
        self.client.send_unit(request).await
    }
}
