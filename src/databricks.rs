use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::error::Error;

pub const CLUSTERS_LIST_PATH: &str = "/api/2.0/clusters/list";

/// URL of the workspace instance for a given organization id.
pub fn workspace_base_url(org_id: &str) -> String {
    format!("https://adb-{}.azuredatabricks.net", org_id)
}

/// Calls the clusters API of one Databricks workspace.
pub struct ClusterApi {
    http: Client,
    base_url: String,
}

impl ClusterApi {
    pub fn new(http: Client, org_id: &str) -> Self {
        Self::with_base_url(http, workspace_base_url(org_id))
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        ClusterApi {
            http,
            base_url: base_url.into(),
        }
    }

    /// Lists the clusters of the workspace. `adb_token` is the
    /// Databricks-scoped bearer token, `mgmt_token` the Azure management
    /// token, `resource_id` the ARM id of the workspace. The response body
    /// is returned as-is; its schema is opaque to this tool.
    pub async fn list_clusters(
        &self,
        adb_token: &str,
        mgmt_token: &str,
        resource_id: &str,
    ) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, CLUSTERS_LIST_PATH);
        debug!("listing clusters via {}", url);

        self.request_clusters(&url, adb_token, mgmt_token, resource_id)
            .await
            .map_err(|cause| Error::ClusterListFailed { cause })
    }

    async fn request_clusters(
        &self,
        url: &str,
        adb_token: &str,
        mgmt_token: &str,
        resource_id: &str,
    ) -> Result<Value, reqwest::Error> {
        let response = self
            .http
            .get(url)
            .bearer_auth(adb_token)
            .header("X-Databricks-Azure-SP-Management-Token", mgmt_token)
            .header("X-Databricks-Azure-Workspace-Resource-Id", resource_id)
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}
