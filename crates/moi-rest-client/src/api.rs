//! Operations the workflow helpers compose, abstracted so they can run
//! against a scripted client in tests.

use async_trait::async_trait;
use moi_api_contract::*;
use serde_json::Value;

use crate::error::Result;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_roles(&self, request: &RoleListRequest) -> Result<RoleListResponse>;
    async fn get_role(&self, request: &RoleInfoRequest) -> Result<Option<RoleInfoResponse>>;
    async fn create_role(&self, request: &RoleCreateRequest) -> Result<RoleCreateResponse>;
    async fn update_role_info(&self, request: &RoleUpdateInfoRequest) -> Result<Value>;

    async fn list_files(&self, request: &FileListRequest) -> Result<FileListResponse>;
    async fn upload_connector_file(
        &self,
        volume_id: &str,
        files: Vec<FileItem>,
        options: ConnectorUploadOptions,
    ) -> Result<Value>;

    async fn run_nl2sql(&self, request: &Value) -> Result<Value>;
}
