//! REST client for the MOI catalog service
//!
//! [`RawClient`] maps one method to one HTTP call: it builds the request,
//! unwraps the `{code, msg, data, request_id}` envelope and returns the
//! typed `data` payload. Failures surface as [`Error`], distinguishing
//! service-level error codes from transport and HTTP status failures.
//! File downloads are exposed as a [`FileStream`].

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod options;
pub mod stream;

pub use api::CatalogApi;
pub use auth::*;
pub use client::RawClient;
pub use config::*;
pub use endpoints::{read_file_item, CONNECTOR_FILE_FIELD, GENAI_FILES_FIELD};
pub use error::*;
pub use options::*;
pub use reqwest::StatusCode;
pub use stream::FileStream;

use async_trait::async_trait;
use moi_api_contract::*;
use serde_json::Value;

#[async_trait]
impl CatalogApi for RawClient {
    async fn list_roles(&self, request: &RoleListRequest) -> Result<RoleListResponse> {
        RawClient::list_roles(self, request).await
    }

    async fn get_role(&self, request: &RoleInfoRequest) -> Result<Option<RoleInfoResponse>> {
        RawClient::get_role(self, request).await
    }

    async fn create_role(&self, request: &RoleCreateRequest) -> Result<RoleCreateResponse> {
        RawClient::create_role(self, request).await
    }

    async fn update_role_info(&self, request: &RoleUpdateInfoRequest) -> Result<Value> {
        RawClient::update_role_info(self, request).await
    }

    async fn list_files(&self, request: &FileListRequest) -> Result<FileListResponse> {
        RawClient::list_files(self, request).await
    }

    async fn upload_connector_file(
        &self,
        volume_id: &str,
        files: Vec<FileItem>,
        options: ConnectorUploadOptions,
    ) -> Result<Value> {
        RawClient::upload_connector_file(self, volume_id, files, options).await
    }

    async fn run_nl2sql(&self, request: &Value) -> Result<Value> {
        RawClient::run_nl2sql(self, request).await
    }
}
