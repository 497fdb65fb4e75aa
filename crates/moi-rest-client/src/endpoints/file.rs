use moi_api_contract::{FileListRequest, FileListResponse};
use serde::Serialize;
use serde_json::Value;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    pub async fn create_file<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("create_file", "/catalog/file/create", request)
            .await
    }

    pub async fn update_file<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_file", "/catalog/file/update", request)
            .await
    }

    pub async fn delete_file<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("delete_file", "/catalog/file/delete", request)
            .await
    }

    /// Remove a reference to a file without deleting its content
    pub async fn delete_file_ref<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("delete_file_ref", "/catalog/file/delete_ref", request)
            .await
    }

    pub async fn get_file<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("get_file", "/catalog/file/info", request)
            .await
    }

    /// List files matching the keyword and filters in `request`
    pub async fn list_files(&self, request: &FileListRequest) -> Result<FileListResponse> {
        self.send_payload("list_files", "/catalog/file/list", request)
            .await
    }

    pub async fn upload_file<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("upload_file", "/catalog/file/upload", request)
            .await
    }

    pub async fn get_file_download_link<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value> {
        self.send_payload(
            "get_file_download_link",
            "/catalog/file/download",
            request,
        )
        .await
    }

    pub async fn get_file_preview_link<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value> {
        self.send_payload(
            "get_file_preview_link",
            "/catalog/file/preview_link",
            request,
        )
        .await
    }

    pub async fn get_file_preview_stream<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value> {
        self.send_payload(
            "get_file_preview_stream",
            "/catalog/file/preview_stream",
            request,
        )
        .await
    }
}
