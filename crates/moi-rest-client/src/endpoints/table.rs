//! Table endpoints.
//!
//! Table payloads vary with the table kind and server version, so these
//! methods accept any serializable request and return the raw `data` value.

use serde::Serialize;
use serde_json::{json, Value};

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    pub async fn create_table<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("create_table", "/catalog/table/create", request)
            .await
    }

    pub async fn get_table<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("get_table", "/catalog/table/info", request)
            .await
    }

    /// Summary counts across all tables visible to the caller
    pub async fn get_table_overview(&self) -> Result<Value> {
        self.post_json("/catalog/table/overview", &json!({})).await
    }

    pub async fn check_table_exists<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("check_table_exists", "/catalog/table/exist", request)
            .await
    }

    pub async fn preview_table<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("preview_table", "/catalog/table/preview", request)
            .await
    }

    pub async fn load_table<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("load_table", "/catalog/table/load", request)
            .await
    }

    pub async fn get_table_download_link<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value> {
        self.send_payload(
            "get_table_download_link",
            "/catalog/table/download",
            request,
        )
        .await
    }

    pub async fn truncate_table<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("truncate_table", "/catalog/table/truncate", request)
            .await
    }

    pub async fn delete_table<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("delete_table", "/catalog/table/delete", request)
            .await
    }

    pub async fn get_table_full_path<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("get_table_full_path", "/catalog/table/full_path", request)
            .await
    }

    pub async fn get_table_ref_list<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("get_table_ref_list", "/catalog/table/ref_list", request)
            .await
    }
}
