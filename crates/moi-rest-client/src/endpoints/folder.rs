use serde::Serialize;
use serde_json::Value;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    pub async fn create_folder<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("create_folder", "/catalog/folder/create", request)
            .await
    }

    pub async fn update_folder<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_folder", "/catalog/folder/update", request)
            .await
    }

    pub async fn delete_folder<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("delete_folder", "/catalog/folder/delete", request)
            .await
    }

    /// Delete the contents of a folder, keeping the folder itself
    pub async fn clean_folder<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("clean_folder", "/catalog/folder/clean", request)
            .await
    }

    pub async fn get_folder_ref_list<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("get_folder_ref_list", "/catalog/folder/ref_list", request)
            .await
    }
}
