use moi_api_contract::*;
use serde_json::json;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    /// Create a new catalog
    pub async fn create_catalog(
        &self,
        request: &CatalogCreateRequest,
    ) -> Result<CatalogCreateResponse> {
        self.send_payload("create_catalog", "/catalog/create", request)
            .await
    }

    /// Delete a catalog by ID
    pub async fn delete_catalog(
        &self,
        request: &CatalogDeleteRequest,
    ) -> Result<CatalogDeleteResponse> {
        self.send_payload("delete_catalog", "/catalog/delete", request)
            .await
    }

    /// Update catalog name and comment
    pub async fn update_catalog(
        &self,
        request: &CatalogUpdateRequest,
    ) -> Result<CatalogUpdateResponse> {
        self.send_payload("update_catalog", "/catalog/update", request)
            .await
    }

    /// Fetch catalog information by ID
    pub async fn get_catalog(&self, request: &CatalogInfoRequest) -> Result<CatalogInfoResponse> {
        self.send_payload("get_catalog", "/catalog/info", request)
            .await
    }

    /// List all catalogs
    pub async fn list_catalogs(&self) -> Result<CatalogListResponse> {
        self.post_json("/catalog/list", &json!({})).await
    }

    /// Retrieve the catalog → database → table/volume tree
    pub async fn get_catalog_tree(&self) -> Result<CatalogTreeResponse> {
        self.post_json("/catalog/tree", &json!({})).await
    }

    /// List objects referencing the catalog
    pub async fn get_catalog_ref_list(
        &self,
        request: &CatalogRefListRequest,
    ) -> Result<CatalogRefListResponse> {
        self.send_payload("get_catalog_ref_list", "/catalog/ref_list", request)
            .await
    }
}
