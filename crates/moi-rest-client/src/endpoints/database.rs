use moi_api_contract::*;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    pub async fn create_database(
        &self,
        request: &DatabaseCreateRequest,
    ) -> Result<DatabaseCreateResponse> {
        self.send_payload("create_database", "/catalog/database/create", request)
            .await
    }

    pub async fn delete_database(
        &self,
        request: &DatabaseDeleteRequest,
    ) -> Result<DatabaseDeleteResponse> {
        self.send_payload("delete_database", "/catalog/database/delete", request)
            .await
    }

    pub async fn update_database(
        &self,
        request: &DatabaseUpdateRequest,
    ) -> Result<DatabaseUpdateResponse> {
        self.send_payload("update_database", "/catalog/database/update", request)
            .await
    }

    pub async fn get_database(
        &self,
        request: &DatabaseInfoRequest,
    ) -> Result<DatabaseInfoResponse> {
        self.send_payload("get_database", "/catalog/database/info", request)
            .await
    }

    /// List the databases of a catalog
    pub async fn list_databases(
        &self,
        request: &DatabaseListRequest,
    ) -> Result<DatabaseListResponse> {
        self.send_payload("list_databases", "/catalog/database/list", request)
            .await
    }

    /// List the tables and volumes directly under a database
    pub async fn get_database_children(
        &self,
        request: &DatabaseChildrenRequest,
    ) -> Result<DatabaseChildrenResponse> {
        self.send_payload(
            "get_database_children",
            "/catalog/database/children",
            request,
        )
        .await
    }

    pub async fn get_database_ref_list(
        &self,
        request: &DatabaseRefListRequest,
    ) -> Result<DatabaseRefListResponse> {
        self.send_payload(
            "get_database_ref_list",
            "/catalog/database/ref_list",
            request,
        )
        .await
    }
}
