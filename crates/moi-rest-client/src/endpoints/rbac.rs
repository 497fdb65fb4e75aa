//! Roles and privilege objects

use moi_api_contract::*;
use serde::Serialize;
use serde_json::Value;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    /// Create a role. A success reply without data yields a response with no id.
    pub async fn create_role(&self, request: &RoleCreateRequest) -> Result<RoleCreateResponse> {
        let created: Option<RoleCreateResponse> =
            self.send_payload("create_role", "/role/create", request).await?;
        Ok(created.unwrap_or_default())
    }

    pub async fn delete_role(&self, request: &RoleDeleteRequest) -> Result<Value> {
        self.send_payload("delete_role", "/role/delete", request).await
    }

    /// Fetch a role. `None` when the service returns no data for the id.
    pub async fn get_role(&self, request: &RoleInfoRequest) -> Result<Option<RoleInfoResponse>> {
        self.send_payload("get_role", "/role/info", request).await
    }

    pub async fn list_roles(&self, request: &RoleListRequest) -> Result<RoleListResponse> {
        self.send_payload("list_roles", "/role/list", request).await
    }

    pub async fn list_roles_by_category_and_object<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value> {
        self.send_payload(
            "list_roles_by_category_and_object",
            "/role/list_by_category_and_obj",
            request,
        )
        .await
    }

    pub async fn update_role_code_list<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_role_code_list", "/role/update_code_list", request)
            .await
    }

    /// Replace the description and privileges of a role
    pub async fn update_role_info(&self, request: &RoleUpdateInfoRequest) -> Result<Value> {
        self.send_payload("update_role_info", "/role/update_info", request)
            .await
    }

    pub async fn update_roles_by_object<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value> {
        self.send_payload("update_roles_by_object", "/role/update_roles_by_obj", request)
            .await
    }

    pub async fn update_role_status<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_role_status", "/role/update_status", request)
            .await
    }

    /// List privilege objects of one category (tables, volumes, ...)
    pub async fn list_objects_by_category<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value> {
        self.send_payload(
            "list_objects_by_category",
            "/rbac/priv/list_obj_by_category",
            request,
        )
        .await
    }
}
