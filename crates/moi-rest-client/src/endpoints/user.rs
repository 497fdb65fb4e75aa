use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    pub async fn create_user<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("create_user", "/user/create", request).await
    }

    pub async fn delete_user<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("delete_user", "/user/delete", request).await
    }

    pub async fn get_user_detail<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("get_user_detail", "/user/detail_info", request)
            .await
    }

    pub async fn list_users<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("list_users", "/user/list", request).await
    }

    pub async fn update_user_password<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_user_password", "/user/update_password", request)
            .await
    }

    pub async fn update_user_info<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_user_info", "/user/update_info", request)
            .await
    }

    /// Replace the role list of a user
    pub async fn update_user_roles<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_user_roles", "/user/update_role_list", request)
            .await
    }

    pub async fn update_user_status<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_user_status", "/user/update_status", request)
            .await
    }

    /// API key of the calling user
    pub async fn get_my_api_key(&self) -> Result<Value> {
        self.send_json(Method::POST, "/user/me/api-key", None).await
    }

    /// Rotate the API key of the calling user. The old key stops working
    /// once this returns.
    pub async fn refresh_my_api_key(&self) -> Result<Value> {
        self.send_json(Method::POST, "/user/me/api-key/refresh", None)
            .await
    }

    pub async fn get_my_info(&self) -> Result<Value> {
        self.send_json(Method::POST, "/user/me/info", None).await
    }

    pub async fn update_my_info<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_my_info", "/user/me/update_info", request)
            .await
    }

    pub async fn update_my_password<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("update_my_password", "/user/me/update_password", request)
            .await
    }
}
