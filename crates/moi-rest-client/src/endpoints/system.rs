use serde::Serialize;
use serde_json::Value;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    /// Probe service liveness. The health endpoint answers with plain JSON,
    /// not an envelope, so the body is returned as is.
    pub async fn health_check(&self) -> Result<Value> {
        let response = self.get_raw("/healthz").await?;
        Ok(response.json().await?)
    }

    /// Audit log of user operations
    pub async fn list_user_logs<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("list_user_logs", "/log/user", request).await
    }

    /// Audit log of role operations
    pub async fn list_role_logs<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("list_role_logs", "/log/role", request).await
    }
}
