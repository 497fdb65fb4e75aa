use serde::Serialize;
use serde_json::Value;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    /// Run a natural-language or SQL operation through the NL2SQL service
    pub async fn run_nl2sql<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("run_nl2sql", "/nl2sql/run_sql", request)
            .await
    }

    pub async fn create_knowledge<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload(
            "create_knowledge",
            "/catalog/nl2sql_knowledge/create",
            request,
        )
        .await
    }

    pub async fn update_knowledge<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload(
            "update_knowledge",
            "/catalog/nl2sql_knowledge/update",
            request,
        )
        .await
    }

    pub async fn delete_knowledge<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload(
            "delete_knowledge",
            "/catalog/nl2sql_knowledge/delete",
            request,
        )
        .await
    }

    pub async fn get_knowledge<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("get_knowledge", "/catalog/nl2sql_knowledge/get", request)
            .await
    }

    pub async fn list_knowledge<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload("list_knowledge", "/catalog/nl2sql_knowledge/list", request)
            .await
    }

    pub async fn search_knowledge<B: Serialize + ?Sized>(&self, request: &B) -> Result<Value> {
        self.send_payload(
            "search_knowledge",
            "/catalog/nl2sql_knowledge/search",
            request,
        )
        .await
    }
}
