use moi_api_contract::RunSqlRequest;
use moi_rest_client::{CatalogApi, Result};
use serde_json::Value;
use tracing::instrument;
use validator::Validate;

use crate::client::SdkClient;

impl<C: CatalogApi> SdkClient<C> {
    /// Execute a SQL statement through the NL2SQL `run_sql` operation
    #[instrument(skip(self))]
    pub async fn run_sql(&self, statement: &str) -> Result<Value> {
        let request = RunSqlRequest::new(statement);
        request.validate()?;
        self.raw().run_nl2sql(&serde_json::to_value(&request)?).await
    }
}
