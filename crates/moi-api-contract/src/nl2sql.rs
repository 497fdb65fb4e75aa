//! Natural-language-to-SQL operations

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// Operation name used for plain SQL execution
pub const RUN_SQL_OPERATION: &str = "run_sql";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RunSqlRequest {
    pub operation: String,
    #[validate(custom(function = "not_blank", message = "statement is required"))]
    pub statement: String,
}

impl RunSqlRequest {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            operation: RUN_SQL_OPERATION.to_string(),
            statement: statement.into(),
        }
    }
}
