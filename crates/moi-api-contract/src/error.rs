//! Errors raised while interpreting contract types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("unknown object type value: {0}")]
    UnknownObjType(i32),
}
