//! MOI catalog service REST API contract types
//!
//! This crate defines the response envelope and the request/response models
//! exchanged with the catalog service. The types are shared between the raw
//! REST client, the scripted mock client and the higher-level SDK helpers.

pub mod envelope;
pub mod error;
pub mod files;
pub mod llm;
pub mod nl2sql;
pub mod rbac;
pub mod types;
pub mod validation;

pub use envelope::*;
pub use error::*;
pub use files::*;
pub use llm::*;
pub use nl2sql::*;
pub use rbac::*;
pub use types::*;
