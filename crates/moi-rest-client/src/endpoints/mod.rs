//! Endpoint methods of [`RawClient`](crate::RawClient), one module per API
//! family.

mod catalog;
mod connector;
mod database;
mod file;
mod folder;
mod genai;
mod llm;
mod nl2sql;
mod rbac;
mod system;
mod table;
mod user;
mod volume;

pub use connector::{read_file_item, CONNECTOR_FILE_FIELD};
pub use genai::GENAI_FILES_FIELD;
