//! Files, folders and connector uploads

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::types::{CommonCondition, FileId, TableId, VolumeId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileListRequest {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub keyword: String,
    pub common_condition: CommonCondition,
}

/// A file or folder stored in a volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(default)]
    pub id: FileId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file_type: Value,
    #[serde(default)]
    pub show_type: String,
    #[serde(default)]
    pub file_ext: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub volume_id: VolumeId,
    #[serde(default)]
    pub volume_name: String,
    #[serde(default)]
    pub parent_id: String,
    #[serde(default)]
    pub show_path: String,
    #[serde(default)]
    pub save_path: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub list: Vec<FileInfo>,
}

/// Per-file metadata sent alongside connector uploads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub filename: String,
    pub path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileMeta {
    pub fn new(filename: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            path: path.into(),
            extra: Map::new(),
        }
    }
}

/// Target table settings for a connector import.
///
/// Only the fields the SDK inspects are typed; everything else the service
/// accepts travels in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TableConfig {
    #[validate(length(min = 1, message = "table_config.conn_file_ids must contain at least one file ID"))]
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub conn_file_ids: Vec<String>,
    #[serde(default)]
    pub new_table: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub table_id: Option<TableId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub existed_table: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// In-memory file content for multipart uploads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub file_name: String,
    pub content: Bytes,
}

impl FileItem {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Optional form fields of a connector upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectorUploadOptions {
    pub meta: Vec<FileMeta>,
    pub file_types: Vec<i32>,
    pub path_regex: Option<String>,
    pub unzip_keep_structure: bool,
    pub dedup: Option<Value>,
    pub table_config: Option<TableConfig>,
    pub extra_fields: Vec<(String, String)>,
}

impl ConnectorUploadOptions {
    pub fn with_meta(mut self, meta: Vec<FileMeta>) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_file_types(mut self, file_types: Vec<i32>) -> Self {
        self.file_types = file_types;
        self
    }

    pub fn with_path_regex(mut self, path_regex: impl Into<String>) -> Self {
        self.path_regex = Some(path_regex.into());
        self
    }

    pub fn unzip_keep_structure(mut self, keep: bool) -> Self {
        self.unzip_keep_structure = keep;
        self
    }

    pub fn with_dedup(mut self, dedup: Value) -> Self {
        self.dedup = Some(dedup);
        self
    }

    pub fn with_table_config(mut self, table_config: TableConfig) -> Self {
        self.table_config = Some(table_config);
        self
    }

    pub fn with_extra_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_fields.push((name.into(), value.into()));
        self
    }
}
