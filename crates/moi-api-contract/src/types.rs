//! Catalog, database and volume contract types

use serde::{Deserialize, Deserializer, Serialize};

pub type CatalogId = u64;
pub type DatabaseId = u64;
pub type TableId = u64;
pub type VolumeId = String;
pub type FileId = String;
pub type UserId = u64;
pub type RoleId = u64;
pub type PrivId = u64;
pub type PrivCode = String;
pub type PrivObjectId = String;

/// Sentinel the service uses when a catalog lookup misses.
pub const CATALOG_ID_NOT_FOUND: i64 = i64::MAX;
/// Sentinel the service uses when a database lookup misses.
pub const DATABASE_ID_NOT_FOUND: i64 = i64::MAX;
/// Sentinel the service uses when a role lookup misses.
pub const ROLE_ID_NOT_FOUND: u32 = u32::MAX;
/// Sentinel the service uses when a user lookup misses.
pub const USER_ID_NOT_FOUND: u32 = u32::MAX;

/// Deserialize a field the service may send as an explicit `null`.
///
/// Pair with `#[serde(default)]` so a missing key decodes the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single list filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonFilter {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
    #[serde(default)]
    pub fuzzy: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub filter_values: Vec<serde_json::Value>,
}

impl CommonFilter {
    pub fn exact(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
            fuzzy: false,
            filter_values: Vec::new(),
        }
    }

    pub fn fuzzy(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            fuzzy: true,
            ..Self::exact(name, value)
        }
    }
}

/// Pagination, ordering and filtering shared by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonCondition {
    pub page: u32,
    pub page_size: u32,
    pub order: String,
    pub order_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: Vec<CommonFilter>,
}

impl Default for CommonCondition {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            order: "desc".to_string(),
            order_by: "created_at".to_string(),
            filters: Vec::new(),
        }
    }
}

impl CommonCondition {
    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn with_filter(mut self, filter: CommonFilter) -> Self {
        self.filters.push(filter);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullPath {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_list: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_list: Vec<String>,
}

// ============ Catalog ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCreateRequest {
    pub catalog_name: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCreateResponse {
    pub catalog_id: CatalogId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIdRequest {
    pub catalog_id: CatalogId,
}

pub type CatalogDeleteRequest = CatalogIdRequest;
pub type CatalogInfoRequest = CatalogIdRequest;
pub type CatalogRefListRequest = CatalogIdRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIdResponse {
    pub catalog_id: CatalogId,
}

pub type CatalogDeleteResponse = CatalogIdResponse;
pub type CatalogUpdateResponse = CatalogIdResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogUpdateRequest {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogInfoResponse {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    #[serde(default)]
    pub comment: String,
}

/// Catalog entry as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub database_count: u64,
    #[serde(default)]
    pub table_count: u64,
    #[serde(default)]
    pub volume_count: u64,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub reserved: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub updated_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<CatalogResponse>,
}

/// A node of the catalog tree; catalogs contain databases, which contain
/// tables and volumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub typ: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reserved: bool,
    #[serde(default)]
    pub has_workflow_target_ref: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub node_list: Vec<TreeNode>,
}

impl TreeNode {
    /// Depth-first search for a node by id.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.node_list.iter().find_map(|child| child.find(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogTreeResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tree: Vec<TreeNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<VolumeRef>,
}

pub type CatalogRefListResponse = RefListResponse;
pub type DatabaseRefListResponse = RefListResponse;
pub type VolumeRefListResponse = RefListResponse;

// ============ Database ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseCreateRequest {
    pub database_name: String,
    #[serde(default)]
    pub comment: String,
    pub catalog_id: CatalogId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseIdRequest {
    pub database_id: DatabaseId,
}

pub type DatabaseDeleteRequest = DatabaseIdRequest;
pub type DatabaseInfoRequest = DatabaseIdRequest;
pub type DatabaseChildrenRequest = DatabaseIdRequest;
pub type DatabaseRefListRequest = DatabaseIdRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseIdResponse {
    pub database_id: DatabaseId,
}

pub type DatabaseCreateResponse = DatabaseIdResponse;
pub type DatabaseDeleteResponse = DatabaseIdResponse;
pub type DatabaseUpdateResponse = DatabaseIdResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseUpdateRequest {
    pub database_id: DatabaseId,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseInfoResponse {
    pub database_id: DatabaseId,
    pub database_name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseResponse {
    pub database_id: DatabaseId,
    pub database_name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub table_count: u64,
    #[serde(default)]
    pub volume_count: u64,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub reserved: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub updated_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseListRequest {
    pub catalog_id: CatalogId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<DatabaseResponse>,
}

/// A table or volume directly under a database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseChild {
    pub id: String,
    pub name: String,
    pub typ: String,
    #[serde(default)]
    pub children_count: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub reserved: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub updated_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseChildrenResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<DatabaseChild>,
}

// ============ Volume ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeCreateRequest {
    pub name: String,
    pub database_id: DatabaseId,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeIdRequest {
    pub volume_id: VolumeId,
}

impl VolumeIdRequest {
    pub fn new(volume_id: impl Into<VolumeId>) -> Self {
        Self {
            volume_id: volume_id.into(),
        }
    }
}

pub type VolumeDeleteRequest = VolumeIdRequest;
pub type VolumeInfoRequest = VolumeIdRequest;
pub type VolumeRefListRequest = VolumeIdRequest;
pub type VolumeAddRefWorkflowRequest = VolumeIdRequest;
pub type VolumeRemoveRefWorkflowRequest = VolumeIdRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeIdResponse {
    pub volume_id: VolumeId,
}

pub type VolumeCreateResponse = VolumeIdResponse;
pub type VolumeDeleteResponse = VolumeIdResponse;
pub type VolumeUpdateResponse = VolumeIdResponse;
pub type VolumeAddRefWorkflowResponse = VolumeIdResponse;
pub type VolumeRemoveRefWorkflowResponse = VolumeIdResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeUpdateRequest {
    pub volume_id: VolumeId,
    pub name: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeInfoResponse {
    pub volume_id: VolumeId,
    pub volume_name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub r#ref: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// An object referencing a volume (for example a workflow)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeRef {
    pub volume_id: VolumeId,
    #[serde(default)]
    pub volume_name: String,
    #[serde(default)]
    pub ref_type: String,
    #[serde(default)]
    pub ref_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeFullPathRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id_list: Option<Vec<DatabaseId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id_list: Option<Vec<VolumeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id_list: Option<Vec<FileId>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeFullPathResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub database_full_path: Vec<FullPath>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume_full_path: Vec<FullPath>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_full_path: Vec<FullPath>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_condition_defaults() {
        let condition = CommonCondition::default();
        let value = serde_json::to_value(&condition).unwrap();

        assert_eq!(value["page"], 1);
        assert_eq!(value["page_size"], 20);
        assert_eq!(value["order"], "desc");
        assert_eq!(value["order_by"], "created_at");
        assert_eq!(value["filters"], serde_json::json!([]));
    }

    #[test]
    fn test_fuzzy_filter_omits_empty_filter_values() {
        let filter = CommonFilter::fuzzy("name_description", "analyst");
        let value = serde_json::to_value(&filter).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"name": "name_description", "values": ["analyst"], "fuzzy": true})
        );
    }

    #[test]
    fn test_volume_full_path_request_skips_unset_lists() {
        let request = VolumeFullPathRequest {
            volume_id_list: Some(vec!["v-1".to_string()]),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"volume_id_list": ["v-1"]}));
    }

    #[test]
    fn test_catalog_tree_find() {
        let json = r#"{
            "tree": [{
                "typ": "catalog", "id": "1", "name": "c1", "description": "",
                "node_list": [{
                    "typ": "database", "id": "10", "name": "db", "description": "",
                    "node_list": [{"typ": "volume", "id": "v-9", "name": "vol", "description": ""}]
                }]
            }]
        }"#;

        let response: CatalogTreeResponse = serde_json::from_str(json).unwrap();
        let volume = response.tree[0].find("v-9").unwrap();
        assert_eq!(volume.name, "vol");
        assert!(response.tree[0].find("missing").is_none());
    }

    #[test]
    fn test_volume_info_ref_field_name() {
        let json = r#"{"volume_id": "v-1", "volume_name": "raw", "ref": true}"#;
        let info: VolumeInfoResponse = serde_json::from_str(json).unwrap();
        assert!(info.r#ref);
        assert!(info.comment.is_empty());
    }

    #[test]
    fn test_tree_accepts_null_children() {
        let json = r#"{"tree": [{"typ": "catalog", "id": "1", "name": "c", "node_list": null}]}"#;
        let tree: CatalogTreeResponse = serde_json::from_str(json).unwrap();
        assert!(tree.tree[0].node_list.is_empty());

        let empty: CatalogTreeResponse = serde_json::from_str(r#"{"tree": null}"#).unwrap();
        assert!(empty.tree.is_empty());
    }
}
