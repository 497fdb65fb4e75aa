//! Roles, privileges and privilege objects

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApiContractError;
use crate::types::{CommonCondition, PrivCode, PrivId, PrivObjectId, RoleId};

/// Kinds of objects privileges can be granted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ObjType {
    None = 0,
    Connector = 1,
    LoadTask = 2,
    Workflow = 3,
    Volume = 4,
    Dataset = 5,
    Alarm = 6,
    User = 7,
    Role = 8,
    ExportTask = 9,
    DataCenter = 10,
    Catalog = 11,
    Database = 12,
    Table = 13,
}

impl ObjType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjType::None => "none",
            ObjType::Connector => "connector",
            ObjType::LoadTask => "load_task",
            ObjType::Workflow => "workflow",
            ObjType::Volume => "volume",
            ObjType::Dataset => "dataset",
            ObjType::Alarm => "alarm",
            ObjType::User => "user",
            ObjType::Role => "role",
            ObjType::ExportTask => "export_task",
            ObjType::DataCenter => "data_center",
            ObjType::Catalog => "catalog",
            ObjType::Database => "database",
            ObjType::Table => "table",
        }
    }
}

impl fmt::Display for ObjType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ObjType> for i32 {
    fn from(value: ObjType) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for ObjType {
    type Error = ApiContractError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let obj_type = match value {
            0 => ObjType::None,
            1 => ObjType::Connector,
            2 => ObjType::LoadTask,
            3 => ObjType::Workflow,
            4 => ObjType::Volume,
            5 => ObjType::Dataset,
            6 => ObjType::Alarm,
            7 => ObjType::User,
            8 => ObjType::Role,
            9 => ObjType::ExportTask,
            10 => ObjType::DataCenter,
            11 => ObjType::Catalog,
            12 => ObjType::Database,
            13 => ObjType::Table,
            other => return Err(ApiContractError::UnknownObjType(other)),
        };
        Ok(obj_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPriv {
    pub priv_id: PrivId,
    pub obj_id: PrivObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRowColExpression {
    pub operator: String,
    pub expression: String,
}

/// Row/column level restriction attached to a table privilege
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRowColRule {
    pub column: String,
    pub relation: String,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub expression_list: Vec<TableRowColExpression>,
}

/// A privilege code with optional row/column rules.
///
/// `rule_list` is always serialized; `null` means "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityCodeAndRule {
    pub code: PrivCode,
    #[serde(default)]
    pub rule_list: Option<Vec<TableRowColRule>>,
}

impl AuthorityCodeAndRule {
    pub fn unrestricted(code: impl Into<PrivCode>) -> Self {
        Self {
            code: code.into(),
            rule_list: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjPrivResponse {
    pub obj_id: String,
    pub obj_type: String,
    #[serde(default)]
    pub obj_name: String,
    #[serde(default)]
    pub authority_code_list: Option<Vec<AuthorityCodeAndRule>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivObjectIdAndName {
    pub object_id: String,
    pub object_name: String,
}

/// Object-level privileges granted to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjAuthority {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub authority_code_list: Vec<AuthorityCodeAndRule>,
}

// ============ Roles ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub authority_code_list: Vec<PrivCode>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub obj_authority_code_list: Vec<ObjAuthority>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCreateResponse {
    #[serde(default)]
    pub id: Option<RoleId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleIdRequest {
    pub id: RoleId,
}

pub type RoleInfoRequest = RoleIdRequest;
pub type RoleDeleteRequest = RoleIdRequest;

/// A global privilege held by a role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAuthority {
    #[serde(default)]
    pub code: PrivCode,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleInfoResponse {
    #[serde(default)]
    pub id: RoleId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub authority_list: Vec<RoleAuthority>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub obj_authority_list: Vec<ObjPrivResponse>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl RoleInfoResponse {
    /// Non-empty global privilege codes held by the role.
    pub fn authority_codes(&self) -> Vec<PrivCode> {
        self.authority_list
            .iter()
            .filter(|authority| !authority.code.is_empty())
            .map(|authority| authority.code.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleListRequest {
    #[serde(default)]
    pub keyword: String,
    pub common_condition: CommonCondition,
}

/// Role entry in a list page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    #[serde(default)]
    pub id: RoleId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: String,
}

/// A page of roles.
///
/// Depending on the server version the page is carried in `role_list` or in
/// `list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleListResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_list: Option<Vec<RoleSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<RoleSummary>>,
}

impl RoleListResponse {
    pub fn roles(&self) -> &[RoleSummary] {
        match (&self.role_list, &self.list) {
            (Some(roles), _) if !roles.is_empty() => roles.as_slice(),
            (_, Some(roles)) => roles.as_slice(),
            (Some(roles), None) => roles.as_slice(),
            (None, None) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleUpdateInfoRequest {
    pub id: RoleId,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub authority_code_list: Vec<PrivCode>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub obj_authority_code_list: Vec<ObjAuthority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obj_type_serializes_as_integer() {
        assert_eq!(serde_json::to_value(ObjType::Table).unwrap(), 13);
        let parsed: ObjType = serde_json::from_str("11").unwrap();
        assert_eq!(parsed, ObjType::Catalog);
        assert!(serde_json::from_str::<ObjType>("99").is_err());
    }

    #[test]
    fn test_obj_type_display() {
        assert_eq!(ObjType::LoadTask.to_string(), "load_task");
        assert_eq!(ObjType::DataCenter.to_string(), "data_center");
        assert_eq!(ObjType::None.to_string(), "none");
    }

    #[test]
    fn test_unrestricted_code_keeps_null_rule_list() {
        let value = serde_json::to_value(AuthorityCodeAndRule::unrestricted("DT8")).unwrap();
        assert_eq!(value, serde_json::json!({"code": "DT8", "rule_list": null}));
    }

    #[test]
    fn test_role_list_prefers_role_list_field() {
        let json = r#"{"total": 2, "role_list": [{"id": 1, "name": "a"}], "list": [{"id": 2, "name": "b"}]}"#;
        let page: RoleListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.roles().len(), 1);
        assert_eq!(page.roles()[0].name, "a");
    }

    #[test]
    fn test_role_list_falls_back_to_list_field() {
        let json = r#"{"total": 1, "role_list": [], "list": [{"id": 2, "name": "b"}]}"#;
        let page: RoleListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.roles()[0].id, 2);

        let empty: RoleListResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.roles().is_empty());
    }

    #[test]
    fn test_role_info_authority_codes_skip_blank() {
        let json = r#"{"id": 5, "authority_list": [{"code": "U1"}, {"code": ""}, {"name": "n"}]}"#;
        let role: RoleInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(role.authority_codes(), vec!["U1".to_string()]);
    }

    #[test]
    fn test_role_info_accepts_null_lists() {
        let json = r#"{"id": 5, "name": "r", "authority_list": null, "obj_authority_list": null}"#;
        let role: RoleInfoResponse = serde_json::from_str(json).unwrap();
        assert!(role.authority_list.is_empty());
        assert!(role.obj_authority_list.is_empty());
        assert!(role.authority_codes().is_empty());
    }
}
