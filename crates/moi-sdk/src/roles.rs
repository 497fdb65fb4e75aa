//! Roles scoped to table privileges

use moi_api_contract::*;
use moi_rest_client::{CatalogApi, Error, Result};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::client::SdkClient;

const ROLE_PAGE_SIZE: u32 = 100;
const ROLE_MAX_PAGES: u32 = 1000;
const ROLE_NAME_FILTER: &str = "name_description";

/// Privileges to grant on one table.
///
/// An explicit `authority_code_list` takes precedence; otherwise every entry
/// of `priv_codes` is granted without row/column rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePrivInfo {
    pub table_id: TableId,
    pub priv_codes: Vec<PrivCode>,
    pub authority_code_list: Option<Vec<AuthorityCodeAndRule>>,
}

impl TablePrivInfo {
    pub fn new<I, S>(table_id: TableId, priv_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PrivCode>,
    {
        Self {
            table_id,
            priv_codes: priv_codes.into_iter().map(Into::into).collect(),
            authority_code_list: None,
        }
    }

    pub fn with_rules(table_id: TableId, authority_code_list: Vec<AuthorityCodeAndRule>) -> Self {
        Self {
            table_id,
            priv_codes: Vec::new(),
            authority_code_list: Some(authority_code_list),
        }
    }

    fn to_obj_authority(&self) -> Option<ObjAuthority> {
        if self.table_id == 0 {
            return None;
        }

        let authority_code_list = match &self.authority_code_list {
            Some(list) if !list.is_empty() => list.clone(),
            _ if !self.priv_codes.is_empty() => self
                .priv_codes
                .iter()
                .map(|code| AuthorityCodeAndRule::unrestricted(code.clone()))
                .collect(),
            _ => return None,
        };

        Some(ObjAuthority {
            id: self.table_id.to_string(),
            category: ObjType::Table.as_str().to_string(),
            name: String::new(),
            authority_code_list,
        })
    }
}

/// Object privilege entries for `table_privs`, skipping entries without a
/// table id or without any privilege.
pub fn build_obj_priv_list(table_privs: &[TablePrivInfo]) -> Vec<ObjAuthority> {
    table_privs
        .iter()
        .filter_map(TablePrivInfo::to_obj_authority)
        .collect()
}

impl<C: CatalogApi> SdkClient<C> {
    /// Create a role holding `table_privs`, or reuse the role already named
    /// `role_name`.
    ///
    /// Returns the role id and whether the role was created by this call.
    /// An existing role is returned as is; its privileges are not updated.
    #[instrument(skip(self, comment, table_privs))]
    pub async fn create_table_role(
        &self,
        role_name: &str,
        comment: &str,
        table_privs: &[TablePrivInfo],
    ) -> Result<(Option<RoleId>, bool)> {
        if role_name.is_empty() {
            return Err(Error::validation("role_name is required"));
        }

        if let Some(existing) = self.find_role_by_name(role_name).await? {
            info!(role_id = existing.id, "reusing existing role");
            return Ok((Some(existing.id), false));
        }

        let request = RoleCreateRequest {
            name: role_name.to_string(),
            description: comment.to_string(),
            authority_code_list: Vec::new(),
            obj_authority_code_list: build_obj_priv_list(table_privs),
        };
        let response = self.raw().create_role(&request).await?;
        info!(role_id = ?response.id, "created role");
        Ok((response.id, true))
    }

    /// Replace the table privileges of a role.
    ///
    /// An empty `comment` keeps the current description and `None` for
    /// `global_privs` keeps the current global privilege codes; either
    /// case reads the role first.
    #[instrument(skip(self, comment, table_privs, global_privs))]
    pub async fn update_table_role(
        &self,
        role_id: RoleId,
        comment: &str,
        table_privs: &[TablePrivInfo],
        global_privs: Option<Vec<PrivCode>>,
    ) -> Result<Value> {
        if role_id == 0 {
            return Err(Error::validation("role_id is required"));
        }

        let mut description = comment.to_string();
        let mut authority_code_list = global_privs.clone().unwrap_or_default();

        if comment.is_empty() || global_privs.is_none() {
            let role = self
                .raw()
                .get_role(&RoleInfoRequest { id: role_id })
                .await?
                .ok_or_else(|| Error::NilRequest(format!("role {} not found", role_id)))?;

            if comment.is_empty() {
                description = role.description.clone();
            }
            if global_privs.is_none() {
                authority_code_list = role.authority_codes();
            }
        }

        let request = RoleUpdateInfoRequest {
            id: role_id,
            description,
            authority_code_list,
            obj_authority_code_list: build_obj_priv_list(table_privs),
        };
        self.raw().update_role_info(&request).await
    }

    /// Find a role whose name equals `role_name` exactly.
    ///
    /// The list endpoint only supports fuzzy matching, so pages are scanned
    /// until an exact match, a short page, or the reported total is reached.
    pub async fn find_role_by_name(&self, role_name: &str) -> Result<Option<RoleSummary>> {
        for page in 1..=ROLE_MAX_PAGES {
            let request = RoleListRequest {
                keyword: String::new(),
                common_condition: CommonCondition::default()
                    .page(page, ROLE_PAGE_SIZE)
                    .with_filter(CommonFilter::fuzzy(ROLE_NAME_FILTER, role_name)),
            };
            let response = self.raw().list_roles(&request).await?;
            let roles = response.roles();
            debug!(page, returned = roles.len(), total = response.total, "scanned role page");

            if let Some(role) = roles.iter().find(|role| role.name == role_name) {
                return Ok(Some(role.clone()));
            }
            if roles.len() < ROLE_PAGE_SIZE as usize {
                break;
            }
            if response.total > 0 && u64::from(page) * u64::from(ROLE_PAGE_SIZE) >= response.total {
                break;
            }
        }

        Ok(None)
    }
}
