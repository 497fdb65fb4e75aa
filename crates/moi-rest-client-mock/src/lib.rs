//! Mock catalog client backed by scripted responses
//!
//! Each operation has its own queue of results, consumed in order. Every
//! call is recorded, including calls that find their queue empty, which
//! fail with [`Error::UnexpectedResponse`].

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use moi_api_contract::*;
use moi_rest_client::{CatalogApi, Error, Result};
use serde_json::Value;

/// A call received by [`MockClient`], with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    ListRoles(RoleListRequest),
    GetRole(RoleInfoRequest),
    CreateRole(RoleCreateRequest),
    UpdateRoleInfo(RoleUpdateInfoRequest),
    ListFiles(FileListRequest),
    UploadConnectorFile {
        volume_id: String,
        files: Vec<FileItem>,
        options: ConnectorUploadOptions,
    },
    RunNl2Sql(Value),
}

#[derive(Default)]
struct Script {
    list_roles: VecDeque<Result<RoleListResponse>>,
    get_role: VecDeque<Result<Option<RoleInfoResponse>>>,
    create_role: VecDeque<Result<RoleCreateResponse>>,
    update_role_info: VecDeque<Result<Value>>,
    list_files: VecDeque<Result<FileListResponse>>,
    upload_connector_file: VecDeque<Result<Value>>,
    run_nl2sql: VecDeque<Result<Value>>,
    calls: Vec<RecordedCall>,
}

#[derive(Default)]
pub struct MockClient {
    script: Mutex<Script>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_list_roles(self, result: Result<RoleListResponse>) -> Self {
        self.lock().list_roles.push_back(result);
        self
    }

    pub fn on_get_role(self, result: Result<Option<RoleInfoResponse>>) -> Self {
        self.lock().get_role.push_back(result);
        self
    }

    pub fn on_create_role(self, result: Result<RoleCreateResponse>) -> Self {
        self.lock().create_role.push_back(result);
        self
    }

    pub fn on_update_role_info(self, result: Result<Value>) -> Self {
        self.lock().update_role_info.push_back(result);
        self
    }

    pub fn on_list_files(self, result: Result<FileListResponse>) -> Self {
        self.lock().list_files.push_back(result);
        self
    }

    pub fn on_upload_connector_file(self, result: Result<Value>) -> Self {
        self.lock().upload_connector_file.push_back(result);
        self
    }

    pub fn on_run_nl2sql(self, result: Result<Value>) -> Self {
        self.lock().run_nl2sql.push_back(result);
        self
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn respond<T>(
        &self,
        call: RecordedCall,
        operation: &str,
        queue: impl FnOnce(&mut Script) -> &mut VecDeque<Result<T>>,
    ) -> Result<T> {
        let mut script = self.lock();
        script.calls.push(call);
        queue(&mut *script).pop_front().unwrap_or_else(|| {
            Err(Error::UnexpectedResponse(format!(
                "no scripted response for {}",
                operation
            )))
        })
    }
}

#[async_trait]
impl CatalogApi for MockClient {
    async fn list_roles(&self, request: &RoleListRequest) -> Result<RoleListResponse> {
        self.respond(RecordedCall::ListRoles(request.clone()), "list_roles", |s| {
            &mut s.list_roles
        })
    }

    async fn get_role(&self, request: &RoleInfoRequest) -> Result<Option<RoleInfoResponse>> {
        self.respond(RecordedCall::GetRole(*request), "get_role", |s| &mut s.get_role)
    }

    async fn create_role(&self, request: &RoleCreateRequest) -> Result<RoleCreateResponse> {
        self.respond(RecordedCall::CreateRole(request.clone()), "create_role", |s| {
            &mut s.create_role
        })
    }

    async fn update_role_info(&self, request: &RoleUpdateInfoRequest) -> Result<Value> {
        self.respond(
            RecordedCall::UpdateRoleInfo(request.clone()),
            "update_role_info",
            |s| &mut s.update_role_info,
        )
    }

    async fn list_files(&self, request: &FileListRequest) -> Result<FileListResponse> {
        self.respond(RecordedCall::ListFiles(request.clone()), "list_files", |s| {
            &mut s.list_files
        })
    }

    async fn upload_connector_file(
        &self,
        volume_id: &str,
        files: Vec<FileItem>,
        options: ConnectorUploadOptions,
    ) -> Result<Value> {
        let call = RecordedCall::UploadConnectorFile {
            volume_id: volume_id.to_string(),
            files,
            options,
        };
        self.respond(call, "upload_connector_file", |s| {
            &mut s.upload_connector_file
        })
    }

    async fn run_nl2sql(&self, request: &Value) -> Result<Value> {
        self.respond(RecordedCall::RunNl2Sql(request.clone()), "run_nl2sql", |s| {
            &mut s.run_nl2sql
        })
    }
}
