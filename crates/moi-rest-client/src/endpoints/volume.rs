use moi_api_contract::*;

use crate::client::RawClient;
use crate::error::Result;

impl RawClient {
    pub async fn create_volume(&self, request: &VolumeCreateRequest) -> Result<VolumeCreateResponse> {
        self.send_payload("create_volume", "/catalog/volume/create", request)
            .await
    }

    pub async fn delete_volume(&self, request: &VolumeDeleteRequest) -> Result<VolumeDeleteResponse> {
        self.send_payload("delete_volume", "/catalog/volume/delete", request)
            .await
    }

    pub async fn update_volume(&self, request: &VolumeUpdateRequest) -> Result<VolumeUpdateResponse> {
        self.send_payload("update_volume", "/catalog/volume/update", request)
            .await
    }

    pub async fn get_volume(&self, request: &VolumeInfoRequest) -> Result<VolumeInfoResponse> {
        self.send_payload("get_volume", "/catalog/volume/info", request)
            .await
    }

    pub async fn get_volume_ref_list(
        &self,
        request: &VolumeRefListRequest,
    ) -> Result<VolumeRefListResponse> {
        self.send_payload("get_volume_ref_list", "/catalog/volume/ref_list", request)
            .await
    }

    /// Resolve id/name paths for databases, volumes and folders in one call
    pub async fn get_volume_full_path(
        &self,
        request: &VolumeFullPathRequest,
    ) -> Result<VolumeFullPathResponse> {
        self.send_payload("get_volume_full_path", "/catalog/volume/full_path", request)
            .await
    }

    /// Mark a volume as referenced by a workflow
    pub async fn add_volume_workflow_ref(
        &self,
        request: &VolumeAddRefWorkflowRequest,
    ) -> Result<VolumeAddRefWorkflowResponse> {
        self.send_payload(
            "add_volume_workflow_ref",
            "/catalog/volume/add_ref_workflow",
            request,
        )
        .await
    }

    pub async fn remove_volume_workflow_ref(
        &self,
        request: &VolumeRemoveRefWorkflowRequest,
    ) -> Result<VolumeRemoveRefWorkflowResponse> {
        self.send_payload(
            "remove_volume_workflow_ref",
            "/catalog/volume/remove_ref_workflow",
            request,
        )
        .await
    }
}
