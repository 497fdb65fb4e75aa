use moi_api_contract::FileItem;
use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;

use super::connector::attach_files;
use crate::client::{require_id, RawClient};
use crate::error::{Error, Result};
use crate::stream::FileStream;

/// Form field carrying file parts in GenAI pipeline uploads
pub const GENAI_FILES_FIELD: &str = "files";

impl RawClient {
    /// Start a GenAI pipeline.
    ///
    /// Without files the request is posted as JSON. With files it is sent
    /// as multipart: the request in `payload`, its `file_names` entry (if
    /// any) repeated in `file_names`, and one `files` part per file.
    pub async fn create_genai_pipeline<B: Serialize + ?Sized>(
        &self,
        request: &B,
        files: Vec<FileItem>,
    ) -> Result<Value> {
        if files.is_empty() {
            return self
                .send_payload("create_genai_pipeline", "/v1/genai/pipeline", request)
                .await;
        }

        let payload = serde_json::to_value(request)?;
        if payload.is_null() {
            return Err(Error::NilRequest(
                "create_genai_pipeline requires a request payload when uploading files".into(),
            ));
        }
        let mut form = Form::new().text("payload", serde_json::to_string(&payload)?);
        if let Some(names) = payload.get("file_names").filter(|names| is_present(names)) {
            form = form.text("file_names", serde_json::to_string(names)?);
        }
        let form = attach_files(form, GENAI_FILES_FIELD, files)?;
        self.post_multipart("/v1/genai/pipeline", form).await
    }

    pub async fn get_genai_job(&self, job_id: &str) -> Result<Value> {
        let job_id = require_id("job_id", job_id)?;
        self.get_json(&format!("/v1/genai/jobs/{}", job_id)).await
    }

    /// Stream a pipeline result file. The body is not read until the
    /// returned stream is polled.
    pub async fn download_genai_result(&self, file_id: &str) -> Result<FileStream> {
        let file_id = require_id("file_id", file_id)?;
        let response = self
            .get_raw(&format!("/v1/genai/results/file/{}", file_id))
            .await?;
        Ok(FileStream::new(response))
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
