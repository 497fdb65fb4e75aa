//! Connector uploads into temporary storage and table imports.

use std::path::Path;

use moi_api_contract::{ConnectorUploadOptions, FileItem, FileMeta};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{require_id, RawClient};
use crate::error::{Error, Result};

/// Form field carrying file parts in connector uploads
pub const CONNECTOR_FILE_FIELD: &str = "file";

impl RawClient {
    /// Upload files into connector temporary storage.
    ///
    /// `meta` is sent as a JSON array in the `meta` form field, one entry
    /// per file.
    pub async fn upload_local_files(
        &self,
        files: Vec<FileItem>,
        meta: Vec<FileMeta>,
    ) -> Result<Value> {
        if files.is_empty() {
            return Err(Error::validation(
                "upload_local_files requires at least one file item",
            ));
        }
        if meta.is_empty() {
            return Err(Error::validation("meta is required for upload_local_files"));
        }

        let form = Form::new().text("meta", serde_json::to_string(&meta)?);
        let form = attach_files(form, CONNECTOR_FILE_FIELD, files)?;
        self.post_multipart("/connectors/file/upload", form).await
    }

    pub async fn upload_local_file(&self, file: FileItem, meta: Vec<FileMeta>) -> Result<Value> {
        self.upload_local_files(vec![file], meta).await
    }

    /// Read `path` from disk and upload it under its final path component.
    pub async fn upload_local_file_from_path(
        &self,
        path: impl AsRef<Path>,
        meta: Vec<FileMeta>,
    ) -> Result<Value> {
        let file = read_file_item(path.as_ref()).await?;
        self.upload_local_file(file, meta).await
    }

    /// Preview an uploaded connector file to derive its schema
    pub async fn preview_connector_file<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value> {
        self.send_payload(
            "preview_connector_file",
            "/connectors/file/preview",
            request,
        )
        .await
    }

    /// Upload files, or reference already uploaded connector files through
    /// `options.table_config`, and trigger an import.
    pub async fn upload_connector_file(
        &self,
        volume_id: &str,
        files: Vec<FileItem>,
        options: ConnectorUploadOptions,
    ) -> Result<Value> {
        if volume_id.is_empty() {
            return Err(Error::validation("volume_id is required"));
        }
        if files.is_empty() && options.table_config.is_none() {
            return Err(Error::validation(
                "either files or table_config (with conn_file_ids) must be provided",
            ));
        }

        let form = connector_form(volume_id, options)?;
        let form = attach_files(form, CONNECTOR_FILE_FIELD, files)?;
        self.post_multipart("/connectors/upload", form).await
    }
}

fn connector_form(volume_id: &str, options: ConnectorUploadOptions) -> Result<Form> {
    let mut form = Form::new().text("VolumeID", volume_id.to_string());

    if !options.meta.is_empty() {
        form = form.text("meta", serde_json::to_string(&options.meta)?);
    }
    if !options.file_types.is_empty() {
        form = form.text("file_types", serde_json::to_string(&options.file_types)?);
    }
    if let Some(path_regex) = options.path_regex.filter(|regex| !regex.is_empty()) {
        form = form.text("path_regex", path_regex);
    }
    if options.unzip_keep_structure {
        form = form.text("unzip_keep_structure", "true");
    }
    if let Some(dedup) = options.dedup.filter(|dedup| !dedup.is_null()) {
        form = form.text("dedup", serde_json::to_string(&dedup)?);
    }
    if let Some(table_config) = options.table_config {
        form = form.text("table_config", serde_json::to_string(&table_config)?);
    }
    for (name, value) in options.extra_fields {
        form = form.text(name, value);
    }

    Ok(form)
}

/// Append one part per file under `field`, rejecting empty file names.
pub(crate) fn attach_files(mut form: Form, field: &'static str, files: Vec<FileItem>) -> Result<Form> {
    for (index, file) in files.into_iter().enumerate() {
        if file.file_name.is_empty() {
            return Err(Error::Validation(format!(
                "filename at index {} cannot be empty",
                index
            )));
        }
        debug!(field, file_name = %file.file_name, size = file.content.len(), "attaching file");
        let part = Part::bytes(file.content.to_vec()).file_name(file.file_name);
        form = form.part(field, part);
    }
    Ok(form)
}

/// Load a file from disk as an upload item named after its final path
/// component.
pub async fn read_file_item(path: &Path) -> Result<FileItem> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    require_id("file name", &file_name)?;

    let content = tokio::fs::read(path).await?;
    Ok(FileItem::new(file_name, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_file_item_uses_final_component() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        tokio::fs::write(&path, b"a,b\n1,2\n").await.unwrap();

        let item = read_file_item(&path).await.unwrap();
        assert_eq!(item.file_name, "report.csv");
        assert_eq!(&item.content[..], b"a,b\n1,2\n");
    }

    #[tokio::test]
    async fn test_read_file_item_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file_item(&dir.path().join("nope.csv")).await.unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_attach_files_rejects_empty_name() {
        let files = vec![FileItem::new("a.txt", "x"), FileItem::new("", "y")];
        let err = attach_files(Form::new(), CONNECTOR_FILE_FIELD, files).unwrap_err();
        assert_eq!(err.to_string(), "filename at index 1 cannot be empty");
    }
}
