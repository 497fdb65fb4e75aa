//! Importing local files into tables and volumes, and finding them again

use std::path::Path;

use moi_api_contract::*;
use moi_rest_client::{read_file_item, CatalogApi, Error, Result};
use serde_json::Value;
use tracing::{info, instrument};
use validator::Validate;

use crate::client::SdkClient;

/// Volume id sent when importing already uploaded connector files. The
/// service resolves the files from `conn_file_ids` and ignores it.
pub const CONNECTOR_IMPORT_VOLUME_ID: &str = "123456";

const FILE_SEARCH_PAGE_SIZE: u32 = 100;

impl<C: CatalogApi> SdkClient<C> {
    /// Import previously uploaded connector files into a table.
    ///
    /// When `new_table` is false the target `table_id` is required.
    #[instrument(skip_all)]
    pub async fn import_local_file_to_table(&self, mut table_config: TableConfig) -> Result<Value> {
        table_config.validate()?;

        if !table_config.new_table {
            if table_config.table_id.unwrap_or_default() == 0 {
                return Err(Error::validation(
                    "table_config.table_id is required when new_table is false",
                ));
            }
            table_config.existed_table.get_or_insert_with(Vec::new);
        }

        let conn_file_id = table_config.conn_file_ids[0].clone();
        info!(%conn_file_id, new_table = table_config.new_table, "importing connector file");

        let options = ConnectorUploadOptions::default()
            .with_meta(vec![FileMeta::new(conn_file_id, "/")])
            .with_table_config(table_config);
        self.raw()
            .upload_connector_file(CONNECTOR_IMPORT_VOLUME_ID, Vec::new(), options)
            .await
    }

    /// Upload a local file into a volume, optionally deduplicating against
    /// files already stored there.
    #[instrument(skip(self, file_path, meta, dedup), fields(path = %file_path.as_ref().display()))]
    pub async fn import_local_file_to_volume(
        &self,
        file_path: impl AsRef<Path>,
        volume_id: &str,
        meta: FileMeta,
        dedup: Option<Value>,
    ) -> Result<Value> {
        if volume_id.is_empty() {
            return Err(Error::validation("volume_id is required"));
        }

        let file = read_file_item(file_path.as_ref()).await?;
        info!(file_name = %file.file_name, size = file.content.len(), "uploading file to volume");

        let mut options = ConnectorUploadOptions::default().with_meta(vec![meta]);
        if let Some(dedup) = dedup {
            options = options.with_dedup(dedup);
        }
        self.raw()
            .upload_connector_file(volume_id, vec![file], options)
            .await
    }

    /// List files in `volume_id` whose name contains `file_name`.
    pub async fn find_files_by_name(
        &self,
        file_name: &str,
        volume_id: &str,
    ) -> Result<FileListResponse> {
        if file_name.is_empty() {
            return Err(Error::validation("file_name is required"));
        }
        if volume_id.is_empty() {
            return Err(Error::validation("volume_id is required"));
        }

        let request = FileListRequest {
            keyword: String::new(),
            common_condition: CommonCondition::default()
                .page(1, FILE_SEARCH_PAGE_SIZE)
                .with_filter(CommonFilter::fuzzy("name", file_name))
                .with_filter(CommonFilter::exact("volume_id", volume_id)),
        };
        self.raw().list_files(&request).await
    }
}
