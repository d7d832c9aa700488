//! `document/*` endpoints: upload, status and delete.

use crate::client::ApiClient;
use crate::error::{CrocodocError, Result};
use crate::models::{DocumentStatus, FileUpload, UploadSource};
use crate::transport::FormField;
use serde_json::Value;

const PATH: &str = "document";

#[derive(Clone, Copy)]
pub struct DocumentService<'a> {
    api: &'a ApiClient,
}

impl<'a> DocumentService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Upload a document and return its uuid.
    pub async fn upload(&self, source: UploadSource) -> Result<String> {
        let field = match source {
            UploadSource::Url(url) => FormField::text("url", url),
            UploadSource::File(file) => {
                file.check_mime_type()?;
                FormField::file("file", file)
            }
        };

        let response = self
            .api
            .request_json(PATH, "upload", vec![], vec![field])
            .await?;

        let uuid = match response.get("uuid") {
            Some(Value::String(uuid)) => Some(uuid.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        let Some(uuid) = uuid else {
            return Err(CrocodocError::MissingUuid {
                operation: "document::upload",
                response,
            });
        };

        tracing::info!(uuid = %uuid, "Document uploaded to Crocodoc");
        Ok(uuid)
    }

    /// Have the service fetch and convert the document at `url`.
    pub async fn upload_url(&self, url: &str) -> Result<String> {
        self.upload(UploadSource::Url(url.to_string())).await
    }

    pub async fn upload_file(&self, file: FileUpload) -> Result<String> {
        self.upload(UploadSource::File(file)).await
    }

    /// Status of a single document.
    ///
    /// Fails with `missing_uuid` if the server does not echo the uuid back.
    pub async fn status(&self, uuid: &str) -> Result<DocumentStatus> {
        let statuses = self.status_many(&[uuid]).await?;

        let status = statuses.into_iter().next().ok_or_else(|| CrocodocError::MissingUuid {
            operation: "document::status",
            response: Value::Array(vec![]),
        })?;

        if status.uuid.as_deref().map_or(true, str::is_empty) {
            return Err(CrocodocError::MissingUuid {
                operation: "document::status",
                response: serde_json::to_value(&status).unwrap_or(Value::Null),
            });
        }

        Ok(status)
    }

    /// Statuses of several documents in one request, in the order asked.
    ///
    /// Per-document failures are reported in [`DocumentStatus::error`]
    /// rather than as an `Err`.
    pub async fn status_many<S: AsRef<str>>(&self, uuids: &[S]) -> Result<Vec<DocumentStatus>> {
        let uuids = uuids
            .iter()
            .map(|uuid| uuid.as_ref())
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .api
            .request_json(PATH, "status", vec![("uuids", uuids)], vec![])
            .await?;

        match response {
            Value::Array(records) => Ok(records.iter().map(DocumentStatus::from_record).collect()),
            response => Err(CrocodocError::UnexpectedResponse {
                operation: "document::status",
                expected: "an array of status records",
                response,
            }),
        }
    }

    /// Delete a document. Returns the server's answer verbatim.
    pub async fn delete(&self, uuid: &str) -> Result<bool> {
        let response = self
            .api
            .request_json(PATH, "delete", vec![], vec![FormField::text("uuid", uuid)])
            .await?;

        let deleted = response
            .as_bool()
            .ok_or_else(|| CrocodocError::UnexpectedResponse {
                operation: "document::delete",
                expected: "a boolean",
                response: response.clone(),
            })?;

        tracing::info!(uuid = %uuid, deleted, "Crocodoc delete completed");
        Ok(deleted)
    }
}
