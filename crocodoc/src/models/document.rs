use crate::error::{CrocodocError, Result};
use mime_guess::mime::Mime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Conversion status of one document, as reported by `document/status`.
///
/// Either `status`/`viewable` or `error` is set. The status string is
/// passed through as the server reports it (`QUEUED`, `PROCESSING`,
/// `DONE`, `ERROR`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentStatus {
    pub fn is_viewable(&self) -> bool {
        self.viewable.unwrap_or(false)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Read one record of a `document/status` response.
    ///
    /// Never fails: fields of an unexpected type are kept as their
    /// JSON text, and a record that is not an object comes back with
    /// `error` describing it, so one odd record cannot sink a batch.
    pub fn from_record(record: &Value) -> Self {
        let Some(fields) = record.as_object() else {
            return Self {
                error: Some(format!("unexpected status record: {}", record)),
                ..Self::default()
            };
        };

        Self {
            uuid: fields.get("uuid").and_then(field_text),
            status: fields.get("status").and_then(field_text),
            viewable: fields.get("viewable").and_then(Value::as_bool),
            error: fields.get("error").and_then(field_text),
        }
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Where an uploaded document comes from.
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// A publicly reachable URL the service fetches itself.
    Url(String),
    File(FileUpload),
}

impl From<FileUpload> for UploadSource {
    fn from(file: FileUpload) -> Self {
        UploadSource::File(file)
    }
}

/// File contents sent as a multipart file part.
#[derive(Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk, naming the part after the file and guessing
    /// its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = mime_guess::from_path(path).first().map(|m| m.to_string());

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Reject a MIME type the multipart encoder would refuse, before
    /// anything is sent.
    pub fn check_mime_type(&self) -> Result<()> {
        match &self.mime_type {
            Some(mime_type) if mime_type.parse::<Mime>().is_err() => {
                Err(CrocodocError::InvalidMimeType {
                    file_name: self.file_name.clone(),
                    mime_type: mime_type.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
