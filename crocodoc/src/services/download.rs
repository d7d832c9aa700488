//! `download/*` endpoints. Every call returns the response body verbatim;
//! persisting it is up to the caller.

use crate::client::{ApiClient, QueryParams};
use crate::error::Result;
use crate::models::{DownloadOptions, ThumbnailSize};

const PATH: &str = "download";

#[derive(Clone, Copy)]
pub struct DownloadService<'a> {
    api: &'a ApiClient,
}

impl<'a> DownloadService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Download the document, optionally as PDF and/or with annotations.
    pub async fn document(&self, uuid: &str, options: &DownloadOptions) -> Result<Vec<u8>> {
        self.api
            .request_bytes(PATH, "document", document_query(uuid, options), vec![])
            .await
    }

    /// Download the file exactly as it was uploaded.
    pub async fn original(&self, uuid: &str) -> Result<Vec<u8>> {
        self.document(uuid, &DownloadOptions::original()).await
    }

    /// Download a PNG thumbnail; `None` leaves the size to the server.
    pub async fn thumbnail(&self, uuid: &str, size: Option<ThumbnailSize>) -> Result<Vec<u8>> {
        let mut query: QueryParams = vec![("uuid", uuid.to_string())];
        if let Some(size) = size {
            query.push(("size", size.to_string()));
        }

        self.api
            .request_bytes(PATH, "thumbnail", query, vec![])
            .await
    }

    pub async fn thumbnail_sized(&self, uuid: &str, width: u32, height: u32) -> Result<Vec<u8>> {
        self.thumbnail(uuid, Some(ThumbnailSize::new(width, height)))
            .await
    }

    /// Download the extracted text of the document.
    pub async fn text(&self, uuid: &str) -> Result<Vec<u8>> {
        self.api
            .request_bytes(PATH, "text", vec![("uuid", uuid.to_string())], vec![])
            .await
    }
}

fn document_query(uuid: &str, options: &DownloadOptions) -> QueryParams {
    let mut query: QueryParams = vec![("uuid", uuid.to_string())];

    if options.pdf {
        query.push(("pdf", "true".to_string()));
    }

    // The filter only means something for annotated downloads.
    if options.annotated {
        query.push(("annotated", "true".to_string()));

        if let Some(filter) = options.filter.as_ref().and_then(|f| f.to_param()) {
            query.push(("filter", filter));
        }
    }

    query
}
