use super::UserFilter;
use std::fmt;

/// Options for `download/document`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Download the rendered PDF instead of the original file.
    pub pdf: bool,
    /// Include annotations.
    pub annotated: bool,
    /// Only applied when `annotated` is set.
    pub filter: Option<UserFilter>,
}

impl DownloadOptions {
    pub fn original() -> Self {
        Self::default()
    }

    pub fn pdf() -> Self {
        Self {
            pdf: true,
            ..Self::default()
        }
    }

    pub fn as_pdf(mut self) -> Self {
        self.pdf = true;
        self
    }

    pub fn with_annotations(mut self) -> Self {
        self.annotated = true;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<UserFilter>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Maximum thumbnail bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSize {
    pub width: u32,
    pub height: u32,
}

impl ThumbnailSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
