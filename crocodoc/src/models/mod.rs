//! Request and response shapes for the Crocodoc API.

pub mod document;
pub mod download;
pub mod filter;
pub mod session;

pub use document::{DocumentStatus, FileUpload, UploadSource};
pub use download::{DownloadOptions, ThumbnailSize};
pub use filter::UserFilter;
pub use session::{SessionOptions, SessionUser};
