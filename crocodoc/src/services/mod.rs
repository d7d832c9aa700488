pub mod document;
pub mod download;
pub mod session;

pub use document::DocumentService;
pub use download::DownloadService;
pub use session::SessionService;
