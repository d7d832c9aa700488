use crate::transport::TransportError;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Classification of an HTTP error status returned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
    MethodNotAllowed,
    Unknown,
}

impl HttpErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => HttpErrorKind::BadRequest,
            401 => HttpErrorKind::Unauthorized,
            404 => HttpErrorKind::NotFound,
            405 => HttpErrorKind::MethodNotAllowed,
            _ => HttpErrorKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpErrorKind::BadRequest => "bad_request",
            HttpErrorKind::Unauthorized => "unauthorized",
            HttpErrorKind::NotFound => "not_found",
            HttpErrorKind::MethodNotAllowed => "method_not_allowed",
            HttpErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was attempted when a request failed.
///
/// The API token is never recorded here: it is stripped from the URL and
/// left out of the form fields, so the context can be logged as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Endpoint group, e.g. `document`.
    pub endpoint: &'static str,
    /// Operation within the group, e.g. `upload`.
    pub operation: &'static str,
    /// Attempted URL without the token.
    pub url: String,
    pub query: Vec<(String, String)>,
    /// Form fields; file parts are summarised by name and size.
    pub form: Vec<(String, String)>,
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{} ({})", self.endpoint, self.operation, self.url)?;
        if !self.query.is_empty() {
            write!(f, " query=[{}]", join_pairs(&self.query))?;
        }
        if !self.form.is_empty() {
            write!(f, " form=[{}]", join_pairs(&self.form))?;
        }
        Ok(())
    }
}

fn join_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum CrocodocError {
    #[error("Crocodoc: [configuration_error] {0}")]
    Configuration(String),

    #[error("Crocodoc: [connection_error] {context}: {source}")]
    Connection {
        context: RequestContext,
        #[source]
        source: TransportError,
    },

    #[error("Crocodoc: [invalid_response] {context}: {source}")]
    InvalidResponse {
        context: RequestContext,
        #[source]
        source: TransportError,
    },

    #[error("Crocodoc: [server_error_{status}_{kind}] {context}")]
    Http {
        status: u16,
        kind: HttpErrorKind,
        context: RequestContext,
    },

    #[error("Crocodoc: [server_response_not_valid_json] {context}: {body}")]
    InvalidJson {
        body: String,
        context: RequestContext,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Crocodoc: [server_error] {context}: {message}")]
    Server {
        message: String,
        context: RequestContext,
    },

    #[error("Crocodoc: [unexpected_response] {operation}: expected {expected}, got {response}")]
    UnexpectedResponse {
        operation: &'static str,
        expected: &'static str,
        response: Value,
    },

    #[error("Crocodoc: [missing_uuid] {operation}: {response}")]
    MissingUuid {
        operation: &'static str,
        response: Value,
    },

    #[error("Crocodoc: [missing_session_key] session::create: {response}")]
    MissingSessionKey { response: Value },

    #[error("Crocodoc: [missing_user_id] session::create: editable sessions need a user id")]
    MissingUserId,

    #[error("Crocodoc: [missing_user_name] session::create: editable sessions need a user name")]
    MissingUserName,

    #[error("Crocodoc: [invalid_user_id] session::create: user id {id} is above i32::MAX")]
    InvalidUserId { id: u32 },

    #[error("Crocodoc: [invalid_mime_type] document::upload: '{}' ({file_name})", .mime_type.escape_debug())]
    InvalidMimeType { file_name: String, mime_type: String },
}

impl CrocodocError {
    /// Short machine-readable code, e.g. `server_error_401_unauthorized`.
    pub fn code(&self) -> Cow<'static, str> {
        match self {
            CrocodocError::Configuration(_) => Cow::Borrowed("configuration_error"),
            CrocodocError::Connection { .. } => Cow::Borrowed("connection_error"),
            CrocodocError::InvalidResponse { .. } => Cow::Borrowed("invalid_response"),
            CrocodocError::Http { status, kind, .. } => {
                Cow::Owned(format!("server_error_{}_{}", status, kind))
            }
            CrocodocError::InvalidJson { .. } => Cow::Borrowed("server_response_not_valid_json"),
            CrocodocError::Server { .. } => Cow::Borrowed("server_error"),
            CrocodocError::UnexpectedResponse { .. } => Cow::Borrowed("unexpected_response"),
            CrocodocError::MissingUuid { .. } => Cow::Borrowed("missing_uuid"),
            CrocodocError::MissingSessionKey { .. } => Cow::Borrowed("missing_session_key"),
            CrocodocError::MissingUserId => Cow::Borrowed("missing_user_id"),
            CrocodocError::MissingUserName => Cow::Borrowed("missing_user_name"),
            CrocodocError::InvalidUserId { .. } => Cow::Borrowed("invalid_user_id"),
            CrocodocError::InvalidMimeType { .. } => Cow::Borrowed("invalid_mime_type"),
        }
    }

    /// The request that failed, for errors raised after dispatch.
    pub fn context(&self) -> Option<&RequestContext> {
        match self {
            CrocodocError::Connection { context, .. }
            | CrocodocError::InvalidResponse { context, .. }
            | CrocodocError::Http { context, .. }
            | CrocodocError::InvalidJson { context, .. }
            | CrocodocError::Server { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status for errors classified from the response status line.
    pub fn status(&self) -> Option<u16> {
        match self {
            CrocodocError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for CrocodocError {
    fn from(err: config::ConfigError) -> Self {
        CrocodocError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CrocodocError>;
