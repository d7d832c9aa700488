use super::UserFilter;
use serde::Deserialize;

/// Viewer permissions for a new session.
///
/// Every field is optional; unset flags are not sent and the server
/// default applies. Unknown keys are rejected when options are loaded
/// from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionOptions {
    /// Allow the viewer to create annotations and comments. Requires `user`.
    #[serde(default)]
    pub editable: Option<bool>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub filter: Option<UserFilter>,
    /// Allow modifying or deleting other users' annotations.
    #[serde(default)]
    pub admin: Option<bool>,
    /// Allow downloading the original document.
    #[serde(default)]
    pub downloadable: Option<bool>,
    /// Prevent text selection.
    ///
    /// Sent as `copyrighted`, the name the session endpoint accepts.
    #[serde(default)]
    pub copy_protected: Option<bool>,
    /// Do not persist any changes made in the session.
    #[serde(default)]
    pub demo: Option<bool>,
}

impl SessionOptions {
    pub fn editable_by(user: SessionUser) -> Self {
        Self {
            editable: Some(true),
            user: Some(user),
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: impl Into<UserFilter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = Some(admin);
        self
    }

    pub fn downloadable(mut self, downloadable: bool) -> Self {
        self.downloadable = Some(downloadable);
        self
    }

    pub fn copy_protected(mut self, copy_protected: bool) -> Self {
        self.copy_protected = Some(copy_protected);
        self
    }

    pub fn demo(mut self, demo: bool) -> Self {
        self.demo = Some(demo);
        self
    }
}

/// The application user an editable session acts as.
///
/// The id must fit in a non-negative signed 32-bit integer on the server;
/// larger values are rejected before the session request is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SessionUser {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }
}
