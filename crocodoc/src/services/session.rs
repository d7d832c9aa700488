//! `session/create`: session keys for the embeddable viewer.

use crate::client::ApiClient;
use crate::error::{CrocodocError, Result};
use crate::models::SessionOptions;
use crate::transport::FormField;
use serde_json::Value;

const PATH: &str = "session";

#[derive(Clone, Copy)]
pub struct SessionService<'a> {
    api: &'a ApiClient,
}

impl<'a> SessionService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Create a viewing session for `uuid` and return the session key.
    ///
    /// Options are validated before anything is sent: an editable session
    /// without a user id or name fails locally.
    pub async fn create(&self, uuid: &str, options: &SessionOptions) -> Result<String> {
        let form = session_form(uuid, options)?;

        let response = self.api.request_json(PATH, "create", vec![], form).await?;

        let session = match response.get("session") {
            Some(Value::String(session)) => Some(session.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        let Some(session) = session else {
            return Err(CrocodocError::MissingSessionKey { response });
        };

        tracing::debug!(uuid = %uuid, "Crocodoc session created");
        Ok(session)
    }

    /// Create a session with the server's default permissions.
    pub async fn create_default(&self, uuid: &str) -> Result<String> {
        self.create(uuid, &SessionOptions::default()).await
    }
}

fn session_form(uuid: &str, options: &SessionOptions) -> Result<Vec<FormField>> {
    let mut form = vec![FormField::text("uuid", uuid)];

    if let Some(editable) = options.editable {
        form.push(FormField::text("editable", if editable { "1" } else { "0" }));

        if editable {
            let user = options.user.as_ref();
            let id = user
                .and_then(|user| user.id)
                .ok_or(CrocodocError::MissingUserId)?;
            if i32::try_from(id).is_err() {
                return Err(CrocodocError::InvalidUserId { id });
            }
            let name = user
                .and_then(|user| user.name.as_deref())
                .filter(|name| !name.is_empty())
                .ok_or(CrocodocError::MissingUserName)?;

            form.push(FormField::text("user", format!("{},{}", id, name)));
        }
    }

    if let Some(filter) = options.filter.as_ref().and_then(|f| f.to_param()) {
        form.push(FormField::text("filter", filter));
    }

    let flags = [
        ("admin", options.admin),
        ("downloadable", options.downloadable),
        ("copyrighted", options.copy_protected),
        ("demo", options.demo),
    ];
    for (name, value) in flags {
        if let Some(value) = value {
            form.push(FormField::text(name, value.to_string()));
        }
    }

    Ok(form)
}
