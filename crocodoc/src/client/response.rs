//! Interpretation of completed responses.

use crate::error::{CrocodocError, HttpErrorKind, RequestContext, Result};
use serde_json::Value;

/// Reject 4xx and 5xx statuses; anything else goes on to body handling.
pub(crate) fn check_status(status: u16, context: &RequestContext) -> Result<()> {
    if !(400..600).contains(&status) {
        return Ok(());
    }

    let kind = HttpErrorKind::from_status(status);
    tracing::warn!(
        status,
        kind = %kind,
        endpoint = context.endpoint,
        operation = context.operation,
        "Crocodoc API returned an error status"
    );

    Err(CrocodocError::Http {
        status,
        kind,
        context: context.clone(),
    })
}

/// Parse a JSON body. Objects carrying an `error` key become
/// [`CrocodocError::Server`]; arrays and scalars are returned untouched.
pub(crate) fn decode_json(body: &[u8], context: &RequestContext) -> Result<Value> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => return Err(invalid_json(body, context, None)),
        Ok(value) => value,
        Err(e) => return Err(invalid_json(body, context, Some(e))),
    };

    if let Some(error) = value.as_object().and_then(|object| object.get("error")) {
        let message = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };

        tracing::warn!(
            endpoint = context.endpoint,
            operation = context.operation,
            error = %message,
            "Crocodoc API reported an error"
        );

        return Err(CrocodocError::Server {
            message,
            context: context.clone(),
        });
    }

    Ok(value)
}

fn invalid_json(
    body: &[u8],
    context: &RequestContext,
    source: Option<serde_json::Error>,
) -> CrocodocError {
    CrocodocError::InvalidJson {
        body: String::from_utf8_lossy(body).into_owned(),
        context: context.clone(),
        source,
    }
}
