use serde::{Deserialize, Serialize};

/// Which users' annotations to include.
///
/// The API takes a comma-separated list of user ids (or the keywords
/// `all` / `none`); this accepts either a ready-made string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserFilter {
    Single(String),
    Many(Vec<String>),
}

impl UserFilter {
    pub fn all() -> Self {
        UserFilter::Single("all".to_string())
    }

    pub fn none() -> Self {
        UserFilter::Single("none".to_string())
    }

    /// Canonical wire value, or `None` when there is nothing to send.
    pub fn to_param(&self) -> Option<String> {
        let value = match self {
            UserFilter::Single(value) => value.clone(),
            UserFilter::Many(ids) => ids.join(","),
        };

        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

impl From<&str> for UserFilter {
    fn from(value: &str) -> Self {
        UserFilter::Single(value.to_string())
    }
}

impl From<String> for UserFilter {
    fn from(value: String) -> Self {
        UserFilter::Single(value)
    }
}

impl From<Vec<String>> for UserFilter {
    fn from(ids: Vec<String>) -> Self {
        UserFilter::Many(ids)
    }
}

impl From<Vec<&str>> for UserFilter {
    fn from(ids: Vec<&str>) -> Self {
        UserFilter::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for UserFilter {
    fn from(ids: &[&str]) -> Self {
        UserFilter::Many(ids.iter().map(|id| id.to_string()).collect())
    }
}
