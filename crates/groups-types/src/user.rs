//! User records and member search request/response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Member-search view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub uid: u64,

    /// Display name
    #[serde(default)]
    pub username: String,

    /// Ownership of the searched group. Set per response, never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
}

impl User {
    pub fn new(uid: u64, username: impl Into<String>) -> Self {
        Self {
            uid,
            username: username.into(),
            is_owner: None,
        }
    }

    /// True only when ownership was resolved and granted.
    pub fn is_owner(&self) -> bool {
        self.is_owner == Some(true)
    }
}

/// Request to search the members of one group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchRequest {
    /// Group whose members are searched
    pub group_name: String,

    /// Requesting user
    pub uid: u64,

    /// Text query; empty or absent lists the first page of members
    #[serde(default)]
    pub query: Option<String>,

    /// Options passed through to the general user search
    #[serde(flatten, default)]
    pub options: Map<String, Value>,
}

impl MemberSearchRequest {
    pub fn new(group_name: impl Into<String>, uid: u64) -> Self {
        Self {
            group_name: group_name.into(),
            uid,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// Options handed to the general user search collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchOptions {
    pub query: String,

    /// Requesting user
    pub uid: u64,

    /// Split results into pages
    pub paginate: bool,

    /// Result cap; `None` means unlimited
    #[serde(default)]
    pub hard_cap: Option<usize>,

    /// Caller-supplied options, passed through untouched
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

/// Result of a user or member search.
///
/// Slots may be empty when the upstream search could not load a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSearchResults {
    pub users: Vec<Option<User>>,

    /// Additional fields reported by the upstream search (counts, timing)
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl UserSearchResults {
    pub fn new(users: Vec<Option<User>>) -> Self {
        Self {
            users,
            extra: Map::new(),
        }
    }
}
