//! Group records and group search options.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Read-only view of a group record.
///
/// The slug is unique across persisted and ephemeral groups and doubles as
/// the display and sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique, case-sensitive identifier
    pub slug: String,

    /// Creation timestamp
    pub createtime: i64,

    /// Number of members
    #[serde(default)]
    pub member_count: u64,

    /// Administratively hidden from search
    #[serde(default)]
    pub hidden: bool,

    /// Member records, only filled by the with-members hydration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<User>>,
}

impl Group {
    /// Create a new group with no member detail
    pub fn new(slug: impl Into<String>, createtime: i64, member_count: u64) -> Self {
        Self {
            slug: slug.into(),
            createtime,
            member_count,
            hidden: false,
            members: None,
        }
    }

    /// Mark the group hidden
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Attach member detail
    pub fn with_members(mut self, members: Vec<User>) -> Self {
        self.members = Some(members);
        self
    }
}

/// Ordering applied to group search results.
///
/// Any unrecognized name falls back to [`SortStrategy::Alpha`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortStrategy {
    /// Slug ascending
    #[default]
    Alpha,
    /// Member count descending, slug ascending on ties
    Count,
    /// Creation time descending
    Date,
}

impl SortStrategy {
    /// Parse a strategy name. Never fails.
    pub fn parse(name: &str) -> Self {
        match name {
            "count" => SortStrategy::Count,
            "date" => SortStrategy::Date,
            _ => SortStrategy::Alpha,
        }
    }

    /// Returns the strategy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Alpha => "alpha",
            SortStrategy::Count => "count",
            SortStrategy::Date => "date",
        }
    }
}

impl From<String> for SortStrategy {
    fn from(name: String) -> Self {
        SortStrategy::parse(&name)
    }
}

impl From<&str> for SortStrategy {
    fn from(name: &str) -> Self {
        SortStrategy::parse(name)
    }
}

impl std::fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display options for a group search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupSearchOptions {
    /// Leave ephemeral groups out of the candidate set
    pub hide_ephemeral_groups: bool,
    /// Hydrate groups together with their members
    pub show_members: bool,
    /// Drop groups marked hidden
    pub filter_hidden: bool,
    /// Result ordering
    pub sort: SortStrategy,
}

impl GroupSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_ephemeral_groups(mut self) -> Self {
        self.hide_ephemeral_groups = true;
        self
    }

    pub fn show_members(mut self) -> Self {
        self.show_members = true;
        self
    }

    pub fn filter_hidden(mut self) -> Self {
        self.filter_hidden = true;
        self
    }

    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }
}
