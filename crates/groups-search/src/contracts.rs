//! Collaborator contracts.
//!
//! The search core owns no storage. Everything it reads comes through the
//! traits below; implementations decide how to reach the backing store.

use async_trait::async_trait;

use groups_types::{Group, GroupsError, Settings, User, UserSearchOptions, UserSearchResults};

/// Read access to persisted group records.
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// All persisted group slugs, ascending by creation time.
    async fn group_slugs_by_createtime(&self) -> Result<Vec<String>, GroupsError>;

    /// Group records for `slugs`, in input order. Missing groups are `None`.
    async fn groups_data(&self, slugs: &[String]) -> Result<Vec<Option<Group>>, GroupsError>;

    /// Same as [`GroupStore::groups_data`] with member detail filled in.
    async fn groups_and_members(
        &self,
        slugs: &[String],
    ) -> Result<Vec<Option<Group>>, GroupsError>;
}

/// Name-based classification of groups that search must never return.
pub trait GroupClassifier: Send + Sync {
    /// True for the reserved banned-users pseudo-group.
    fn is_banned_users(&self, slug: &str) -> bool;

    /// True for groups following the privilege naming convention.
    fn is_privilege_group(&self, slug: &str) -> bool;
}

/// Lists a page of a group's members.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Members at positions `start..=stop`, as seen by `caller_uid`.
    async fn owners_and_members(
        &self,
        group_name: &str,
        caller_uid: u64,
        start: usize,
        stop: usize,
    ) -> Result<Vec<User>, GroupsError>;
}

/// General user search.
#[async_trait]
pub trait UserSearch: Send + Sync {
    async fn search(&self, options: UserSearchOptions) -> Result<UserSearchResults, GroupsError>;
}

/// Batch ownership lookup.
#[async_trait]
pub trait OwnershipOracle: Send + Sync {
    /// One flag per entry of `uids`, same order and length. Empty slots are
    /// passed as `None`.
    async fn is_owners(
        &self,
        uids: &[Option<u64>],
        group_name: &str,
    ) -> Result<Vec<bool>, GroupsError>;
}

/// Default classifier: a configured banned-users slug plus the
/// `cid:<digits>:privileges:<name>` convention.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    banned_users_slug: String,
}

impl NamingConvention {
    pub fn new(banned_users_slug: impl Into<String>) -> Self {
        Self {
            banned_users_slug: banned_users_slug.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.banned_users_slug.clone())
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl GroupClassifier for NamingConvention {
    fn is_banned_users(&self, slug: &str) -> bool {
        slug == self.banned_users_slug
    }

    fn is_privilege_group(&self, slug: &str) -> bool {
        let Some(rest) = slug.strip_prefix("cid:") else {
            return false;
        };
        let Some((cid, rest)) = rest.split_once(':') else {
            return false;
        };
        if cid.is_empty() || !cid.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let Some(name) = rest.strip_prefix("privileges:") else {
            return false;
        };
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b':'))
    }
}
