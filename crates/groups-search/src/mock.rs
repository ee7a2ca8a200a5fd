//! In-memory collaborators.
//!
//! Used by the test suites and handy when embedding the searchers without a
//! real store. Each mock can be told to fail so error propagation is testable.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use groups_types::{Group, GroupsError, User, UserSearchOptions, UserSearchResults};

use crate::contracts::{GroupStore, MemberDirectory, OwnershipOracle, UserSearch};

/// Group store backed by a vector of records.
#[derive(Default)]
pub struct InMemoryGroupStore {
    /// Persisted groups, any order
    pub groups: Vec<Group>,
    /// Records the store can hydrate but does not list (e.g. ephemeral groups)
    pub unlisted: Vec<Group>,
    /// Members per group slug
    pub members: HashMap<String, Vec<User>>,
    /// Fail hydration calls
    pub fail_hydration: bool,
    /// Fail range reads
    pub fail_range: bool,
    range_reads: AtomicUsize,
}

impl InMemoryGroupStore {
    /// Add a persisted group.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Add a group that hydrates but is absent from the createtime index.
    pub fn with_unlisted(mut self, group: Group) -> Self {
        self.unlisted.push(group);
        self
    }

    /// Set the members of a group.
    pub fn with_members(mut self, slug: &str, members: Vec<User>) -> Self {
        self.members.insert(slug.to_string(), members);
        self
    }

    /// Make hydration fail.
    pub fn with_hydration_failure(mut self) -> Self {
        self.fail_hydration = true;
        self
    }

    /// Make the createtime range read fail.
    pub fn with_range_failure(mut self) -> Self {
        self.fail_range = true;
        self
    }

    /// Number of range reads served so far.
    pub fn range_reads(&self) -> usize {
        self.range_reads.load(Ordering::SeqCst)
    }

    fn lookup(&self, slug: &str) -> Option<&Group> {
        self.groups
            .iter()
            .chain(self.unlisted.iter())
            .find(|g| g.slug == slug)
    }
}

#[async_trait]
impl GroupStore for InMemoryGroupStore {
    async fn group_slugs_by_createtime(&self) -> Result<Vec<String>, GroupsError> {
        self.range_reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_range {
            return Err(GroupsError::Store("range read failed".to_string()));
        }

        let mut groups: Vec<&Group> = self.groups.iter().collect();
        groups.sort_by_key(|g| g.createtime);
        Ok(groups.into_iter().map(|g| g.slug.clone()).collect())
    }

    async fn groups_data(&self, slugs: &[String]) -> Result<Vec<Option<Group>>, GroupsError> {
        if self.fail_hydration {
            return Err(GroupsError::Store("store unavailable".to_string()));
        }
        Ok(slugs.iter().map(|s| self.lookup(s).cloned()).collect())
    }

    async fn groups_and_members(
        &self,
        slugs: &[String],
    ) -> Result<Vec<Option<Group>>, GroupsError> {
        if self.fail_hydration {
            return Err(GroupsError::Store("store unavailable".to_string()));
        }
        Ok(slugs
            .iter()
            .map(|s| {
                self.lookup(s).cloned().map(|g| {
                    let members = self.members.get(s).cloned().unwrap_or_default();
                    g.with_members(members)
                })
            })
            .collect())
    }
}

/// Member lister over fixed member lists. Records each requested page.
#[derive(Default)]
pub struct InMemoryMemberDirectory {
    pub members: HashMap<String, Vec<User>>,
    calls: Mutex<Vec<(String, u64, usize, usize)>>,
}

impl InMemoryMemberDirectory {
    pub fn with_members(mut self, group_name: &str, members: Vec<User>) -> Self {
        self.members.insert(group_name.to_string(), members);
        self
    }

    /// Pages requested so far as `(group, caller, start, stop)`.
    pub fn calls(&self) -> Vec<(String, u64, usize, usize)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MemberDirectory for InMemoryMemberDirectory {
    async fn owners_and_members(
        &self,
        group_name: &str,
        caller_uid: u64,
        start: usize,
        stop: usize,
    ) -> Result<Vec<User>, GroupsError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((group_name.to_string(), caller_uid, start, stop));
        }

        let members = self
            .members
            .get(group_name)
            .ok_or_else(|| GroupsError::NotFound(group_name.to_string()))?;

        Ok(members
            .iter()
            .skip(start)
            .take(stop.saturating_sub(start) + 1)
            .cloned()
            .collect())
    }
}

/// User search returning canned results. Records the options it was given.
#[derive(Default)]
pub struct MockUserSearch {
    pub results: UserSearchResults,
    pub fail: bool,
    calls: Mutex<Vec<UserSearchOptions>>,
}

impl MockUserSearch {
    pub fn with_results(mut self, results: UserSearchResults) -> Self {
        self.results = results;
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Options received so far.
    pub fn calls(&self) -> Vec<UserSearchOptions> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl UserSearch for MockUserSearch {
    async fn search(&self, options: UserSearchOptions) -> Result<UserSearchResults, GroupsError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(options);
        }
        if self.fail {
            return Err(GroupsError::Search("search backend unavailable".to_string()));
        }
        Ok(self.results.clone())
    }
}

/// Ownership oracle over a fixed owner set per group.
#[derive(Default)]
pub struct MockOwnershipOracle {
    pub owners: HashMap<String, HashSet<u64>>,
    pub fail: bool,
}

impl MockOwnershipOracle {
    pub fn with_owners(mut self, group_name: &str, uids: &[u64]) -> Self {
        self.owners
            .entry(group_name.to_string())
            .or_default()
            .extend(uids.iter().copied());
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl OwnershipOracle for MockOwnershipOracle {
    async fn is_owners(
        &self,
        uids: &[Option<u64>],
        group_name: &str,
    ) -> Result<Vec<bool>, GroupsError> {
        if self.fail {
            return Err(GroupsError::Ownership("ownership lookup failed".to_string()));
        }
        let owners = self.owners.get(group_name);
        Ok(uids
            .iter()
            .map(|uid| match (uid, owners) {
                (Some(uid), Some(owners)) => owners.contains(uid),
                _ => false,
            })
            .collect())
    }
}
