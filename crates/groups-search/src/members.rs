//! Member search within a single group.
//!
//! Without a query this lists the first page of members. With a query it
//! runs the general user search, marks group owners and moves them to the
//! front.

use std::sync::Arc;

use tracing::{debug, info};

use groups_types::{
    GroupsError, MemberSearchRequest, Settings, User, UserSearchOptions, UserSearchResults,
    DEFAULT_MEMBER_PAGE_SIZE,
};

use crate::contracts::{MemberDirectory, OwnershipOracle, UserSearch};

/// Searches the members of a group.
pub struct MemberSearcher {
    directory: Arc<dyn MemberDirectory>,
    users: Arc<dyn UserSearch>,
    ownership: Arc<dyn OwnershipOracle>,
    page_size: usize,
}

impl MemberSearcher {
    pub fn new(
        directory: Arc<dyn MemberDirectory>,
        users: Arc<dyn UserSearch>,
        ownership: Arc<dyn OwnershipOracle>,
    ) -> Self {
        Self {
            directory,
            users,
            ownership,
            page_size: DEFAULT_MEMBER_PAGE_SIZE,
        }
    }

    pub fn from_settings(
        directory: Arc<dyn MemberDirectory>,
        users: Arc<dyn UserSearch>,
        ownership: Arc<dyn OwnershipOracle>,
        settings: &Settings,
    ) -> Self {
        Self::new(directory, users, ownership).with_page_size(settings.member_page_size)
    }

    /// Page size for empty queries. Clamped to at least one member.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Search members of `request.group_name`.
    ///
    /// Empty queries return the first page as-is with no ownership data.
    /// Otherwise owners come first and upstream order is kept within owners
    /// and within everyone else.
    pub async fn search_members(
        &self,
        request: MemberSearchRequest,
    ) -> Result<UserSearchResults, GroupsError> {
        let query = match request.query.as_deref() {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => return self.first_page(&request).await,
        };

        // Pagination and the cap are always overridden
        let mut extra = request.options;
        extra.remove("paginate");
        extra.remove("hardCap");

        let options = UserSearchOptions {
            query,
            uid: request.uid,
            paginate: false,
            hard_cap: None,
            extra,
        };
        let mut results = self.users.search(options).await?;

        let uids: Vec<Option<u64>> = results
            .users
            .iter()
            .map(|slot| slot.as_ref().map(|u| u.uid))
            .collect();
        let owners = self.ownership.is_owners(&uids, &request.group_name).await?;

        for (index, slot) in results.users.iter_mut().enumerate() {
            if let Some(user) = slot {
                user.is_owner = owners.get(index).copied();
            }
        }

        // Stable: only ownership moves entries
        results
            .users
            .sort_by_key(|slot| !slot.as_ref().is_some_and(User::is_owner));

        info!(
            group = %request.group_name,
            results = results.users.len(),
            owners = owners.iter().filter(|o| **o).count(),
            "Member search complete"
        );

        Ok(results)
    }

    async fn first_page(
        &self,
        request: &MemberSearchRequest,
    ) -> Result<UserSearchResults, GroupsError> {
        let stop = self.page_size - 1;
        let users = self
            .directory
            .owners_and_members(&request.group_name, request.uid, 0, stop)
            .await?;

        debug!(
            group = %request.group_name,
            results = users.len(),
            "Listed first member page"
        );

        Ok(UserSearchResults::new(
            users.into_iter().map(Some).collect(),
        ))
    }
}
