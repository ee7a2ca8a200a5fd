//! Group search by slug substring.
//!
//! Matches a query against every known group slug, hydrates the survivors
//! through the store and ranks them with [`sort_groups`].

use std::sync::Arc;

use tracing::{debug, info};

use groups_types::{Group, GroupSearchOptions, GroupsError, Settings, DEFAULT_MAX_RESULTS};

use crate::contracts::{GroupClassifier, GroupStore, NamingConvention};
use crate::sort::sort_groups;

/// Searches groups by slug.
pub struct GroupSearcher {
    store: Arc<dyn GroupStore>,
    classifier: Arc<dyn GroupClassifier>,
    ephemeral_groups: Arc<[String]>,
    max_results: usize,
}

impl GroupSearcher {
    /// Create a searcher. `ephemeral_groups` is fixed for the searcher's lifetime.
    pub fn new(
        store: Arc<dyn GroupStore>,
        classifier: Arc<dyn GroupClassifier>,
        ephemeral_groups: impl Into<Arc<[String]>>,
    ) -> Self {
        Self {
            store,
            classifier,
            ephemeral_groups: ephemeral_groups.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Create a searcher using the configured ephemeral groups, result cap
    /// and the default naming convention.
    pub fn from_settings(store: Arc<dyn GroupStore>, settings: &Settings) -> Self {
        Self::new(
            store,
            Arc::new(NamingConvention::from_settings(settings)),
            settings.ephemeral_groups.clone(),
        )
        .with_max_results(settings.max_results)
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Ephemeral groups merged into every search.
    pub fn ephemeral_groups(&self) -> &[String] {
        &self.ephemeral_groups
    }

    /// Search groups whose slug contains `query`, case-insensitively.
    ///
    /// An empty query returns nothing without touching the store. Groups the
    /// store no longer knows are dropped silently.
    pub async fn search(
        &self,
        query: &str,
        options: &GroupSearchOptions,
    ) -> Result<Vec<Group>, GroupsError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let query = query.to_lowercase();

        let persisted = self.store.group_slugs_by_createtime().await?;
        let ephemeral: &[String] = if options.hide_ephemeral_groups {
            &[]
        } else {
            &self.ephemeral_groups
        };

        let slugs: Vec<String> = ephemeral
            .iter()
            .chain(persisted.iter())
            .filter(|slug| self.is_candidate(slug, &query))
            .take(self.max_results)
            .cloned()
            .collect();

        debug!(
            query = %query,
            candidates = persisted.len() + ephemeral.len(),
            matched = slugs.len(),
            "Matched group slugs"
        );

        let hydrated = if options.show_members {
            self.store.groups_and_members(&slugs).await?
        } else {
            self.store.groups_data(&slugs).await?
        };

        let mut groups: Vec<Group> = hydrated.into_iter().flatten().collect();
        if groups.len() < slugs.len() {
            debug!(
                missing = slugs.len() - groups.len(),
                "Dropped groups missing from store"
            );
        }

        if options.filter_hidden {
            groups.retain(|g| !g.hidden);
        }

        let groups = sort_groups(options.sort, groups);

        info!(
            query = %query,
            sort = %options.sort,
            results = groups.len(),
            "Group search complete"
        );

        Ok(groups)
    }

    fn is_candidate(&self, slug: &str, query: &str) -> bool {
        slug.to_lowercase().contains(query)
            && !self.classifier.is_banned_users(slug)
            && !self.classifier.is_privilege_group(slug)
    }
}
