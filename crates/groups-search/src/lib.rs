//! # groups-search
//!
//! In-memory group search for stores that cannot search text themselves.
//!
//! Group records live in an external store. This crate pulls the slug list,
//! matches it in memory, hydrates the survivors and ranks them. It also
//! searches the members of a single group and puts owners first.
//!
//! ## Components
//! - [`GroupSearcher`]: slug substring search with exclusions and a result cap
//! - [`sort_groups`]: alpha / count / date ranking
//! - [`MemberSearcher`]: member listing and owner-first member search
//! - [`contracts`]: collaborator traits the caller implements
//! - [`mock`]: in-memory collaborators
//!
//! ## Usage
//!
//! ```rust,ignore
//! let searcher = GroupSearcher::from_settings(store, &Settings::load(None)?);
//! let groups = searcher
//!     .search("mod", &GroupSearchOptions::new().with_sort(SortStrategy::Count))
//!     .await?;
//! ```

pub mod contracts;
pub mod members;
pub mod mock;
pub mod searcher;
pub mod sort;

pub use contracts::{
    GroupClassifier, GroupStore, MemberDirectory, NamingConvention, OwnershipOracle, UserSearch,
};
pub use members::MemberSearcher;
pub use mock::{InMemoryGroupStore, InMemoryMemberDirectory, MockOwnershipOracle, MockUserSearch};
pub use searcher::GroupSearcher;
pub use sort::sort_groups;
