//! # groups-types
//!
//! Shared domain types for group search.
//!
//! This crate defines the data structures used throughout the system:
//! - Groups: read-only views of group records plus search options
//! - Users: member-search views plus request/response types
//! - Settings: layered configuration
//! - Errors: the error type every collaborator returns
//!
//! ## Usage
//!
//! ```rust
//! use groups_types::{GroupSearchOptions, SortStrategy};
//!
//! let options = GroupSearchOptions::new().with_sort(SortStrategy::Count);
//! assert_eq!(options.sort.as_str(), "count");
//! ```

pub mod config;
pub mod error;
pub mod group;
pub mod user;

pub use config::{Settings, DEFAULT_MAX_RESULTS, DEFAULT_MEMBER_PAGE_SIZE};
pub use error::GroupsError;
pub use group::{Group, GroupSearchOptions, SortStrategy};
pub use user::{MemberSearchRequest, User, UserSearchOptions, UserSearchResults};
