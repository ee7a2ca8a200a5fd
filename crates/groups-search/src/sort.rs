//! Group ranking.

use std::cmp::Reverse;

use groups_types::{Group, SortStrategy};

/// Reorder `groups` by `strategy` and hand them back.
///
/// Slug comparison is ordinal (byte order). For [`SortStrategy::Date`] equal
/// timestamps keep their input order, which callers must not rely on.
pub fn sort_groups(strategy: SortStrategy, mut groups: Vec<Group>) -> Vec<Group> {
    match strategy {
        SortStrategy::Count => {
            // Alphabetical first so the stable count sort leaves ties in slug order
            groups.sort_by(|a, b| a.slug.cmp(&b.slug));
            groups.sort_by_key(|g| Reverse(g.member_count));
        }
        SortStrategy::Date => {
            groups.sort_by_key(|g| Reverse(g.createtime));
        }
        SortStrategy::Alpha => {
            groups.sort_by(|a, b| a.slug.cmp(&b.slug));
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugs(groups: &[Group]) -> Vec<&str> {
        groups.iter().map(|g| g.slug.as_str()).collect()
    }

    fn sample() -> Vec<Group> {
        vec![
            Group::new("alpha", 100, 5),
            Group::new("beta", 200, 5),
            Group::new("gamma", 50, 9),
        ]
    }

    #[test]
    fn test_count_sort() {
        let sorted = sort_groups(SortStrategy::Count, sample());
        assert_eq!(slugs(&sorted), vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_count_ties_are_alphabetical() {
        let groups = vec![
            Group::new("zeta", 1, 3),
            Group::new("eta", 2, 3),
            Group::new("theta", 3, 7),
            Group::new("beta", 4, 3),
        ];
        let sorted = sort_groups(SortStrategy::Count, groups);
        assert_eq!(slugs(&sorted), vec!["theta", "beta", "eta", "zeta"]);
    }

    #[test]
    fn test_date_sort() {
        let sorted = sort_groups(SortStrategy::Date, sample());
        assert_eq!(slugs(&sorted), vec!["beta", "alpha", "gamma"]);
        assert!(sorted
            .windows(2)
            .all(|w| w[0].createtime >= w[1].createtime));
    }

    #[test]
    fn test_alpha_sort_is_ordinal() {
        let groups = vec![
            Group::new("beta", 1, 0),
            Group::new("Zulu", 2, 0),
            Group::new("alpha", 3, 0),
        ];
        let sorted = sort_groups(SortStrategy::Alpha, groups);
        // Uppercase sorts before lowercase in byte order
        assert_eq!(slugs(&sorted), vec!["Zulu", "alpha", "beta"]);
    }

    #[test]
    fn test_alpha_sort_idempotent() {
        let once = sort_groups(SortStrategy::Alpha, sample());
        let twice = sort_groups(SortStrategy::Alpha, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_strategy_falls_back_to_alpha() {
        let sorted = sort_groups(SortStrategy::parse("popular"), sample());
        assert_eq!(slugs(&sorted), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_groups(SortStrategy::Count, Vec::new()).is_empty());
    }
}
