//! Synonym expansion for search queries

use std::collections::{BTreeMap, BTreeSet};

/// Synonym groups: canonical key -> interchangeable member terms
pub type SynonymGroups = BTreeMap<String, Vec<String>>;

/// Expand a query term into every term it should match.
///
/// The result always contains `term`. A group joins the result when its key,
/// or any of its members, contains `term` as a substring; the whole group
/// (key and members) is then added. The test is "group text contains term",
/// so "jo" pulls in a "joy" group but "joyful" does not.
pub fn expand(synonyms: &SynonymGroups, term: &str) -> BTreeSet<String> {
    let mut terms = BTreeSet::new();
    terms.insert(term.to_string());

    for (key, members) in synonyms {
        if group_matches(key, members, term) {
            terms.insert(key.clone());
            terms.extend(members.iter().cloned());
        }
    }

    terms
}

/// Check if a group would be pulled in by `term`
pub fn group_matches(key: &str, members: &[String], term: &str) -> bool {
    key.contains(term) || members.iter().any(|member| member.contains(term))
}
