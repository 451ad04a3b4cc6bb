//! Term-count scoring and ranking
//!
//! Each expanded term contributes at most 1 to an entry's score: containment
//! is checked once per term, repeated occurrences do not count.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::corpus::Corpus;
use crate::types::{Entry, MatchSummary};

/// Corpus size above which scoring runs on the rayon pool
const PARALLEL_SCORING_THRESHOLD: usize = 1000;

/// Number of `terms` that occur in `haystack`
pub fn score(haystack: &str, terms: &BTreeSet<String>) -> usize {
    terms
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .count()
}

/// Score every entry and return the matches, best first.
///
/// Entries scoring 0 are dropped. Ties keep corpus order. No truncation
/// happens here.
pub fn rank(corpus: &Corpus, terms: &BTreeSet<String>) -> Vec<MatchSummary> {
    let entries = corpus.entries();
    let haystacks = corpus.haystacks();

    let summarize = |(entry, haystack): (&Entry, &String)| -> Option<MatchSummary> {
        let score = score(haystack, terms);
        (score > 0).then(|| MatchSummary {
            id: entry.id.clone(),
            title: entry.title.clone(),
            score,
        })
    };

    let mut matches: Vec<MatchSummary> = if entries.len() > PARALLEL_SCORING_THRESHOLD {
        // Indexed parallel collect keeps corpus order
        entries
            .par_iter()
            .zip(haystacks.par_iter())
            .filter_map(summarize)
            .collect()
    } else {
        entries.iter().zip(haystacks.iter()).filter_map(summarize).collect()
    };

    // Stable sort: equal scores stay in corpus order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
