//! Default fuzzy filtering using nucleo-matcher.

use std::sync::Arc;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::item::Item;

/// A pluggable filter: `(all items, input text) -> matching items, best first`.
pub type OptionFilter = Arc<dyn Fn(&[Item], &str) -> Vec<Item> + Send + Sync>;

/// How closely a haystack matches the query. Later variants rank higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum MatchRank {
    /// Characters appear in order, with gaps.
    #[default]
    Fuzzy,
    /// The query appears contiguously somewhere.
    Substring,
    /// A word inside the haystack starts with the query.
    WordPrefix,
    /// The haystack starts with the query.
    Prefix,
    /// The haystack equals the query, ignoring case.
    Exact,
}

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched entry in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
    /// Match tier, compared before the score.
    pub rank: MatchRank,
}

struct Scorer {
    matcher: Matcher,
    atom: Atom,
    query: String,
    buf: Vec<char>,
}

impl Scorer {
    // The whole query is one atom: whitespace is matched literally and
    // every character must appear in order.
    fn new(query: &str) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            atom: Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
                true,
            ),
            query: query.to_lowercase(),
            buf: Vec::new(),
        }
    }

    fn score(&mut self, haystack: &str) -> Option<(MatchRank, u32)> {
        let utf32 = Utf32Str::new(haystack, &mut self.buf);
        let score = self.atom.score(utf32, &mut self.matcher)?;
        Some((rank(&self.query, haystack), u32::from(score)))
    }
}

fn rank(query: &str, haystack: &str) -> MatchRank {
    let haystack = haystack.to_lowercase();
    if haystack == query {
        MatchRank::Exact
    } else if haystack.starts_with(query) {
        MatchRank::Prefix
    } else if haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| !word.is_empty() && word.starts_with(query))
    {
        MatchRank::WordPrefix
    } else if haystack.contains(query) {
        MatchRank::Substring
    } else {
        MatchRank::Fuzzy
    }
}

fn sort_matches(matches: &mut [FilterMatch]) {
    // sort_by is stable, so equal matches keep their original order
    matches.sort_by(|a, b| b.rank.cmp(&a.rank).then(b.score.cmp(&a.score)));
}

/// Fuzzy filter a list of strings.
///
/// Returns matches sorted best first. Empty query returns all entries with
/// score 0, in their original order.
///
/// # Example
///
/// ```ignore
/// let labels = vec!["apple".to_string(), "banana".to_string(), "apricot".to_string()];
/// let matches = fuzzy_filter("ap", &labels);
/// // Returns: apple and apricot, banana is dropped
/// ```
pub fn fuzzy_filter(query: &str, haystacks: &[String]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return (0..haystacks.len())
            .map(|index| FilterMatch {
                index,
                score: 0,
                rank: MatchRank::default(),
            })
            .collect();
    }

    let mut scorer = Scorer::new(query);
    let mut matches: Vec<FilterMatch> = haystacks
        .iter()
        .enumerate()
        .filter_map(|(index, haystack)| {
            scorer
                .score(haystack)
                .map(|(rank, score)| FilterMatch { index, score, rank })
        })
        .collect();

    sort_matches(&mut matches);
    matches
}

/// Fuzzy filter items by label and value, keeping the better of the two.
pub fn filter_items(items: &[Item], query: &str) -> Vec<FilterMatch> {
    if query.is_empty() {
        return (0..items.len())
            .map(|index| FilterMatch {
                index,
                score: 0,
                rank: MatchRank::default(),
            })
            .collect();
    }

    let mut scorer = Scorer::new(query);
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let label = scorer.score(&item.label);
            let value = scorer.score(&item.value);
            label
                .max(value)
                .map(|(rank, score)| FilterMatch { index, score, rank })
        })
        .collect();

    sort_matches(&mut matches);
    log::trace!(
        "filter_items query={:?} items={} matches={}",
        query,
        items.len(),
        matches.len()
    );
    matches
}

/// The filter used when no custom [`OptionFilter`] is configured.
pub fn default_filter(items: &[Item], query: &str) -> Vec<Item> {
    filter_items(items, query)
        .into_iter()
        .map(|m| items[m.index].clone())
        .collect()
}
