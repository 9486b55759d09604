//! Team-name reconciliation between the rankings poll and the scoreboard
//! feeds. The feeds disagree on naming (full school name vs. mascot vs.
//! abbreviation), so the index stores several lookup keys per ranked team and
//! resolution falls back through increasingly fuzzy matches.

use espn_api::RankEntry;
use log::warn;

/// Teams whose common names diverge too far from the poll's display name for
/// normalization to bridge. Matched by containment on the lowercased name.
const KNOWN_ALIASES: &[(&str, &str)] = &[
    ("southern california", "usc"),
    ("brigham young", "byu"),
    ("louisiana state", "lsu"),
    ("texas christian", "tcu"),
    ("southern methodist", "smu"),
    ("central florida", "ucf"),
    ("texas a&m", "a&m"),
    ("mississippi rebels", "ole miss"),
];

/// Lookup from name variants to poll rank. Keys are kept in insertion order
/// (rank 1 first), so fuzzy scans resolve the same way on every build.
#[derive(Debug, Clone, Default)]
pub struct RankingIndex {
    entries: Vec<(String, u8)>,
}

impl RankingIndex {
    /// Build the index from poll entries, deriving alias keys per team.
    pub fn build(ranked: &[RankEntry]) -> Self {
        let mut index = Self::default();
        for entry in ranked {
            for key in alias_keys(&entry.team_name) {
                index.insert(key, entry.rank);
            }
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // First-wins: aliases should not collide across ranked teams, but when
    // one does we keep the earlier (better-ranked) entry and report it.
    fn insert(&mut self, key: String, rank: u8) {
        if let Some((_, existing)) = self.entries.iter().find(|(k, _)| *k == key) {
            if *existing != rank {
                warn!("rank alias collision: {key:?} maps to #{existing} and #{rank}, keeping #{existing}");
            }
            return;
        }
        self.entries.push((key, rank));
    }

    fn get(&self, key: &str) -> Option<u8> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, r)| *r)
    }

    /// Resolve a scoreboard team name to its poll rank.
    ///
    /// Resolution order, first match wins: exact (case-insensitive),
    /// normalized, two-token base-name containment in either direction, then
    /// any token longer than 3 chars contained in a key. Best-effort: a short
    /// common token can hit an unrelated team, a tradeoff accepted in favor
    /// of coverage.
    pub fn resolve(&self, team_name: &str) -> Option<u8> {
        let lower = collapse(&team_name.to_lowercase());
        if lower.is_empty() {
            return None;
        }

        if let Some(rank) = self.get(&lower) {
            return Some(rank);
        }
        if let Some(rank) = self.get(&normalize(&lower)) {
            return Some(rank);
        }

        // The first two tokens usually carry the school name.
        let base = lower
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ");
        if let Some((_, rank)) = self
            .entries
            .iter()
            .find(|(key, _)| key.contains(&base) || base.contains(key.as_str()))
        {
            return Some(*rank);
        }

        for token in lower.split_whitespace().filter(|t| t.len() > 3) {
            if let Some((_, rank)) = self.entries.iter().find(|(key, _)| key.contains(token)) {
                return Some(*rank);
            }
        }

        None
    }
}

/// Lookup keys for one ranked team: the lowercased display name plus the
/// variants that bridge the feeds' naming conventions.
fn alias_keys(display_name: &str) -> Vec<String> {
    let lower = collapse(&display_name.to_lowercase());
    if lower.is_empty() {
        return Vec::new();
    }

    let mut keys = vec![lower.clone(), normalize(&lower)];

    if lower.contains("university") {
        keys.push(collapse(&lower.replace("university", "u")));
    }
    if lower.contains("college") {
        keys.push(collapse(&lower.replace("college", "")));
    }
    for (pattern, alias) in KNOWN_ALIASES {
        if lower.contains(pattern) {
            keys.push((*alias).to_owned());
        }
    }

    keys.retain(|k| !k.is_empty());
    keys.dedup(); // adjacent dupes only; insert() catches the rest
    keys
}

/// Collapse whitespace runs and trim.
fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a trailing "state" so "Ohio State" and "Ohio" rank identically
/// whichever form a feed uses. Input is assumed lowercased.
fn normalize(lower: &str) -> String {
    collapse(lower.strip_suffix(" state").unwrap_or(lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, rank: u8) -> RankEntry {
        RankEntry {
            team_name: name.to_owned(),
            rank,
        }
    }

    #[test]
    fn every_alias_key_resolves_to_the_canonical_rank() {
        let index = RankingIndex::build(&[
            entry("Ohio State", 2),
            entry("Southern California Trojans", 10),
            entry("Boston College Eagles", 15),
        ]);
        for (key, rank) in &index.entries {
            assert_eq!(
                index.resolve(key),
                Some(*rank),
                "alias key {key:?} should resolve to its own rank"
            );
        }
    }

    #[test]
    fn exact_and_normalized_matches() {
        let index = RankingIndex::build(&[entry("Ohio State", 2)]);
        assert_eq!(index.resolve("ohio state"), Some(2));
        assert_eq!(index.resolve("OHIO STATE"), Some(2));
        assert_eq!(index.resolve("Ohio"), Some(2));
        assert_eq!(index.resolve("Ohio St"), Some(2)); // fuzzy containment
    }

    #[test]
    fn resolve_is_total_on_any_input_and_any_index() {
        let empty = RankingIndex::default();
        assert_eq!(empty.resolve("Ohio State"), None);
        assert_eq!(empty.resolve(""), None);

        let index = RankingIndex::build(&[entry("Ohio State", 2)]);
        assert_eq!(index.resolve(""), None);
        assert_eq!(index.resolve("   "), None);
        assert_eq!(index.resolve("Completely Unrelated XYZ"), None);
    }

    #[test]
    fn university_variant_is_indexed() {
        let index = RankingIndex::build(&[entry("Miami University", 12)]);
        assert_eq!(index.resolve("Miami U"), Some(12));
    }

    #[test]
    fn college_stripped_variant_is_indexed() {
        let index = RankingIndex::build(&[entry("Boston College Eagles", 15)]);
        assert_eq!(index.resolve("Boston Eagles"), Some(15));
    }

    #[test]
    fn hardcoded_aliases_cover_divergent_common_names() {
        let index = RankingIndex::build(&[
            entry("Southern California Trojans", 10),
            entry("Mississippi Rebels", 11),
        ]);
        assert_eq!(index.resolve("USC"), Some(10));
        assert_eq!(index.resolve("Ole Miss"), Some(11));
    }

    #[test]
    fn token_fallback_matches_a_long_token_inside_a_key() {
        let index = RankingIndex::build(&[entry("Mississippi Rebels", 11)]);
        // "fighting" misses, "rebels" lands inside "mississippi rebels".
        assert_eq!(index.resolve("The Fighting Rebels"), Some(11));
    }

    #[test]
    fn fuzzy_matching_accepts_short_base_false_positives() {
        // Documented tradeoff: a two-token base as short as "st" is contained
        // in "ohio state" and matches. Coverage over precision.
        let index = RankingIndex::build(&[entry("Ohio State", 2)]);
        assert_eq!(index.resolve("St"), Some(2));
    }

    #[test]
    fn alias_collisions_keep_the_first_entry() {
        // "Ohio State" normalizes to "ohio", which collides with the exact
        // key of a hypothetical ranked "Ohio".
        let index = RankingIndex::build(&[entry("Ohio State", 2), entry("Ohio", 7)]);
        assert_eq!(index.resolve("Ohio"), Some(2));
        // The colliding key exists exactly once.
        assert_eq!(
            index.entries.iter().filter(|(k, _)| k == "ohio").count(),
            1
        );
    }

    #[test]
    fn empty_poll_builds_an_empty_index() {
        let index = RankingIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
