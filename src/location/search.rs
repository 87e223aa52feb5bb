//! Ranked autocomplete search.
//!
//! A pure function of `(query, store)`: no caching, no debouncing, no I/O.
//! Keystroke coalescing belongs to the caller.

use std::cmp::Ordering;

use super::{Location, LocationStore};

/// Queries shorter than this (after trimming) return nothing.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of results returned.
pub const RESULT_LIMIT: usize = 10;

/// Search thresholds.
///
/// Values may only tighten the defaults: a longer minimum query or a
/// smaller result cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Minimum trimmed query length, in characters. Never below [`MIN_QUERY_LEN`].
    pub min_query_len: usize,
    /// Maximum number of results. Never above [`RESULT_LIMIT`].
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            limit: RESULT_LIMIT,
        }
    }
}

/// Case-fold `text` for name matching.
///
/// `to_lowercase` plus the full-folding expansions that matter for German and
/// Greek names: `ß` and `ẞ` fold to `ss`, final sigma folds to `σ`.
pub(super) fn fold_case(text: &str) -> String {
    let lower = text.to_lowercase();
    if !lower.contains(['ß', 'ς']) {
        return lower;
    }
    lower.replace('ß', "ss").replace('ς', "σ")
}

/// Why a candidate matched, ordered from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NameMatch {
    Exact,
    Prefix,
    Other,
}

struct Candidate<'a> {
    location: &'a Location,
    name_match: NameMatch,
}

impl Candidate<'_> {
    /// Exact name, then name prefix, then priority, then population.
    fn rank(&self, other: &Self) -> Ordering {
        self.name_match
            .cmp(&other.name_match)
            .then_with(|| {
                other
                    .location
                    .priority_or_zero()
                    .total_cmp(&self.location.priority_or_zero())
            })
            .then_with(|| {
                other
                    .location
                    .population_or_zero()
                    .cmp(&self.location.population_or_zero())
            })
    }
}

/// Maps a free-text query to a ranked, capped list of locations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchRanker {
    options: SearchOptions,
}

impl SearchRanker {
    /// Create a ranker; options looser than the defaults are clamped to them.
    pub const fn new(options: SearchOptions) -> Self {
        let min_query_len = if options.min_query_len < MIN_QUERY_LEN {
            MIN_QUERY_LEN
        } else {
            options.min_query_len
        };
        let limit = if options.limit > RESULT_LIMIT {
            RESULT_LIMIT
        } else {
            options.limit
        };
        Self {
            options: SearchOptions {
                min_query_len,
                limit,
            },
        }
    }

    #[inline]
    pub const fn options(&self) -> SearchOptions {
        self.options
    }

    /// Rank every location matching `query`.
    ///
    /// A location matches when its case-folded name contains the case-folded
    /// query, or when one of its postal codes starts with the query as typed.
    /// Ties after all ranking rules keep dataset order.
    pub fn search<'a>(&self, query: &str, store: &'a LocationStore) -> Vec<&'a Location> {
        // Surrounding whitespace is the only normalization postal codes see;
        // case and diacritics are left alone.
        let query = query.trim();
        if query.chars().count() < self.options.min_query_len {
            return Vec::new();
        }
        let needle = fold_case(query);

        let mut candidates: Vec<Candidate<'a>> = store
            .iter()
            .enumerate()
            .filter_map(|(pos, location)| {
                let key = store.search_key(pos);
                let name_hit = key.contains(&needle);
                let postal_hit = location
                    .postal_codes
                    .iter()
                    .any(|code| code.starts_with(query));
                if !name_hit && !postal_hit {
                    return None;
                }
                let name_match = if key == needle {
                    NameMatch::Exact
                } else if key.starts_with(&needle) {
                    NameMatch::Prefix
                } else {
                    NameMatch::Other
                };
                Some(Candidate {
                    location,
                    name_match,
                })
            })
            .collect();

        // `sort_by` is stable, which keeps dataset order for full ties.
        candidates.sort_by(Candidate::rank);
        candidates.truncate(self.options.limit);
        candidates.into_iter().map(|c| c.location).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::store::tests::{berlin, irregular};
    use crate::location::LocationKind;

    fn search(query: &str, store: &LocationStore) -> Vec<String> {
        SearchRanker::default()
            .search(query, store)
            .into_iter()
            .map(|l| l.slug.clone())
            .collect()
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let store = LocationStore::build(berlin()).unwrap();
        assert!(search("", &store).is_empty());
        assert!(search("b", &store).is_empty());
        assert!(search("  b  ", &store).is_empty());
        assert!(search("ü", &store).is_empty());
    }

    #[test]
    fn test_exact_match_first() {
        let store = LocationStore::build(berlin()).unwrap();
        assert_eq!(search("Berlin", &store)[0], "berlin");
    }

    #[test]
    fn test_case_insensitive() {
        let store = LocationStore::build(irregular()).unwrap();
        for (a, b) in [("Berlin", "berlin"), ("MÜNCHEN", "münchen"), ("eims", "EIMS")] {
            assert_eq!(search(a, &store), search(b, &store));
        }
        let store = LocationStore::build(berlin()).unwrap();
        assert_eq!(search("Berlin", &store), search("berlin", &store));
    }

    #[test]
    fn test_postal_code_prefix() {
        let store = LocationStore::build(berlin()).unwrap();
        assert_eq!(search("101", &store), vec!["berlin-mitte"]);
        assert_eq!(search("  101 ", &store), vec!["berlin-mitte"]);
        assert!(search("115", &store).is_empty());
    }

    #[test]
    fn test_postal_code_matched_as_typed() {
        let records = vec![
            Location::new("wien-innere-stadt", "Innere Stadt", LocationKind::CityDistrict)
                .with_postal_codes(["A-1010"]),
        ];
        let store = LocationStore::build(records).unwrap();
        assert_eq!(search("A-10", &store), vec!["wien-innere-stadt"]);
        assert!(search("a-10", &store).is_empty());
    }

    #[test]
    fn test_sharp_s_folds_to_ss() {
        let records = vec![
            Location::new("hauptstrasse", "Hauptstraße", LocationKind::Neighborhood),
            Location::new("gross-gerau", "Groß-Gerau", LocationKind::County),
        ];
        let store = LocationStore::build(records).unwrap();
        assert_eq!(search("STRASSE", &store), vec!["hauptstrasse"]);
        assert_eq!(search("straße", &store), vec!["hauptstrasse"]);
        assert_eq!(search("GROSS", &store), vec!["gross-gerau"]);
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("Straße"), "strasse");
        assert_eq!(fold_case("GROẞ"), "gross");
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("Köln"), "köln");
    }

    #[test]
    fn test_prefix_beats_priority() {
        let records = vec![
            Location::new("neu-ulm", "Neu-Ulm", LocationKind::County)
                .with_priority(9.0)
                .with_population(60_000),
            Location::new("ulm", "Ulm", LocationKind::IndependentCity),
            Location::new("ulmen", "Ulmen", LocationKind::Municipality),
        ];
        let store = LocationStore::build(records).unwrap();
        assert_eq!(search("ulm", &store), vec!["ulm", "ulmen", "neu-ulm"]);

        let store = LocationStore::build(irregular()).unwrap();
        assert_eq!(search("münchen", &store), vec!["muenchen", "landkreis-muenchen"]);
    }

    #[test]
    fn test_priority_then_population() {
        let records = vec![
            Location::new("a-dorf", "Adorf", LocationKind::Municipality).with_population(100),
            Location::new("b-dorf", "Bdorf", LocationKind::Municipality).with_population(900),
            Location::new("c-dorf", "Cdorf", LocationKind::Municipality)
                .with_population(10)
                .with_priority(1.0),
            Location::new("d-dorf", "Ddorf", LocationKind::Municipality),
        ];
        let store = LocationStore::build(records).unwrap();
        assert_eq!(search("dorf", &store), vec!["c-dorf", "b-dorf", "a-dorf", "d-dorf"]);
    }

    #[test]
    fn test_full_ties_keep_dataset_order() {
        let records = vec![
            Location::new("ost", "Neustadt Ost", LocationKind::CityDistrict),
            Location::new("west", "Neustadt West", LocationKind::CityDistrict),
            Location::new("nord", "Neustadt Nord", LocationKind::CityDistrict),
        ];
        let store = LocationStore::build(records).unwrap();
        assert_eq!(search("neustadt", &store), vec!["ost", "west", "nord"]);
    }

    #[test]
    fn test_results_are_capped() {
        let records: Vec<_> = (0..25)
            .map(|i| Location::new(format!("feld-{i}"), format!("Feld {i}"), LocationKind::Neighborhood))
            .collect();
        let store = LocationStore::build(records).unwrap();
        assert_eq!(search("feld", &store).len(), RESULT_LIMIT);

        let ranker = SearchRanker::new(SearchOptions {
            min_query_len: 2,
            limit: 3,
        });
        assert_eq!(ranker.search("feld", &store).len(), 3);
    }

    #[test]
    fn test_looser_options_are_clamped() {
        let records: Vec<_> = (0..25)
            .map(|i| Location::new(format!("feld-{i}"), format!("Feld {i}"), LocationKind::Neighborhood))
            .collect();
        let store = LocationStore::build(records).unwrap();
        let ranker = SearchRanker::new(SearchOptions {
            min_query_len: 1,
            limit: 50,
        });

        assert_eq!(ranker.options(), SearchOptions::default());
        assert_eq!(ranker.search("feld", &store).len(), RESULT_LIMIT);
        assert!(ranker.search("f", &store).is_empty());
    }

    #[test]
    fn test_no_match() {
        let store = LocationStore::build(irregular()).unwrap();
        assert!(search("xyz", &store).is_empty());
    }

    #[test]
    fn test_same_input_same_output() {
        let store = LocationStore::build(irregular()).unwrap();
        assert_eq!(search("a", &store), search("a", &store));
        assert_eq!(search("er", &store), search("er", &store));
    }
}
