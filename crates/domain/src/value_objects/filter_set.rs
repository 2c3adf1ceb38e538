//! Case-insensitive allow-lists for narrowing down departures

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::Departure;

/// A case-insensitive allow-list of strings
///
/// An empty set accepts every value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    entries: BTreeSet<String>,
}

impl FilterSet {
    /// Parse a comma-separated list; entries are trimmed and blank entries dropped
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.split(',').collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the set is empty or `value` equals one of the entries ignoring case
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.is_empty() || self.entries.contains(&fold(value))
    }
}

impl<'a> FromIterator<&'a str> for FilterSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(fold)
            .collect();
        Self { entries }
    }
}

fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// The three independent filters applied to a departure list, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureFilter {
    /// Matched against the line's product category
    pub mode: FilterSet,
    /// Matched against the direction text
    pub destination: FilterSet,
    /// Matched against the line name
    pub line: FilterSet,
}

impl DepartureFilter {
    /// Build a filter from the three comma-separated option strings
    #[must_use]
    pub fn from_options(mode: &str, destination: &str, line: &str) -> Self {
        Self {
            mode: FilterSet::parse(mode),
            destination: FilterSet::parse(destination),
            line: FilterSet::parse(line),
        }
    }

    /// Whether a departure passes every filter
    ///
    /// Expects a departure whose fields are already trimmed.
    #[must_use]
    pub fn accepts(&self, departure: &Departure) -> bool {
        self.mode.matches(&departure.line.product)
            && self.destination.matches(&departure.direction)
            && self.line.matches(&departure.line.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departure(product: &str, direction: &str, line: &str) -> Departure {
        let mut dep = Departure {
            direction: direction.to_string(),
            ..Departure::default()
        };
        dep.line.product = product.to_string();
        dep.line.name = line.to_string();
        dep
    }

    #[test]
    fn empty_string_yields_empty_set() {
        assert!(FilterSet::parse("").is_empty());
        assert!(FilterSet::parse(" , ,").is_empty());
    }

    #[test]
    fn entries_are_trimmed() {
        let set = FilterSet::parse(" bus , tram ");
        assert_eq!(set.len(), 2);
        assert!(set.matches("bus"));
        assert!(set.matches("tram"));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(FilterSet::parse("S1,s1,S1 ").len(), 1);
    }

    #[test]
    fn matching_ignores_case() {
        let set = FilterSet::parse("Suburban");
        assert!(set.matches("SUBURBAN"));
        assert!(set.matches("suburban"));
        assert!(!set.matches("subway"));
    }

    #[test]
    fn matching_is_whole_value() {
        let set = FilterSet::parse("S1");
        assert!(!set.matches("S15"));
    }

    #[test]
    fn empty_set_matches_everything() {
        let set = FilterSet::default();
        assert!(set.matches(""));
        assert!(set.matches("anything"));
    }

    #[test]
    fn filters_combine_with_and() {
        let filter = DepartureFilter::from_options("subway", "", "U2");
        assert!(filter.accepts(&departure("subway", "Pankow", "U2")));
        assert!(!filter.accepts(&departure("subway", "Pankow", "U8")));
        assert!(!filter.accepts(&departure("bus", "Pankow", "U2")));
    }

    #[test]
    fn destination_filter_accepts_any_listed_entry() {
        let filter = DepartureFilter::from_options("", "Potsdam Hbf, Pankow", "");
        assert!(filter.accepts(&departure("suburban", "potsdam hbf", "S7")));
        assert!(filter.accepts(&departure("subway", "PANKOW", "U2")));
        assert!(!filter.accepts(&departure("subway", "Ruhleben", "U2")));
    }

    #[test]
    fn default_filter_accepts_everything() {
        assert!(DepartureFilter::default().accepts(&departure("", "", "")));
    }
}
