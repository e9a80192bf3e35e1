use std::collections::HashSet;

use crate::DirectoryError;
use crate::station::{DirectoryConfig, Station};

/// Ordered, immutable station directory, fixed at startup. Order is display
/// order.
#[derive(Debug, Clone)]
pub struct Directory {
    stations: Vec<Station>,
}

impl Directory {
    pub fn new(stations: Vec<Station>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station.id) {
                return Err(DirectoryError::DuplicateStationId { id: station.id });
            }
            if station.name_en.is_empty()
                || station.name_hi.is_empty()
                || station.name_mr.is_empty()
            {
                return Err(DirectoryError::EmptyStationName { id: station.id });
            }
        }
        Ok(Directory { stations })
    }

    pub fn from_config(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        Self::new(config.stations)
    }

    /// Stations whose English name contains the query ignoring case, or
    /// whose Hindi or Marathi name contains it exactly. An empty query
    /// matches everything, preserving directory order.
    ///
    /// No match is a normal outcome; the caller renders its empty-state
    /// placeholder.
    pub fn filter(&self, query: &str) -> Vec<&Station> {
        let needle = query.to_lowercase();
        self.stations
            .iter()
            .filter(|station| {
                station.name_en.to_lowercase().contains(&needle)
                    || station.name_hi.contains(query)
                    || station.name_mr.contains(query)
            })
            .collect()
    }

    /// Lookup by unique id. A miss is a normal outcome the caller handles.
    pub fn find_by_id(&self, id: u32) -> Option<&Station> {
        self.stations.iter().find(|station| station.id == id)
    }

    /// First entry in display order; the announce-next fallback.
    pub fn first(&self) -> Option<&Station> {
        self.stations.first()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::Lang;

    fn directory() -> Directory {
        Directory::from_config(DirectoryConfig::builtin()).unwrap()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let directory = directory();
        let all = directory.filter("");
        let ids: Vec<u32> = all.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_latin_filter_ignores_case() {
        let directory = directory();
        for query in ["andheri", "ANDHERI", "Andheri"] {
            let hits = directory.filter(query);
            assert_eq!(hits.len(), 1, "query {query:?}");
            assert_eq!(hits[0].id, 4);
        }
    }

    #[test]
    fn test_devanagari_filter_is_exact_substring() {
        let directory = directory();
        let hits = directory.filter("मिर");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
        assert_eq!(hits[0].name_hi, "मिरगांव");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let directory = directory();
        assert!(directory.filter("churchgate").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let directory = directory();
        assert_eq!(directory.find_by_id(2).unwrap().name_en, "Kashigoan");
        assert!(directory.find_by_id(99).is_none());
    }

    #[test]
    fn test_first_follows_display_order() {
        let directory = directory();
        assert_eq!(directory.first().unwrap().name_en, "Dahisar East");
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut config = DirectoryConfig::builtin();
        config.stations[3].id = 1;
        match Directory::from_config(config) {
            Err(DirectoryError::DuplicateStationId { id }) => assert_eq!(id, 1),
            other => panic!("Expected DuplicateStationId, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut config = DirectoryConfig::builtin();
        config.stations[1].name_mr = String::new();
        match Directory::from_config(config) {
            Err(DirectoryError::EmptyStationName { id }) => assert_eq!(id, 2),
            other => panic!("Expected EmptyStationName, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_directory_is_valid() {
        let directory = Directory::new(Vec::new()).unwrap();
        assert!(directory.first().is_none());
        assert!(directory.filter("").is_empty());
    }

    #[test]
    fn test_fallback_language_resolves_to_marathi() {
        let directory = directory();
        let station = directory.find_by_id(1).unwrap();
        assert_eq!(station.display_name(Lang::from_tag("de")), station.name_mr);
    }
}
