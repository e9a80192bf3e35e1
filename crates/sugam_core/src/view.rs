use serde::Serialize;

use crate::station::{Lang, Station};

/// One station row for the host to paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationCard {
    pub id: u32,
    /// Display name resolved for the current language.
    pub title: String,
    pub next_arrive: String,
    pub platform: u32,
    pub selected: bool,
    /// Assistive label read by screen readers.
    pub label: String,
}

impl StationCard {
    pub(crate) fn new(station: &Station, lang: Lang, selected: bool) -> Self {
        StationCard {
            id: station.id,
            title: station.display_name(lang).to_string(),
            next_arrive: station.next_arrive.clone(),
            platform: station.platform,
            selected,
            label: format!(
                "{} station. Next arrival {}. Platform {}",
                station.name_en, station.next_arrive, station.platform
            ),
        }
    }
}

/// Pure projection of the coordinator state. The host layer is responsible
/// for diffing and painting. An empty `stations` list means the host shows
/// its "No stations found" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub stations: Vec<StationCard>,
    pub lang: Lang,
    pub contrast: bool,
    pub large_text: bool,
    pub listening: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::DirectoryConfig;

    #[test]
    fn test_card_carries_assistive_label() {
        let config = DirectoryConfig::builtin();
        let card = StationCard::new(&config.stations[0], Lang::En, false);
        assert_eq!(
            card.label,
            "Dahisar East station. Next arrival 2 min. Platform 1"
        );
    }

    #[test]
    fn test_card_title_follows_language() {
        let config = DirectoryConfig::builtin();
        let card = StationCard::new(&config.stations[0], Lang::Hi, true);
        assert_eq!(card.title, "दहिसर पूर्व");
        assert!(card.selected);
        // The assistive label keeps the Latin name regardless of language.
        assert!(card.label.starts_with("Dahisar East"));
    }
}
