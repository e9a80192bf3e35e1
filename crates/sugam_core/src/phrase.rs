//! Announcement sentences.
//!
//! Station names follow the active language; the sentence scaffolding stays
//! English except for the language confirmations, which are spoken in the
//! language they confirm.

use crate::coordinator::VisualMode;
use crate::station::{Lang, Station};

pub(crate) const NO_SELECTION: &str = "No station selected. Please select a station first.";
pub(crate) const VIBRATION_TRIGGERED: &str = "Vibration alert triggered.";
pub(crate) const VIBRATION_UNSUPPORTED: &str = "Vibration not supported on this device.";
pub(crate) const RECOGNITION_UNSUPPORTED: &str =
    "Sorry, voice recognition is not supported on this device.";

pub(crate) fn selected(station: &Station, lang: Lang) -> String {
    format!(
        "{} selected. Next arrival {} on platform {}.",
        station.display_name(lang),
        station.next_arrive,
        station.platform
    )
}

pub(crate) fn next_train(station: &Station, lang: Lang) -> String {
    format!(
        "{}. Next train arriving in {} on platform {}. Status {}.",
        station.display_name(lang),
        station.next_arrive,
        station.platform,
        station.status
    )
}

pub(crate) fn navigation_started(station: &Station, lang: Lang) -> String {
    format!(
        "Starting navigation to {}. Walk straight for 200 metres. Turn right at the pharmacy. Platform is on your left.",
        station.display_name(lang)
    )
}

pub(crate) fn navigation_live(station: &Station, lang: Lang) -> String {
    format!("Navigation to {} started.", station.display_name(lang))
}

pub(crate) fn searching_for(transcript: &str) -> String {
    format!("Searching for {transcript}")
}

pub(crate) fn language_confirmation(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Language set to English",
        Lang::Hi => "भाषा हिन्दी चुनी गई",
        Lang::Mr => "भाषा मराठी निवडली",
    }
}

pub(crate) fn visual_mode(mode: VisualMode, enabled: bool) -> &'static str {
    match (mode, enabled) {
        (VisualMode::Contrast, true) => "High contrast enabled",
        (VisualMode::Contrast, false) => "High contrast disabled",
        (VisualMode::LargeText, true) => "Large text enabled",
        (VisualMode::LargeText, false) => "Large text disabled",
    }
}
