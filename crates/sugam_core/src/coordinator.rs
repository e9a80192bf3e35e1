use crate::capabilities::Feedback;
use crate::directory::Directory;
use crate::phrase;
use crate::station::Lang;
use crate::view::{ListView, StationCard};

/// The two independent visual accessibility modes. Both may be active at
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualMode {
    Contrast,
    LargeText,
}

/// Vibrate / pause / vibrate, in milliseconds.
pub const ALERT_PATTERN: &[u32] = &[200, 100, 200];

/// Owns the filter, selection, language and visual-mode state, and turns
/// user intents into announcements dispatched to the injected feedback
/// collaborators.
///
/// Every operation runs to completion on the caller's thread; the genuinely
/// asynchronous work (synthesis, recognition) happens inside the
/// collaborators, which are never awaited.
pub struct Coordinator {
    directory: Directory,
    feedback: Feedback,
    query: String,
    /// Set on every successful selection, never cleared afterwards.
    selected: Option<u32>,
    lang: Lang,
    contrast: bool,
    large_text: bool,
    listening: bool,
}

impl Coordinator {
    pub fn new(directory: Directory, feedback: Feedback) -> Self {
        Coordinator {
            directory,
            feedback,
            query: String::new(),
            selected: None,
            lang: Lang::default(),
            contrast: false,
            large_text: false,
            listening: false,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Input-driven filter; the rendered list follows on the next `view`.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select a station by id and announce it on both channels. Ids not in
    /// the directory are a caller contract violation (the UI only hands out
    /// rendered ids) and are ignored without any state change.
    pub fn select_station(&mut self, id: u32) {
        let Some(station) = self.directory.find_by_id(id) else {
            tracing::warn!("Selection requested for unknown station id {}", id);
            return;
        };
        let text = phrase::selected(station, self.lang);
        tracing::info!("Station {} selected", id);
        self.selected = Some(id);
        self.announce(&text);
    }

    /// Announce the selected station, or the first directory entry when
    /// nothing has been selected yet (designed first-use fallback). An empty
    /// directory leaves nothing to announce.
    pub fn announce_next(&mut self) {
        let station = self
            .selected
            .and_then(|id| self.directory.find_by_id(id))
            .or_else(|| self.directory.first());
        let Some(station) = station else { return };
        let text = phrase::next_train(station, self.lang);
        self.announce(&text);
    }

    /// Speak the fixed itinerary for the selected station. Without a
    /// selection this speaks a guidance request instead; a user-recoverable
    /// condition, not a fault.
    pub fn request_navigation(&mut self) {
        let Some(station) = self.selected.and_then(|id| self.directory.find_by_id(id)) else {
            self.announce(phrase::NO_SELECTION);
            return;
        };
        let spoken = phrase::navigation_started(station, self.lang);
        let live = phrase::navigation_live(station, self.lang);
        tracing::info!("Navigation guidance for station {}", station.id);
        self.speak(&spoken);
        self.feedback.live_region.announce(&live);
    }

    /// Switch the display language and confirm it, spoken in the new
    /// language's own locale.
    pub fn set_language(&mut self, lang: Lang) {
        self.lang = lang;
        tracing::info!("Language set to {}", lang.tag());
        self.announce(phrase::language_confirmation(lang));
    }

    /// Flip one visual mode and confirm the new state. The flags are
    /// mirrored into the view model for assistive tooling.
    pub fn toggle_visual_mode(&mut self, mode: VisualMode) {
        let enabled = match mode {
            VisualMode::Contrast => {
                self.contrast = !self.contrast;
                self.contrast
            }
            VisualMode::LargeText => {
                self.large_text = !self.large_text;
                self.large_text
            }
        };
        self.announce(phrase::visual_mode(mode, enabled));
    }

    /// Fire the haptic alert pattern, or announce non-support.
    pub fn trigger_vibration(&mut self) {
        if let Some(haptics) = self.feedback.haptics.as_mut() {
            haptics.vibrate(ALERT_PATTERN);
            self.announce(phrase::VIBRATION_TRIGGERED);
        } else {
            self.announce(phrase::VIBRATION_UNSUPPORTED);
        }
    }

    /// Ask the recognition collaborator to listen, or announce non-support.
    /// Already listening is a no-op; the host disables the affordance.
    pub fn start_voice_search(&mut self) {
        if self.listening {
            return;
        }
        match self.feedback.recognition.as_mut() {
            Some(recognition) => {
                recognition.start();
                self.listening = true;
            }
            None => self.announce(phrase::RECOGNITION_UNSUPPORTED),
        }
    }

    pub fn stop_voice_search(&mut self) {
        if let Some(recognition) = self.feedback.recognition.as_mut() {
            recognition.stop();
        }
        self.listening = false;
    }

    /// A transcript delivered by the recognition collaborator: it becomes
    /// the filter query and is echoed back.
    pub fn voice_result(&mut self, transcript: &str) {
        self.query = transcript.to_string();
        self.announce(&phrase::searching_for(transcript));
    }

    /// Terminal event of a recognition session; resets the listening
    /// affordance.
    pub fn voice_ended(&mut self) {
        self.listening = false;
    }

    /// Project the current state for the host to paint.
    pub fn view(&self) -> ListView {
        let stations = self
            .directory
            .filter(&self.query)
            .into_iter()
            .map(|station| StationCard::new(station, self.lang, self.selected == Some(station.id)))
            .collect();
        ListView {
            stations,
            lang: self.lang,
            contrast: self.contrast,
            large_text: self.large_text,
            listening: self.listening,
        }
    }

    /// Emit to the speech collaborator and the live region simultaneously.
    fn announce(&mut self, text: &str) {
        self.speak(text);
        self.feedback.live_region.announce(text);
    }

    fn speak(&mut self, text: &str) {
        if let Some(speech) = self.feedback.speech.as_mut() {
            speech.speak(text, self.lang.locale_tag());
        }
    }
}
