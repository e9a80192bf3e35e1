//! Interfaces to the host-provided feedback services.
//!
//! The coordinator only ever talks to these traits and never probes its
//! environment; a host that lacks a capability injects `None` for it.

/// Speech synthesis. Implementations cancel any in-flight utterance before
/// speaking, so at most one utterance is ever active.
pub trait SpeechOutput: Send {
    fn speak(&mut self, text: &str, locale_tag: &str);
}

/// Haptic feedback. Pattern entries are millisecond durations, alternating
/// vibration and pause.
pub trait HapticOutput: Send {
    fn vibrate(&mut self, pattern: &[u32]);
}

/// Voice recognition control. Recognized transcripts travel back through the
/// host, which hands them to `Coordinator::voice_result`.
pub trait VoiceControl: Send {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Assistive-technology announcement sink. Announcements are polite: they do
/// not interrupt whatever the assistive tooling is currently reading.
pub trait LiveRegion: Send {
    fn announce(&mut self, text: &str);
}

/// The collaborators injected into the coordinator. `None` fields model
/// hosts without the capability.
pub struct Feedback {
    /// Absent speech drops synthesis requests silently; accepted as
    /// non-fatal.
    pub speech: Option<Box<dyn SpeechOutput>>,
    /// Absent haptics turn vibration requests into a spoken non-support
    /// message.
    pub haptics: Option<Box<dyn HapticOutput>>,
    /// Absent recognition turns a voice-search start into a spoken
    /// non-support message.
    pub recognition: Option<Box<dyn VoiceControl>>,
    pub live_region: Box<dyn LiveRegion>,
}

impl Feedback {
    /// No optional collaborators and a discarded live region.
    pub fn silent() -> Self {
        Feedback {
            speech: None,
            haptics: None,
            recognition: None,
            live_region: Box::new(SilentLiveRegion),
        }
    }
}

/// Discards announcements; for hosts without an assistive sink.
pub struct SilentLiveRegion;

impl LiveRegion for SilentLiveRegion {
    fn announce(&mut self, _text: &str) {}
}
