//! Tokio-backed implementations of the kiosk's feedback collaborators:
//! speech synthesis with a single active utterance, session-oriented voice
//! recognition plumbing, and haptic pattern playback.

mod haptics;
mod recognizer;
mod synthesizer;

pub use crate::haptics::{HapticMotor, pattern_duration};
pub use crate::recognizer::{RecognitionEvent, Recognizer, RecognizerControl};
pub use crate::synthesizer::{SpeechHandle, Utterance, UtteranceEvent, spawn_synthesizer};
