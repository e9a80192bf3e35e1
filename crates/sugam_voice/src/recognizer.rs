use std::sync::{Arc, Mutex};

use sugam_core::VoiceControl;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Events delivered to the host, in session order. A session carries at most
/// one `Result` and always terminates with `Ended`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    Result { session_id: Uuid, transcript: String },
    Ended { session_id: Uuid },
}

/// Session-oriented recognition plumbing. The host opens a session, pushes
/// at most one transcript into it, and receives the terminal event either
/// way. Where the transcript comes from (microphone, typed line) is the
/// host's business.
pub struct Recognizer {
    events: mpsc::UnboundedSender<RecognitionEvent>,
    active: Option<Uuid>,
}

impl Recognizer {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RecognitionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (
            Recognizer {
                events,
                active: None,
            },
            rx,
        )
    }

    /// Begin a recognition session. Starting while one is in progress keeps
    /// the existing session; the UI disables the start affordance while
    /// listening.
    pub fn start(&mut self) -> Uuid {
        if let Some(session_id) = self.active {
            return session_id;
        }
        let session_id = Uuid::new_v4();
        tracing::info!("Recognition session {} started", session_id);
        self.active = Some(session_id);
        session_id
    }

    /// Deliver the transcript for the active session, then end it. Without
    /// an active session the transcript is dropped.
    pub fn submit_transcript(&mut self, transcript: &str) {
        let Some(session_id) = self.active.take() else {
            tracing::warn!("Transcript with no active recognition session dropped");
            return;
        };
        tracing::info!("Recognition session {} result: {}", session_id, transcript);
        let _ = self.events.send(RecognitionEvent::Result {
            session_id,
            transcript: transcript.to_string(),
        });
        let _ = self.events.send(RecognitionEvent::Ended { session_id });
    }

    /// End the active session without a result.
    pub fn stop(&mut self) {
        if let Some(session_id) = self.active.take() {
            tracing::info!("Recognition session {} ended", session_id);
            let _ = self.events.send(RecognitionEvent::Ended { session_id });
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// `VoiceControl` face of a shared recognizer, injected into the coordinator
/// while the host keeps the other handle to feed transcripts.
pub struct RecognizerControl(Arc<Mutex<Recognizer>>);

impl RecognizerControl {
    pub fn new(recognizer: Arc<Mutex<Recognizer>>) -> Self {
        RecognizerControl(recognizer)
    }
}

impl VoiceControl for RecognizerControl {
    fn start(&mut self) {
        self.0.lock().unwrap().start();
    }

    fn stop(&mut self) {
        self.0.lock().unwrap().stop();
    }
}
