use std::time::Duration;

use sugam_core::SpeechOutput;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// One queued speech request.
#[derive(Debug, Clone)]
pub struct Utterance {
    pub text: String,
    pub locale_tag: String,
}

/// Lifecycle of an utterance, for hosts that mirror speech progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtteranceEvent {
    Started { text: String },
    Finished { text: String },
    Cancelled { text: String },
}

/// Sends speech requests to the synthesizer task. A new request cancels
/// whatever is currently being spoken, so at most one utterance is active.
#[derive(Clone)]
pub struct SpeechHandle {
    tx: mpsc::UnboundedSender<Utterance>,
}

impl SpeechOutput for SpeechHandle {
    fn speak(&mut self, text: &str, locale_tag: &str) {
        // The task going away just means nobody is listening anymore.
        let _ = self.tx.send(Utterance {
            text: text.to_string(),
            locale_tag: locale_tag.to_string(),
        });
    }
}

/// Spawn the synthesizer task. Returns the request handle and the stream of
/// utterance lifecycle events.
pub fn spawn_synthesizer() -> (SpeechHandle, mpsc::UnboundedReceiver<UtteranceEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    tokio::spawn(run(rx, event_tx));
    (SpeechHandle { tx }, event_rx)
}

async fn run(
    mut requests: mpsc::UnboundedReceiver<Utterance>,
    events: mpsc::UnboundedSender<UtteranceEvent>,
) {
    while let Some(mut current) = requests.recv().await {
        loop {
            tracing::debug!("Speaking [{}]: {}", current.locale_tag, current.text);
            let _ = events.send(UtteranceEvent::Started {
                text: current.text.clone(),
            });
            tokio::select! {
                next = requests.recv() => {
                    let _ = events.send(UtteranceEvent::Cancelled {
                        text: current.text.clone(),
                    });
                    match next {
                        Some(next) => current = next,
                        None => return,
                    }
                }
                () = sleep(utterance_duration(&current.text)) => {
                    let _ = events.send(UtteranceEvent::Finished {
                        text: current.text.clone(),
                    });
                    break;
                }
            }
        }
    }
}

/// Rough per-word pacing for the simulated utterance.
fn utterance_duration(text: &str) -> Duration {
    let words = text.split_whitespace().count().max(1) as u64;
    Duration::from_millis(words * 300)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn next_event(events: &mut mpsc::UnboundedReceiver<UtteranceEvent>) -> UtteranceEvent {
        events.recv().await.expect("synthesizer event stream closed")
    }

    #[tokio::test(start_paused = true)]
    async fn test_utterance_runs_to_completion() {
        let (mut speech, mut events) = spawn_synthesizer();
        speech.speak("Vibration alert triggered.", "en-US");

        assert_eq!(
            next_event(&mut events).await,
            UtteranceEvent::Started {
                text: "Vibration alert triggered.".to_string()
            }
        );
        assert_eq!(
            next_event(&mut events).await,
            UtteranceEvent::Finished {
                text: "Vibration alert triggered.".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_request_cancels_in_flight_utterance() {
        let (mut speech, mut events) = spawn_synthesizer();
        speech.speak("first announcement", "en-US");
        speech.speak("second announcement", "en-US");

        assert_eq!(
            next_event(&mut events).await,
            UtteranceEvent::Started {
                text: "first announcement".to_string()
            }
        );
        assert_eq!(
            next_event(&mut events).await,
            UtteranceEvent::Cancelled {
                text: "first announcement".to_string()
            }
        );
        assert_eq!(
            next_event(&mut events).await,
            UtteranceEvent::Started {
                text: "second announcement".to_string()
            }
        );
        assert_eq!(
            next_event(&mut events).await,
            UtteranceEvent::Finished {
                text: "second announcement".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drains_to_the_latest_request() {
        let (mut speech, mut events) = spawn_synthesizer();
        for text in ["one", "two", "three"] {
            speech.speak(text, "en-US");
        }

        let mut finished = Vec::new();
        let mut cancelled = Vec::new();
        loop {
            match next_event(&mut events).await {
                UtteranceEvent::Finished { text } => {
                    finished.push(text);
                    break;
                }
                UtteranceEvent::Cancelled { text } => cancelled.push(text),
                UtteranceEvent::Started { .. } => {}
            }
        }

        assert_eq!(finished, vec!["three".to_string()]);
        assert_eq!(cancelled, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_pacing_scales_with_word_count() {
        assert_eq!(utterance_duration("one"), Duration::from_millis(300));
        assert_eq!(utterance_duration("three short words"), Duration::from_millis(900));
        assert_eq!(utterance_duration(""), Duration::from_millis(300));
    }
}
