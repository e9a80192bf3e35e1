//! Terminal painting of the list view, plus the live-region sink the screen
//! shows under the list.

use std::fmt::Write;
use std::sync::{Arc, Mutex};

use sugam_core::{ListView, LiveRegion};

/// Live-region sink backed by a shared line the painter prints under the
/// station list, standing in for an `aria-live="polite"` element.
#[derive(Clone, Default)]
pub struct ScreenLiveRegion(Arc<Mutex<String>>);

impl ScreenLiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.0.lock().unwrap().clone()
    }
}

impl LiveRegion for ScreenLiveRegion {
    fn announce(&mut self, text: &str) {
        *self.0.lock().unwrap() = text.to_string();
    }
}

/// Render the view to a block of text. Pure formatting; the caller prints.
pub fn paint(view: &ListView, live_text: &str) -> String {
    let mut out = String::new();

    let mut flags = vec![format!("lang {}", view.lang.tag())];
    if view.contrast {
        flags.push("high contrast".to_string());
    }
    if view.large_text {
        flags.push("large text".to_string());
    }
    if view.listening {
        flags.push("listening...".to_string());
    }
    let _ = writeln!(out, "── Stations ── [{}]", flags.join(" | "));

    if view.stations.is_empty() {
        let _ = writeln!(out, "  No stations found");
    }
    for card in &view.stations {
        let marker = if card.selected { ">" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {:>2}  {}  (next {}, platform {})",
            card.id, card.title, card.next_arrive, card.platform
        );
    }

    if !live_text.is_empty() {
        let _ = writeln!(out, "♿ {live_text}");
    }
    out
}
