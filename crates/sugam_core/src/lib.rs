//! Sugam core
//!
//! The station directory and the selection/announcement coordinator behind
//! the accessible transit-information kiosk. Everything here is synchronous
//! and host-agnostic; speech, haptics and assistive output are reached
//! through the injected capability traits.

mod capabilities;
mod coordinator;
mod directory;
mod phrase;
mod station;
mod view;

pub use crate::capabilities::{
    Feedback, HapticOutput, LiveRegion, SilentLiveRegion, SpeechOutput, VoiceControl,
};
pub use crate::coordinator::{ALERT_PATTERN, Coordinator, VisualMode};
pub use crate::directory::Directory;
pub use crate::station::{DirectoryConfig, Lang, Station};
pub use crate::view::{ListView, StationCard};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Station id {id} appears more than once in the directory")]
    DuplicateStationId { id: u32 },
    #[error("Station {id} has an empty display name")]
    EmptyStationName { id: u32 },
}
