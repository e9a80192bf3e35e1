use std::time::Duration;

use sugam_core::HapticOutput;
use tokio::time::sleep;

/// Plays vibrate/pause patterns. Segments alternate vibration and pause,
/// starting with vibration; playback happens on its own task so the UI
/// thread never waits on the motor.
#[derive(Debug, Clone, Copy, Default)]
pub struct HapticMotor;

impl HapticOutput for HapticMotor {
    fn vibrate(&mut self, pattern: &[u32]) {
        tokio::spawn(play(pattern.to_vec()));
    }
}

async fn play(pattern: Vec<u32>) {
    for (segment, ms) in pattern.iter().enumerate() {
        if segment % 2 == 0 {
            tracing::info!("Vibrating for {} ms", ms);
        } else {
            tracing::debug!("Vibration pause for {} ms", ms);
        }
        sleep(Duration::from_millis(u64::from(*ms))).await;
    }
}

/// Total playback time of a pattern.
pub fn pattern_duration(pattern: &[u32]) -> Duration {
    Duration::from_millis(pattern.iter().map(|ms| u64::from(*ms)).sum())
}
