use std::fmt;
use std::time::Duration;

use super::pacer::PaceOutcome;

/**
    Counters collected over one run of the playback loop.
*/
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    pub stream_index: usize,
    pub frame_interval: Option<Duration>,
    pub packets_read: u64,
    pub packets_discarded: u64,
    /// Packets handed to the decoder.
    pub packets_sent: u64,
    pub send_failures: u64,
    /// Frames received while pumping packets.
    pub frames_decoded: u64,
    /// Frames received while draining the decoder at end of stream.
    pub frames_drained: u64,
    /// Receives that found the decoder still waiting for input.
    pub receive_pending: u64,
    pub receive_failures: u64,
    /// Frames whose decoding took the whole interval or longer.
    pub late_frames: u64,
    /// Sum of all shortfalls, slept or only measured.
    pub total_shortfall: Duration,
    pub stopped_early: bool,
}

impl PlaybackReport {
    pub fn total_frames(&self) -> u64 {
        self.frames_decoded + self.frames_drained
    }

    pub(crate) fn record_pace(&mut self, outcome: &PaceOutcome) {
        match outcome.shortfall {
            Some(delay) => self.total_shortfall += delay,
            None if self.frame_interval.is_some() => self.late_frames += 1,
            None => {}
        }
    }
}

impl fmt::Display for PlaybackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames ({} drained) from {} packets, {} discarded, {} send failures, \
             {} receive failures, {} late, {:?} paced",
            self.total_frames(),
            self.frames_drained,
            self.packets_read,
            self.packets_discarded,
            self.send_failures,
            self.receive_failures,
            self.late_frames,
            self.total_shortfall,
        )
    }
}
