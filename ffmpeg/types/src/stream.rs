/*!
    Stream information types.
*/

use std::time::Duration;

use crate::{MediaType, Rational};

/**
    Read-only description of one container stream.
*/
#[derive(Clone, Debug, PartialEq)]
pub struct StreamDescriptor {
    /// Position of the stream in the container, as referenced by packets.
    pub index: usize,
    pub media_type: MediaType,
    /// Codec name as reported by the media library (e.g. "h264").
    pub codec_name: String,
    /// Average frame rate (`0/0` or `0/1` when unknown).
    pub avg_frame_rate: Rational,
    /// Frame width in pixels (0 for non-video streams or when unknown).
    pub width: u32,
    /// Frame height in pixels (0 for non-video streams or when unknown).
    pub height: u32,
}

impl StreamDescriptor {
    /**
        Returns the nominal duration of one frame, derived from the average
        frame rate.
    */
    pub fn frame_interval(&self) -> Option<Duration> {
        self.avg_frame_rate.frame_interval()
    }
}

/**
    Combined information about an opened media source.
*/
#[derive(Clone, Debug, Default)]
pub struct MediaInfo {
    /// Name of the container format (e.g. "mov,mp4,m4a,3gp,3g2,mj2").
    pub format_name: String,
    /// Total duration of the media (may be unavailable).
    pub duration: Option<Duration>,
    /// Every stream found in the container, in container order.
    pub streams: Vec<StreamDescriptor>,
}
