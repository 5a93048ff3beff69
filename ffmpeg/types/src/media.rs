/*!
    Packet and frame metadata.

    The payload buffers themselves stay inside the FFmpeg-backed crates and
    are reused between reads; these are the copyable views handed across
    crate boundaries.
*/

use crate::PixelFormat;

/**
    A presentation or decode timestamp, in stream time base units.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pts(pub i64);

/**
    Metadata for one compressed packet read from a container.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacketInfo {
    /// Index of the container stream the packet belongs to.
    pub stream_index: usize,
    pub pts: Option<Pts>,
    pub dts: Option<Pts>,
    /// Payload size in bytes.
    pub size: usize,
    pub is_keyframe: bool,
}

/**
    Metadata for one decoded video frame.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameInfo {
    pub width: u32,
    pub height: u32,
    pub pixel_format: PixelFormat,
    pub pts: Option<Pts>,
    pub is_keyframe: bool,
}

