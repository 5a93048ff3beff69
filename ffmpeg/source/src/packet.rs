/*!
    Reusable compressed packet buffer.
*/

use ffmpeg_next::{ffi, packet::Mut as PacketMut};

use ffmpeg_types::PacketInfo;

use crate::convert::pts_from_ffmpeg;

/**
    A packet buffer that is allocated once and refilled by every
    [`Source::read_packet`](crate::Source::read_packet) call.

    Call [`release`](Self::release) after each use: it drops the reference
    to the payload but keeps the packet itself, so the next read does not
    allocate a new one. The packet is freed on drop.
*/
pub struct PacketBuffer {
    packet: ffmpeg_next::Packet,
}

impl PacketBuffer {
    pub fn new() -> Self {
        Self {
            packet: ffmpeg_next::Packet::empty(),
        }
    }

    /**
        Describe the packet currently held in the buffer.
    */
    pub fn info(&self) -> PacketInfo {
        PacketInfo {
            stream_index: self.packet.stream(),
            pts: pts_from_ffmpeg(self.packet.pts()),
            dts: pts_from_ffmpeg(self.packet.dts()),
            size: self.packet.size(),
            is_keyframe: self.packet.is_key(),
        }
    }

    /**
        Release the payload reference, leaving the buffer ready for reuse.
    */
    pub fn release(&mut self) {
        // SAFETY: the pointer comes from a live packet we exclusively own;
        // unref resets it to the blank state av_read_frame expects.
        unsafe {
            ffi::av_packet_unref(self.packet.as_mut_ptr());
        }
    }

    /**
        Access the underlying ffmpeg-next packet.

        Used by `ffmpeg-decode` to submit the packet to a decoder.
    */
    pub fn as_ffmpeg(&self) -> &ffmpeg_next::Packet {
        &self.packet
    }

    pub(crate) fn as_ffmpeg_mut(&mut self) -> &mut ffmpeg_next::Packet {
        &mut self.packet
    }
}

impl Default for PacketBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PacketBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacketBuffer")
            .field("stream_index", &self.packet.stream())
            .field("size", &self.packet.size())
            .finish_non_exhaustive()
    }
}
