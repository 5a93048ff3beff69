/*!
    Media decoding for the ffmpeg crate ecosystem.

    This crate turns compressed packets from `ffmpeg-source` into decoded
    video frames. Decoding is driven one call at a time: send a packet,
    then ask for a frame, reusing the same frame buffer throughout.
*/

mod frame;
mod video;

pub use frame::FrameBuffer;
pub use video::{VideoDecoder, VideoDecoderConfig};
