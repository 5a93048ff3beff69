/*!
    Media source and demuxing for the ffmpeg crate ecosystem.

    This crate handles the input side of the media pipeline. It opens media
    from local files or network URIs, probes the container's streams, and
    reads compressed packets into a reusable buffer that downstream crates
    can decode.
*/

mod codec_config;
mod convert;
mod packet;
mod probe;
mod source;

pub use codec_config::CodecConfig;
pub use packet::PacketBuffer;
pub use source::{Source, SourceConfig, init, is_remote};
