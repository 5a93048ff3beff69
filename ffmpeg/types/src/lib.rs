/*!
    Shared types for the ffmpeg crate ecosystem.

    This crate defines the vocabulary that crosses crate boundaries: stream
    descriptors, rationals, media types, packet and frame metadata, and
    the shared error type. It has no dependency on FFmpeg, so consumers (and
    their tests) can use it without pulling in FFmpeg bindings.
*/

mod codec;
mod error;
mod format;
mod media;
mod rational;
mod stream;

pub use codec::MediaType;
pub use error::{DecoderStage, Error, Result};
pub use format::PixelFormat;
pub use media::{FrameInfo, PacketInfo, Pts};
pub use rational::Rational;
pub use stream::{MediaInfo, StreamDescriptor};
