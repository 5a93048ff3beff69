use std::fmt;

use thiserror::Error;

/**
    Result type used across the ffmpeg crates.
*/
pub type Result<T, E = Error> = std::result::Result<T, E>;

/**
    The step of decoder initialization that failed.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecoderStage {
    Allocate,
    BindParameters,
    Open,
}

impl fmt::Display for DecoderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Allocate => "allocating context",
            Self::BindParameters => "copying codec parameters",
            Self::Open => "opening codec",
        };
        f.write_str(name)
    }
}

/**
    Errors from opening, demuxing and decoding media.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot initialize ffmpeg: {0}")]
    Init(String),

    #[error("failed to allocate {0}")]
    Allocation(&'static str),

    #[error("cannot open {uri}: {reason}")]
    Open { uri: String, reason: String },

    #[error("cannot find stream info: {0}")]
    Probe(String),

    #[error("no video stream found")]
    NoVideoStream,

    #[error("no decoder found for codec {0}")]
    DecoderNotFound(String),

    #[error("video decoder init failed while {stage}: {reason}")]
    DecoderInit { stage: DecoderStage, reason: String },

    #[error("send packet: {0}")]
    SendPacket(String),

    /// The decoder needs more input before it can emit a frame.
    #[error("receive frame: decoder needs more input")]
    FrameNotReady,

    #[error("receive frame: {0}")]
    ReceiveFrame(String),

    #[error("read packet: {0}")]
    Read(String),
}

impl Error {
    pub fn open(uri: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::Open {
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }

    pub fn decoder_init(stage: DecoderStage, reason: impl fmt::Display) -> Self {
        Self::DecoderInit {
            stage,
            reason: reason.to_string(),
        }
    }
}
