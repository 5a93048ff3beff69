use clap::ValueEnum;

/**
    What to do with the time left over after decoding a frame.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PacingMode {
    /// Sleep for the remainder of the frame interval
    #[default]
    Sleep,
    /// Only measure and log the remainder, never wait
    Measure,
}

/**
    How initialization failures map onto the process exit status.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExitPolicy {
    /// Exit with status 1 when playback could not start
    #[default]
    Strict,
    /// Always exit with status 0, even when playback could not start
    AlwaysSuccess,
}

impl ExitPolicy {
    pub fn exit_status(self, succeeded: bool) -> u8 {
        match self {
            Self::Strict if !succeeded => 1,
            _ => 0,
        }
    }
}

/**
    Settings for one run of the playback loop.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    pub pacing: PacingMode,
    pub exit_policy: ExitPolicy,
    /// Stop after this many decoded frames.
    pub max_frames: Option<u64>,
    /// Drain frames buffered inside the decoder at end of stream.
    pub drain: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            pacing: PacingMode::Sleep,
            exit_policy: ExitPolicy::Strict,
            max_frames: None,
            drain: true,
        }
    }
}
