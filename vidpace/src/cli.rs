use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};

use ffmpeg_decode::VideoDecoderConfig;
use ffmpeg_source::SourceConfig;

use crate::config::{ExitPolicy, PacingMode, PlayerConfig};
use crate::logging;
use crate::media::FfmpegBackend;
use crate::playback::PlaybackLoop;

#[derive(Parser, Debug)]
#[command(name = "vidpace")]
#[command(about = "Decode the first video stream of a file or URI at its nominal frame rate")]
pub struct Args {
    /// Input file path or URI
    pub input: String,

    /// What to do with time left over after decoding a frame
    #[arg(long, value_enum, default_value_t = PacingMode::Sleep)]
    pub pacing: PacingMode,

    /// Exit status when playback cannot start
    #[arg(long, value_enum, default_value_t = ExitPolicy::Strict)]
    pub exit_policy: ExitPolicy,

    /// Stop after this many decoded frames
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_frames: Option<u64>,

    /// Decoder threads (0 lets FFmpeg choose)
    #[arg(long, default_value = "0")]
    pub threads: usize,

    /// Force the container format instead of probing (e.g. "mpegts")
    #[arg(long)]
    pub format: Option<String>,

    /// Maximum bytes to read while probing stream info
    #[arg(long)]
    pub probe_size: Option<u64>,

    /// Do not drain frames buffered in the decoder at end of stream
    #[arg(long)]
    pub no_drain: bool,

    /// More logging (-v debug, -vv trace and FFmpeg's own messages)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            self.verbose.min(i8::MAX as u8) as i8
        }
    }

    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            pacing: self.pacing,
            exit_policy: self.exit_policy,
            max_frames: self.max_frames,
            drain: !self.no_drain,
        }
    }

    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            format: self.format.clone(),
            probe_size: self.probe_size,
        }
    }

    pub fn run(self) -> Result<ExitCode> {
        logging::init(self.verbosity())?;
        ffmpeg_source::init(self.verbose >= 2)?;

        let config = self.player_config();
        let backend = FfmpegBackend::new(
            self.source_config(),
            VideoDecoderConfig::with_threads(self.threads),
        );

        let mut player = PlaybackLoop::new(backend, config.clone());
        let succeeded = match player.run(&self.input) {
            Ok(report) => {
                tracing::info!("{report}");
                true
            }
            Err(e) => {
                tracing::error!(input = %self.input, "{e}");
                false
            }
        };

        Ok(ExitCode::from(config.exit_policy.exit_status(succeeded)))
    }
}
