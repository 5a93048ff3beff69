/*!
    Paced Video Decoder

    Opens a media file or network URI, decodes its first video stream one
    packet at a time, and holds decoding to the stream's nominal frame rate.
    Decoded frames are not displayed.

    Prerequisites:
    - FFmpeg: `brew install ffmpeg`

    Usage:
      cargo run --release -- /path/to/video.mp4
      cargo run --release -- --pacing measure -v rtsp://camera.local/stream1
*/

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod logging;
mod media;
mod playback;

fn main() -> ExitCode {
    match cli::Args::parse().run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vidpace: {e:#}");
            ExitCode::FAILURE
        }
    }
}
