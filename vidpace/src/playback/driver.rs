use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use ffmpeg_types::{Error, FrameInfo, Result};

use crate::config::PlayerConfig;
use crate::media::{FrameDecoder, MediaBackend, MediaInput, PacketSlot};

use super::pacer::{PaceOutcome, Pacer};
use super::report::PlaybackReport;
use super::selector::select_video_stream;

/**
    Shared running flag for the frame pump.

    Clearing it makes the pump stop before its next read.
*/
#[derive(Clone, Debug)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/**
    Why the frame pump stopped reading.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PumpEnd {
    EndOfStream,
    ReadError,
    Stopped,
}

/**
    Opens an input, decodes its first video stream packet by packet, and
    paces frames to the stream's nominal rate.

    Every handle the loop acquires is a local of [`run`](Self::run), so
    they are released in reverse order (frame, packet, decoder, input) on
    every exit path.
*/
pub struct PlaybackLoop<B: MediaBackend> {
    backend: B,
    config: PlayerConfig,
    running: StopHandle,
}

impl<B: MediaBackend> PlaybackLoop<B> {
    pub fn new(backend: B, config: PlayerConfig) -> Self {
        Self {
            backend,
            config,
            running: StopHandle::new(),
        }
    }

    #[cfg(test)]
    pub fn stop_handle(&self) -> StopHandle {
        self.running.clone()
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /**
        Play `uri` to the end (or until stopped).

        Initialization failures are returned; per-packet decode failures are
        logged, counted in the report, and do not stop the loop.
    */
    pub fn run(&mut self, uri: &str) -> Result<PlaybackReport> {
        let mut input = self.backend.open(uri)?;

        let selected = select_video_stream(input.streams())?;
        match selected.frame_interval {
            Some(interval) => tracing::info!(
                stream = selected.index(),
                codec = %selected.stream.codec_name,
                width = selected.stream.width,
                height = selected.stream.height,
                frame_rate = %selected.stream.avg_frame_rate,
                ?interval,
                "selected video stream"
            ),
            None => tracing::warn!(
                stream = selected.index(),
                codec = %selected.stream.codec_name,
                frame_rate = %selected.stream.avg_frame_rate,
                "video stream has no usable frame rate, decoding without pacing"
            ),
        }

        let mut decoder = self.backend.open_decoder(&input, &selected.stream)?;
        let mut packet = self.backend.alloc_packet()?;
        let mut frame = self.backend.alloc_frame()?;

        let pacer = Pacer::new(selected.frame_interval, self.config.pacing);
        let mut report = PlaybackReport {
            stream_index: selected.index(),
            frame_interval: selected.frame_interval,
            ..Default::default()
        };

        let end = self.pump(
            &mut input,
            &mut decoder,
            &mut packet,
            &mut frame,
            &pacer,
            &mut report,
        );
        tracing::debug!(?end, packets = report.packets_read, "frame pump finished");

        if end == PumpEnd::Stopped {
            report.stopped_early = true;
        } else if self.config.drain {
            self.drain(&mut decoder, &mut frame, &pacer, &mut report);
        }

        Ok(report)
    }

    fn pump(
        &self,
        input: &mut B::Input,
        decoder: &mut B::Decoder,
        packet: &mut B::Packet,
        frame: &mut B::Frame,
        pacer: &Pacer,
        report: &mut PlaybackReport,
    ) -> PumpEnd {
        let video_index = report.stream_index;

        while self.running.is_running() {
            match input.read_packet(packet) {
                Ok(true) => {}
                Ok(false) => return PumpEnd::EndOfStream,
                Err(e) => {
                    tracing::warn!("{e}, treating as end of stream");
                    return PumpEnd::ReadError;
                }
            }
            report.packets_read += 1;

            let info = packet.info();
            tracing::trace!(
                stream = info.stream_index,
                pts = ?info.pts.map(|p| p.0),
                dts = ?info.dts.map(|p| p.0),
                size = info.size,
                key = info.is_keyframe,
                "read packet"
            );

            if info.stream_index == video_index {
                report.packets_sent += 1;
                match decode_and_pace(decoder, packet, frame, pacer) {
                    Ok(outcome) => {
                        report.frames_decoded += 1;
                        report.record_pace(&outcome);
                        self.check_frame_limit(report);
                    }
                    Err(e) => record_decode_error(report, &e),
                }
            } else {
                report.packets_discarded += 1;
            }

            packet.release();
        }

        PumpEnd::Stopped
    }

    /**
        Pull out the frames the decoder buffered before end of stream.
    */
    fn drain(
        &self,
        decoder: &mut B::Decoder,
        frame: &mut B::Frame,
        pacer: &Pacer,
        report: &mut PlaybackReport,
    ) {
        if let Err(e) = decoder.send_eof() {
            tracing::warn!("cannot drain decoder: {e}");
            return;
        }

        while self.running.is_running() {
            let started = Instant::now();
            match decoder.receive_frame(frame) {
                Ok(info) => {
                    present(&info);
                    let outcome = pacer.pace(started.elapsed());
                    report.frames_drained += 1;
                    report.record_pace(&outcome);
                    self.check_frame_limit(report);
                }
                Err(Error::FrameNotReady) => break,
                Err(e) => {
                    tracing::warn!("{e}");
                    report.receive_failures += 1;
                    break;
                }
            }
        }

        if !self.running.is_running() {
            report.stopped_early = true;
        }
        if report.frames_drained > 0 {
            tracing::debug!(frames = report.frames_drained, "drained decoder");
        }
    }

    fn check_frame_limit(&self, report: &PlaybackReport) {
        if let Some(max) = self.config.max_frames {
            if report.total_frames() >= max {
                tracing::info!(frames = max, "frame limit reached");
                self.running.stop();
            }
        }
    }
}

/**
    Send one packet, receive at most one frame, and pace it.
*/
fn decode_and_pace<D: FrameDecoder>(
    decoder: &mut D,
    packet: &D::Packet,
    frame: &mut D::Frame,
    pacer: &Pacer,
) -> Result<PaceOutcome> {
    let started = Instant::now();
    decoder.send_packet(packet)?;
    let info = decoder.receive_frame(frame)?;
    present(&info);

    let outcome = pacer.pace(started.elapsed());
    tracing::trace!(
        elapsed = ?outcome.elapsed,
        shortfall = ?outcome.shortfall,
        slept = outcome.slept,
        "paced frame"
    );
    Ok(outcome)
}

/**
    Presentation is not implemented; decoded frames are only logged.
*/
fn present(info: &FrameInfo) {
    tracing::trace!(
        pts = ?info.pts.map(|p| p.0),
        width = info.width,
        height = info.height,
        format = %info.pixel_format,
        key = info.is_keyframe,
        "frame decoded"
    );
}

fn record_decode_error(report: &mut PlaybackReport, error: &Error) {
    match error {
        Error::FrameNotReady => {
            tracing::debug!("{error}");
            report.receive_pending += 1;
        }
        Error::SendPacket(_) => {
            tracing::warn!("{error}");
            report.send_failures += 1;
        }
        _ => {
            tracing::warn!("{error}");
            report.receive_failures += 1;
        }
    }
}
