/*!
    Media source implementation.
*/

use std::ffi::CString;
use std::ptr;

use ffmpeg_next::{Dictionary, ffi, format::context::Input as InputContext};

use ffmpeg_types::{Error, MediaInfo, Result, StreamDescriptor};

use crate::codec_config::CodecConfig;
use crate::packet::PacketBuffer;
use crate::probe::extract_media_info;

/**
    Initialize FFmpeg and set how chatty its own logging is.

    Safe to call more than once.
*/
pub fn init(verbose: bool) -> Result<()> {
    ffmpeg_next::init().map_err(|e| Error::Init(e.to_string()))?;

    let level = if verbose {
        ffmpeg_next::util::log::Level::Info
    } else {
        ffmpeg_next::util::log::Level::Error
    };
    ffmpeg_next::util::log::set_level(level);
    Ok(())
}

/**
    Returns true if the input names a remote resource (`scheme://...`)
    rather than a local path or `file:` URI.
*/
pub fn is_remote(uri: &str) -> bool {
    match uri.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme != "file"
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/**
    Configuration for opening a media source.
*/
#[derive(Clone, Debug, Default)]
pub struct SourceConfig {
    /// Force a container format by short name (e.g. "mpegts") instead of probing.
    pub format: Option<String>,
    /// Maximum number of bytes to read while probing stream info.
    pub probe_size: Option<u64>,
}

/**
    An open media container that produces compressed packets.

    Created by [`Source::open`]. The container is closed and freed when the
    source is dropped.
*/
pub struct Source {
    uri: String,
    input: InputContext,
    media_info: MediaInfo,
}

impl Source {
    /**
        Open a media file or URI and probe its streams.

        Network transport is initialized for remote URIs. Fails with
        [`Error::Allocation`], [`Error::Open`] or [`Error::Probe`]; in every
        case the partially opened container has already been released.

        # Example

        ```ignore
        let source = Source::open("video.mp4", SourceConfig::default())?;
        println!("Streams: {}", source.streams().len());
        ```
    */
    pub fn open(uri: &str, config: SourceConfig) -> Result<Self> {
        ffmpeg_next::init().map_err(|e| Error::Init(e.to_string()))?;

        if is_remote(uri) {
            init_network();
        }

        let input = open_input(uri, &config)?;
        let media_info = extract_media_info(&input);

        tracing::debug!(
            uri,
            format = %media_info.format_name,
            duration = ?media_info.duration,
            streams = media_info.streams.len(),
            "opened input"
        );
        for stream in &media_info.streams {
            tracing::debug!(
                index = stream.index,
                kind = %stream.media_type,
                codec = %stream.codec_name,
                avg_frame_rate = %stream.avg_frame_rate,
                "stream"
            );
        }

        Ok(Self {
            uri: uri.to_string(),
            input,
            media_info,
        })
    }

    /**
        All streams of the container, in container order.
    */
    pub fn streams(&self) -> &[StreamDescriptor] {
        &self.media_info.streams
    }

    /**
        Get the codec configuration of a stream.

        Pass this to `ffmpeg-decode` to create a decoder for the stream.
    */
    pub fn codec_config(&self, stream_index: usize) -> Option<CodecConfig> {
        let stream = self.input.stream(stream_index)?;
        Some(CodecConfig::new(stream_index, stream.parameters()))
    }

    /**
        Read the next packet from the container into `packet`.

        Returns `Ok(true)` when a packet was read and `Ok(false)` at end of
        stream. Packets of every stream are returned, in file order; the
        caller filters by the stream index in [`PacketBuffer::info`]. The buffer must have
        been [released](PacketBuffer::release) since the previous read.
    */
    pub fn read_packet(&mut self, packet: &mut PacketBuffer) -> Result<bool> {
        match packet.as_ffmpeg_mut().read(&mut self.input) {
            Ok(()) => Ok(true),
            Err(ffmpeg_next::Error::Eof) => Ok(false),
            Err(e) => Err(Error::Read(e.to_string())),
        }
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("uri", &self.uri)
            .field("media_info", &self.media_info)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "network")]
fn init_network() {
    ffmpeg_next::format::network::init();
}

#[cfg(not(feature = "network"))]
fn init_network() {
    tracing::warn!("built without network support, remote inputs may fail to open");
}

/**
    Allocate a format context, open the input into it, and read stream info.

    Split into the same steps FFmpeg exposes so that allocation, open and
    probe failures are reported separately.
*/
fn open_input(uri: &str, config: &SourceConfig) -> Result<InputContext> {
    let c_uri = CString::new(uri).map_err(|e| Error::open(uri, e))?;

    let format = match &config.format {
        Some(name) => {
            let c_name = CString::new(name.as_str()).map_err(|e| Error::open(uri, e))?;
            // SAFETY: c_name is a valid NUL-terminated string for the duration of the call
            let format = unsafe { ffi::av_find_input_format(c_name.as_ptr()) };
            if format.is_null() {
                return Err(Error::open(uri, format!("unknown input format '{name}'")));
            }
            format
        }
        None => ptr::null(),
    };

    let mut options = Dictionary::new();
    if let Some(size) = config.probe_size {
        options.set("probesize", &size.to_string());
    }

    // SAFETY: the context pointer is either null-checked or handed to
    // avformat_open_input, which frees it on failure. On success ownership
    // moves into InputContext, whose drop closes and frees it.
    unsafe {
        let mut ctx = ffi::avformat_alloc_context();
        if ctx.is_null() {
            return Err(Error::Allocation("format context"));
        }

        let mut opts = options.disown();
        let res = ffi::avformat_open_input(&mut ctx, c_uri.as_ptr(), format, &mut opts);
        Dictionary::own(opts);

        if res < 0 {
            return Err(Error::open(uri, ffmpeg_next::Error::from(res)));
        }

        let input = InputContext::wrap(ctx);

        let res = ffi::avformat_find_stream_info(ctx, ptr::null_mut());
        if res < 0 {
            // input is dropped here, closing the container
            return Err(Error::Probe(ffmpeg_next::Error::from(res).to_string()));
        }

        Ok(input)
    }
}
