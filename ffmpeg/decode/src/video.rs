/*!
    Video decoder implementation.
*/

use ffmpeg_next::{
    codec::{self, decoder::Video as VideoDecoderFFmpeg, threading},
    ffi,
};

use ffmpeg_source::{CodecConfig, PacketBuffer};
use ffmpeg_types::{DecoderStage, Error, FrameInfo, Result};

use crate::frame::FrameBuffer;

/**
    Configuration for opening a video decoder.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoDecoderConfig {
    /// Decoder thread count (0 lets FFmpeg choose).
    pub threads: usize,
}

impl VideoDecoderConfig {
    pub fn with_threads(threads: usize) -> Self {
        Self { threads }
    }
}

/**
    Video decoder bound to one source stream.

    Decoding is one call at a time: [`send_packet`](Self::send_packet)
    submits a compressed packet, [`receive_frame`](Self::receive_frame)
    asks for one decoded picture. The decoder context is freed on drop.
*/
pub struct VideoDecoder {
    decoder: VideoDecoderFFmpeg,
    stream_index: usize,
    codec_name: &'static str,
}

impl VideoDecoder {
    /**
        Resolve, allocate, configure and open a decoder for a stream.

        Fails with [`Error::DecoderNotFound`] when no decoder is available for
        the stream's codec, and with [`Error::DecoderInit`] naming the failed
        step otherwise.
    */
    pub fn new(codec_config: CodecConfig, config: VideoDecoderConfig) -> Result<Self> {
        ffmpeg_next::init().map_err(|e| Error::Init(e.to_string()))?;

        let stream_index = codec_config.stream_index();
        let codec_id = codec_config.codec_id();
        let codec = codec::decoder::find(codec_id)
            .ok_or_else(|| Error::DecoderNotFound(codec_id.name().to_string()))?;

        // SAFETY: the codec pointer comes from a registered decoder; the
        // returned context is null-checked before being wrapped, after which
        // the wrapper owns and frees it.
        let mut context = unsafe {
            let ptr = ffi::avcodec_alloc_context3(codec.as_ptr());
            if ptr.is_null() {
                return Err(Error::decoder_init(
                    DecoderStage::Allocate,
                    "avcodec_alloc_context3 returned null",
                ));
            }
            codec::context::Context::wrap(ptr, None)
        };

        context
            .set_parameters(codec_config.into_parameters())
            .map_err(|e| Error::decoder_init(DecoderStage::BindParameters, e))?;

        if config.threads > 0 {
            context.set_threading(threading::Config {
                kind: threading::Type::Frame,
                count: config.threads,
                ..Default::default()
            });
        }

        let decoder = context
            .decoder()
            .open_as(codec)
            .and_then(|opened| opened.video())
            .map_err(|e| Error::decoder_init(DecoderStage::Open, e))?;

        tracing::debug!(
            stream = stream_index,
            codec = codec_id.name(),
            width = decoder.width(),
            height = decoder.height(),
            threads = config.threads,
            "opened video decoder"
        );

        Ok(Self {
            decoder,
            stream_index,
            codec_name: codec_id.name(),
        })
    }

    /**
        Submit one compressed packet.

        A rejected packet (including a full decoder input queue) is reported
        as [`Error::SendPacket`]; nothing is retried.
    */
    pub fn send_packet(&mut self, packet: &PacketBuffer) -> Result<()> {
        self.decoder
            .send_packet(packet.as_ffmpeg())
            .map_err(|e| Error::SendPacket(e.to_string()))
    }

    /**
        Signal end of input so buffered frames can be drained.
    */
    pub fn send_eof(&mut self) -> Result<()> {
        match self.decoder.send_eof() {
            Ok(()) | Err(ffmpeg_next::Error::Eof) => Ok(()),
            Err(e) => Err(Error::SendPacket(e.to_string())),
        }
    }

    /**
        Receive one decoded frame into `frame`.

        Returns [`Error::FrameNotReady`] when the decoder needs more input
        (or has been fully drained after [`send_eof`](Self::send_eof)), and
        [`Error::ReceiveFrame`] on a decoding failure.
    */
    pub fn receive_frame(&mut self, frame: &mut FrameBuffer) -> Result<FrameInfo> {
        match self.decoder.receive_frame(&mut frame.frame) {
            Ok(()) => Ok(frame.info()),
            Err(ffmpeg_next::Error::Other { errno }) if errno == ffi::EAGAIN => {
                Err(Error::FrameNotReady)
            }
            Err(ffmpeg_next::Error::Eof) => Err(Error::FrameNotReady),
            Err(e) => Err(Error::ReceiveFrame(e.to_string())),
        }
    }
}

impl std::fmt::Debug for VideoDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoDecoder")
            .field("stream_index", &self.stream_index)
            .field("codec", &self.codec_name)
            .finish_non_exhaustive()
    }
}
