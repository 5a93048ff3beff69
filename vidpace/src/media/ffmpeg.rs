use ffmpeg_decode::{FrameBuffer, VideoDecoder, VideoDecoderConfig};
use ffmpeg_source::{PacketBuffer, Source, SourceConfig};
use ffmpeg_types::{DecoderStage, Error, FrameInfo, PacketInfo, Result, StreamDescriptor};

use super::{FrameDecoder, MediaBackend, MediaInput, PacketSlot};

/**
    Backend driving FFmpeg through `ffmpeg-source` and `ffmpeg-decode`.
*/
#[derive(Clone, Debug, Default)]
pub struct FfmpegBackend {
    source_config: SourceConfig,
    decoder_config: VideoDecoderConfig,
}

impl FfmpegBackend {
    pub fn new(source_config: SourceConfig, decoder_config: VideoDecoderConfig) -> Self {
        Self {
            source_config,
            decoder_config,
        }
    }
}

impl MediaBackend for FfmpegBackend {
    type Packet = PacketBuffer;
    type Frame = FrameBuffer;
    type Input = Source;
    type Decoder = VideoDecoder;

    fn open(&mut self, uri: &str) -> Result<Source> {
        Source::open(uri, self.source_config.clone())
    }

    fn open_decoder(&mut self, input: &Source, stream: &StreamDescriptor) -> Result<VideoDecoder> {
        let codec_config = input.codec_config(stream.index).ok_or_else(|| {
            Error::decoder_init(
                DecoderStage::BindParameters,
                format!("stream {} has no codec parameters", stream.index),
            )
        })?;
        VideoDecoder::new(codec_config, self.decoder_config)
    }

    fn alloc_packet(&mut self) -> Result<PacketBuffer> {
        Ok(PacketBuffer::new())
    }

    fn alloc_frame(&mut self) -> Result<FrameBuffer> {
        Ok(FrameBuffer::new())
    }
}

impl PacketSlot for PacketBuffer {
    fn info(&self) -> PacketInfo {
        PacketBuffer::info(self)
    }

    fn release(&mut self) {
        PacketBuffer::release(self)
    }
}

impl MediaInput for Source {
    type Packet = PacketBuffer;

    fn streams(&self) -> &[StreamDescriptor] {
        Source::streams(self)
    }

    fn read_packet(&mut self, packet: &mut PacketBuffer) -> Result<bool> {
        Source::read_packet(self, packet)
    }
}

impl FrameDecoder for VideoDecoder {
    type Packet = PacketBuffer;
    type Frame = FrameBuffer;

    fn send_packet(&mut self, packet: &PacketBuffer) -> Result<()> {
        VideoDecoder::send_packet(self, packet)
    }

    fn receive_frame(&mut self, frame: &mut FrameBuffer) -> Result<FrameInfo> {
        VideoDecoder::receive_frame(self, frame)
    }

    fn send_eof(&mut self) -> Result<()> {
        VideoDecoder::send_eof(self)
    }
}
