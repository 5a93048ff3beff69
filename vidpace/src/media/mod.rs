/*!
    The calls the playback loop makes into the media library.

    The loop only sequences these calls; everything behind them (container
    parsing, codec negotiation, decoding) belongs to the backend. The FFmpeg
    backend is the one used by the binary.
*/

use ffmpeg_types::{FrameInfo, PacketInfo, Result, StreamDescriptor};

mod ffmpeg;

pub use ffmpeg::FfmpegBackend;

/**
    A reusable compressed packet buffer.
*/
pub trait PacketSlot {
    /**
        Metadata of the packet currently held, including its stream index.
    */
    fn info(&self) -> PacketInfo;

    /**
        Drop the payload reference so the buffer can be refilled.
    */
    fn release(&mut self);
}

/**
    An open, probed container.

    Dropping it closes and frees the container.
*/
pub trait MediaInput {
    type Packet: PacketSlot;

    /**
        Stream descriptors in container order.
    */
    fn streams(&self) -> &[StreamDescriptor];

    /**
        Read the next packet into `packet`; `Ok(false)` at end of stream.
    */
    fn read_packet(&mut self, packet: &mut Self::Packet) -> Result<bool>;
}

/**
    An opened decoder for one stream.

    Dropping it frees the decoder state.
*/
pub trait FrameDecoder {
    type Packet;
    type Frame;

    fn send_packet(&mut self, packet: &Self::Packet) -> Result<()>;

    /**
        Receive one frame; `Error::FrameNotReady` when more input is needed.
    */
    fn receive_frame(&mut self, frame: &mut Self::Frame) -> Result<FrameInfo>;

    fn send_eof(&mut self) -> Result<()>;
}

/**
    Factory for the handles the playback loop works with.
*/
pub trait MediaBackend {
    type Packet: PacketSlot;
    type Frame;
    type Input: MediaInput<Packet = Self::Packet>;
    type Decoder: FrameDecoder<Packet = Self::Packet, Frame = Self::Frame>;

    /**
        Open and probe a path or URI.
    */
    fn open(&mut self, uri: &str) -> Result<Self::Input>;

    /**
        Resolve, allocate, bind and open a decoder for one stream of `input`.
    */
    fn open_decoder(
        &mut self,
        input: &Self::Input,
        stream: &StreamDescriptor,
    ) -> Result<Self::Decoder>;

    fn alloc_packet(&mut self) -> Result<Self::Packet>;

    fn alloc_frame(&mut self) -> Result<Self::Frame>;
}
