/*!
    Scripted in-memory backend for exercising the playback loop.

    Every call the loop makes is appended to a shared event log so tests can
    assert on ordering, filtering and teardown.
*/

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use ffmpeg_types::{
    DecoderStage, Error, FrameInfo, MediaType, PacketInfo, PixelFormat, Pts, Rational, Result,
    StreamDescriptor,
};

use crate::media::{FrameDecoder, MediaBackend, MediaInput, PacketSlot};

pub fn stream(index: usize, media_type: MediaType, avg_frame_rate: Rational) -> StreamDescriptor {
    StreamDescriptor {
        index,
        media_type,
        codec_name: media_type.to_string(),
        avg_frame_rate,
        width: if media_type.is_video() { 320 } else { 0 },
        height: if media_type.is_video() { 240 } else { 0 },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Open,
    Close,
    OpenDecoder(usize),
    CloseDecoder,
    /// Packet sequence number and its stream index.
    Read(u64, usize),
    Release(u64),
    Send(u64),
    Receive,
    SendEof,
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenFailure {
    Open,
    Probe,
}

/**
    A backend whose container and decoder follow a fixed script.
*/
#[derive(Default)]
pub struct ScriptedBackend {
    pub log: EventLog,
    pub streams: Vec<StreamDescriptor>,
    /// Stream index of each packet in the container, in file order.
    pub packets: Vec<usize>,
    pub open_failure: Option<OpenFailure>,
    pub decoder_failure: Option<DecoderStage>,
    pub decoder_missing: bool,
    /// Packet sequence numbers the decoder rejects.
    pub rejected_packets: HashSet<u64>,
    /// Frames the decoder holds back until it has seen this many more packets.
    pub decoder_delay: usize,
    /// Fail reading with an error after this many packets.
    pub read_error_after: Option<usize>,
}

impl ScriptedBackend {
    pub fn new(streams: Vec<StreamDescriptor>, packets: Vec<usize>) -> Self {
        Self {
            streams,
            packets,
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Event) -> bool) -> usize {
        self.log.borrow().iter().filter(|e| matches(e)).count()
    }
}

pub struct ScriptedInput {
    log: EventLog,
    streams: Vec<StreamDescriptor>,
    packets: Vec<usize>,
    position: usize,
    read_error_after: Option<usize>,
}

impl Drop for ScriptedInput {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Event::Close);
    }
}

#[derive(Debug, Default)]
pub struct ScriptedPacket {
    log: EventLog,
    seq: u64,
    stream_index: usize,
    loaded: bool,
}

impl PacketSlot for ScriptedPacket {
    fn info(&self) -> PacketInfo {
        PacketInfo {
            stream_index: self.stream_index,
            pts: Some(Pts(self.seq as i64)),
            dts: Some(Pts(self.seq as i64)),
            size: 188,
            is_keyframe: self.seq == 1,
        }
    }

    fn release(&mut self) {
        assert!(self.loaded, "packet {} released twice", self.seq);
        self.loaded = false;
        self.log.borrow_mut().push(Event::Release(self.seq));
    }
}

impl MediaInput for ScriptedInput {
    type Packet = ScriptedPacket;

    fn streams(&self) -> &[StreamDescriptor] {
        &self.streams
    }

    fn read_packet(&mut self, packet: &mut ScriptedPacket) -> Result<bool> {
        assert!(!packet.loaded, "packet {} reused before release", packet.seq);

        if self.read_error_after == Some(self.position) {
            return Err(Error::Read("Invalid data found when processing input".into()));
        }
        let Some(&stream_index) = self.packets.get(self.position) else {
            return Ok(false);
        };

        self.position += 1;
        packet.seq = self.position as u64;
        packet.stream_index = stream_index;
        packet.loaded = true;
        self.log
            .borrow_mut()
            .push(Event::Read(packet.seq, stream_index));
        Ok(true)
    }
}

#[derive(Debug, Default)]
pub struct ScriptedFrame {
    pub info: Option<FrameInfo>,
}

pub struct ScriptedDecoder {
    log: EventLog,
    rejected_packets: HashSet<u64>,
    delay: usize,
    /// Packets accepted but not yet returned as frames.
    pending: usize,
    eof: bool,
    next_pts: i64,
}

impl Drop for ScriptedDecoder {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Event::CloseDecoder);
    }
}

impl FrameDecoder for ScriptedDecoder {
    type Packet = ScriptedPacket;
    type Frame = ScriptedFrame;

    fn send_packet(&mut self, packet: &ScriptedPacket) -> Result<()> {
        self.log.borrow_mut().push(Event::Send(packet.seq));
        if self.rejected_packets.contains(&packet.seq) {
            return Err(Error::SendPacket("Invalid data found when processing input".into()));
        }
        self.pending += 1;
        Ok(())
    }

    fn receive_frame(&mut self, frame: &mut ScriptedFrame) -> Result<FrameInfo> {
        self.log.borrow_mut().push(Event::Receive);
        let available = if self.eof {
            self.pending > 0
        } else {
            self.pending > self.delay
        };
        if !available {
            return Err(Error::FrameNotReady);
        }

        self.pending -= 1;
        let info = FrameInfo {
            width: 320,
            height: 240,
            pixel_format: PixelFormat::Yuv420p,
            pts: Some(Pts(self.next_pts)),
            is_keyframe: self.next_pts == 0,
        };
        self.next_pts += 3600;
        frame.info = Some(info);
        Ok(info)
    }

    fn send_eof(&mut self) -> Result<()> {
        self.log.borrow_mut().push(Event::SendEof);
        self.eof = true;
        Ok(())
    }
}

impl MediaBackend for ScriptedBackend {
    type Packet = ScriptedPacket;
    type Frame = ScriptedFrame;
    type Input = ScriptedInput;
    type Decoder = ScriptedDecoder;

    fn open(&mut self, uri: &str) -> Result<ScriptedInput> {
        if self.open_failure == Some(OpenFailure::Open) {
            return Err(Error::open(uri, "No such file or directory"));
        }

        self.log.borrow_mut().push(Event::Open);
        let input = ScriptedInput {
            log: Rc::clone(&self.log),
            streams: self.streams.clone(),
            packets: self.packets.clone(),
            position: 0,
            read_error_after: self.read_error_after,
        };

        if self.open_failure == Some(OpenFailure::Probe) {
            drop(input);
            return Err(Error::Probe("Invalid data found when processing input".into()));
        }
        Ok(input)
    }

    fn open_decoder(
        &mut self,
        _input: &ScriptedInput,
        stream: &StreamDescriptor,
    ) -> Result<ScriptedDecoder> {
        if self.decoder_missing {
            return Err(Error::DecoderNotFound(stream.codec_name.clone()));
        }
        if let Some(stage) = self.decoder_failure {
            return Err(Error::decoder_init(stage, "Invalid argument"));
        }

        self.log.borrow_mut().push(Event::OpenDecoder(stream.index));
        Ok(ScriptedDecoder {
            log: Rc::clone(&self.log),
            rejected_packets: self.rejected_packets.clone(),
            delay: self.decoder_delay,
            pending: 0,
            eof: false,
            next_pts: 0,
        })
    }

    fn alloc_packet(&mut self) -> Result<ScriptedPacket> {
        Ok(ScriptedPacket {
            log: Rc::clone(&self.log),
            ..Default::default()
        })
    }

    fn alloc_frame(&mut self) -> Result<ScriptedFrame> {
        Ok(ScriptedFrame::default())
    }
}
