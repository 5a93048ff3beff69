/*!
    Reusable decoded frame buffer.
*/

use ffmpeg_next::util::frame::video::Video as VideoFrameFFmpeg;

use ffmpeg_types::{FrameInfo, PixelFormat, Pts};

/**
    A decoded picture buffer, allocated once and overwritten by every
    successful [`VideoDecoder::receive_frame`](crate::VideoDecoder::receive_frame).

    Freed on drop.
*/
pub struct FrameBuffer {
    pub(crate) frame: VideoFrameFFmpeg,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            frame: VideoFrameFFmpeg::empty(),
        }
    }

    /**
        Describe the picture currently held in the buffer.
    */
    pub fn info(&self) -> FrameInfo {
        FrameInfo {
            width: self.frame.width(),
            height: self.frame.height(),
            pixel_format: pixel_format_from_ffmpeg(self.frame.format()),
            pts: self.frame.pts().map(Pts),
            is_keyframe: self.frame.is_key(),
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("info", &self.info())
            .finish()
    }
}

/**
    Convert FFmpeg pixel format to our PixelFormat.
*/
fn pixel_format_from_ffmpeg(format: ffmpeg_next::format::Pixel) -> PixelFormat {
    use ffmpeg_next::format::Pixel;

    match format {
        Pixel::YUV420P => PixelFormat::Yuv420p,
        Pixel::NV12 => PixelFormat::Nv12,
        Pixel::YUV422P => PixelFormat::Yuv422p,
        Pixel::YUV444P => PixelFormat::Yuv444p,
        Pixel::YUV420P10LE | Pixel::YUV420P10BE => PixelFormat::Yuv420p10,
        Pixel::P010LE => PixelFormat::P010le,
        Pixel::RGB24 => PixelFormat::Rgb24,
        Pixel::BGRA => PixelFormat::Bgra,
        _ => PixelFormat::Other,
    }
}
