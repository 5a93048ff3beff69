use std::time::Duration;

use ffmpeg_types::{Error, Result, StreamDescriptor};

/**
    The video stream chosen for playback and its pacing target.
*/
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedStream {
    pub stream: StreamDescriptor,
    /// Nominal time per frame, `None` when the container gives no usable rate.
    pub frame_interval: Option<Duration>,
}

impl SelectedStream {
    pub fn index(&self) -> usize {
        self.stream.index
    }
}

/**
    Pick the first video stream in container order.

    Any later video streams are ignored.
*/
pub fn select_video_stream(streams: &[StreamDescriptor]) -> Result<SelectedStream> {
    let stream = streams
        .iter()
        .find(|s| s.media_type.is_video())
        .ok_or(Error::NoVideoStream)?;

    for ignored in streams
        .iter()
        .filter(|s| s.media_type.is_video() && s.index != stream.index)
    {
        tracing::debug!(index = ignored.index, codec = %ignored.codec_name, "ignoring extra video stream");
    }

    Ok(SelectedStream {
        stream: stream.clone(),
        frame_interval: stream.frame_interval(),
    })
}
