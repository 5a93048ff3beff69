/*!
    Probing functionality for extracting media metadata.
*/

use std::time::Duration;

use ffmpeg_next::{format::context::Input as InputContext, format::stream::Stream};

use ffmpeg_types::{MediaInfo, StreamDescriptor};

use crate::convert::{media_type_from_ffmpeg, rational_from_ffmpeg};

/**
    Extract MediaInfo from an already-opened input context.
*/
pub(crate) fn extract_media_info(input_ctx: &InputContext) -> MediaInfo {
    let streams = input_ctx.streams().map(|s| describe_stream(&s)).collect();

    let duration = if input_ctx.duration() > 0 {
        Some(Duration::from_micros(input_ctx.duration() as u64))
    } else {
        None
    };

    MediaInfo {
        format_name: input_ctx.format().name().to_string(),
        duration,
        streams,
    }
}

fn describe_stream(stream: &Stream) -> StreamDescriptor {
    let parameters = stream.parameters();
    let media_type = media_type_from_ffmpeg(parameters.medium());

    // SAFETY: reading plain fields from the AVCodecParameters owned by the
    // stream, which outlives this call
    let (width, height) = unsafe {
        let ptr = parameters.as_ptr();
        ((*ptr).width.max(0) as u32, (*ptr).height.max(0) as u32)
    };

    StreamDescriptor {
        index: stream.index(),
        media_type,
        codec_name: parameters.id().name().to_string(),
        avg_frame_rate: rational_from_ffmpeg(stream.avg_frame_rate()),
        width,
        height,
    }
}
