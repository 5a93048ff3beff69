/*!
    Conversion utilities between ffmpeg-next types and ffmpeg-types.
*/

use ffmpeg_types::{MediaType, Pts, Rational};

/**
    Convert ffmpeg_next::Rational to our Rational.
*/
pub(crate) fn rational_from_ffmpeg(r: ffmpeg_next::Rational) -> Rational {
    Rational::new(r.numerator(), r.denominator())
}

/**
    Convert an ffmpeg_next media type to our MediaType.
*/
pub(crate) fn media_type_from_ffmpeg(medium: ffmpeg_next::media::Type) -> MediaType {
    use ffmpeg_next::media::Type;

    match medium {
        Type::Video => MediaType::Video,
        Type::Audio => MediaType::Audio,
        Type::Subtitle => MediaType::Subtitle,
        Type::Data => MediaType::Data,
        Type::Attachment => MediaType::Attachment,
        _ => MediaType::Unknown,
    }
}

/**
    Create a Pts from an optional i64 timestamp.
*/
pub(crate) fn pts_from_ffmpeg(pts: Option<i64>) -> Option<Pts> {
    pts.map(Pts)
}
