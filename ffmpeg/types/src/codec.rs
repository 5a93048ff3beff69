/*!
    Media type identifiers.
*/

use std::fmt;

/**
    The kind of data a container stream carries.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaType {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    Unknown,
}

impl MediaType {
    pub const fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Subtitle => "subtitle",
            Self::Data => "data",
            Self::Attachment => "attachment",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_display() {
        assert_eq!(MediaType::Video.to_string(), "video");
        assert_eq!(MediaType::Subtitle.to_string(), "subtitle");
        assert!(MediaType::Video.is_video());
        assert!(!MediaType::Audio.is_video());
    }
}
