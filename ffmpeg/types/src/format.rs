/*!
    Pixel format types.
*/

use std::fmt;

/**
    Video pixel formats reported by decoded frames.

    Only the formats decoders commonly emit are named; anything else is
    reported as `Other` by the conversion layer.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    /// Planar YUV 4:2:0, 12bpp
    Yuv420p,
    /// Semi-planar YUV 4:2:0, 12bpp (hardware decoder output)
    Nv12,
    /// Planar YUV 4:2:2, 16bpp
    Yuv422p,
    /// Planar YUV 4:4:4, 24bpp
    Yuv444p,
    /// Planar YUV 4:2:0, 10-bit
    Yuv420p10,
    /// Semi-planar YUV 4:2:0, 10-bit little-endian
    P010le,
    /// Packed RGB, 24bpp
    Rgb24,
    /// Packed BGRA, 32bpp
    Bgra,
    /// Any format not listed above
    Other,
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yuv420p => "yuv420p",
            Self::Nv12 => "nv12",
            Self::Yuv422p => "yuv422p",
            Self::Yuv444p => "yuv444p",
            Self::Yuv420p10 => "yuv420p10",
            Self::P010le => "p010le",
            Self::Rgb24 => "rgb24",
            Self::Bgra => "bgra",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_format_display() {
        assert_eq!(PixelFormat::Nv12.to_string(), "nv12");
        assert_eq!(PixelFormat::Yuv420p10.to_string(), "yuv420p10");
        assert_eq!(PixelFormat::Other.to_string(), "other");
    }
}
