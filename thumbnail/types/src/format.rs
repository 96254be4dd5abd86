/*!
    Pixel format types.
*/

/**
    Video pixel formats.

    This is the subset of formats the extraction core can convert to RGBA.
    Backends map their native formats onto these; formats outside the
    subset are rejected at the backend boundary.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Packed RGBA, 32bpp
    Rgba,
    /// Packed BGRA, 32bpp (common for display on macOS/Windows)
    Bgra,
    /// Packed RGB, 24bpp
    Rgb24,
    /// Packed BGR, 24bpp
    Bgr24,
    /// Single-channel grayscale, 8bpp
    Gray8,
    /// Planar YUV 4:2:0, 12bpp (most common video format)
    Yuv420p,
    /// Planar YUV 4:2:2, 16bpp
    Yuv422p,
    /// Planar YUV 4:4:4, 24bpp
    Yuv444p,
    /// Semi-planar YUV 4:2:0, 12bpp (common hardware decoder output)
    Nv12,
}

impl PixelFormat {
    /**
        Returns the number of pixel planes for this format.
    */
    pub const fn plane_count(self) -> usize {
        match self {
            Self::Rgba | Self::Bgra | Self::Rgb24 | Self::Bgr24 | Self::Gray8 => 1,
            Self::Nv12 => 2,
            Self::Yuv420p | Self::Yuv422p | Self::Yuv444p => 3,
        }
    }

    /**
        Returns true if this is a planar format.
    */
    pub const fn is_planar(self) -> bool {
        self.plane_count() > 1
    }

    /**
        Returns the number of bytes per pixel in the primary plane.
    */
    pub const fn primary_bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba | Self::Bgra => 4,
            Self::Rgb24 | Self::Bgr24 => 3,
            Self::Gray8 | Self::Yuv420p | Self::Yuv422p | Self::Yuv444p | Self::Nv12 => 1,
        }
    }
}
