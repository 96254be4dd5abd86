/*!
    Decoded frame types.
*/

use crate::PixelFormat;

/**
    A single pixel plane of a decoded frame.

    `stride` is the number of bytes per row, which may exceed the number of
    bytes covered by the logical width due to decoder alignment padding.
*/
#[derive(Clone, Debug)]
pub struct Plane {
    /// Raw plane data, row-major, `stride` bytes per row.
    pub data: Vec<u8>,
    /// Bytes per row, including any padding.
    pub stride: usize,
}

impl Plane {
    /**
        Create a new plane.
    */
    pub fn new(data: Vec<u8>, stride: usize) -> Self {
        Self { data, stride }
    }
}

/**
    A decoded video frame.

    Produced by a decode backend. Pixel data layout depends on `format` —
    packed formats carry a single plane, planar formats one plane per
    channel group. Frames are plain owned values; a frame that is not
    selected for the thumbnail is released by dropping it.
*/
#[derive(Clone, Debug)]
pub struct VideoFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel format of the data.
    pub format: PixelFormat,
    /// Pixel planes, `format.plane_count()` of them.
    pub planes: Vec<Plane>,
    /// Frame-level key/value metadata (e.g. an "Orientation" tag).
    pub metadata: Vec<(String, String)>,
}

impl VideoFrame {
    /**
        Create a new video frame without metadata.
    */
    pub fn new(width: u32, height: u32, format: PixelFormat, planes: Vec<Plane>) -> Self {
        Self {
            width,
            height,
            format,
            planes,
            metadata: Vec::new(),
        }
    }

    /**
        Returns the primary (first) pixel plane, if any.
    */
    pub fn primary_plane(&self) -> Option<&Plane> {
        self.planes.first()
    }

    /**
        Look up a frame-level metadata value by key.
    */
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// Ensure frames are Send + Sync
static_assertions::assert_impl_all!(VideoFrame: Send, Sync);
static_assertions::assert_impl_all!(Plane: Send, Sync);
