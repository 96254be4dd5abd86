/*!
    Shared types for the thumbnail crate ecosystem.

    This crate defines the vocabulary of the ecosystem — the types that cross crate
    boundaries. It has no dependency on FFmpeg, making it lightweight and enabling
    consumers to depend on it without pulling in FFmpeg bindings.

    # Core Types

    - [`VideoFrame`] and [`Plane`] - Decoded frame data as produced by a backend
    - [`Buffer`] - An owned RGBA8 bitmap, the output of thumbnail extraction
    - [`Dims`] - A target bounding box

    # Format Types

    - [`PixelFormat`] - Video pixel formats
    - [`Orientation`] and [`Transform`] - EXIF-style display orientation

    # Backend Interface

    - [`DecodeBackend`] - Trait implemented by decode backends (demux + decode)

    # Error Handling

    - [`Error`] and [`Result`] - Common error types
*/

mod backend;
mod buffer;
mod error;
mod format;
mod frame;
mod orientation;

pub use backend::DecodeBackend;
pub use buffer::{Buffer, Dims};
pub use error::{Error, Result};
pub use format::PixelFormat;
pub use frame::{Plane, VideoFrame};
pub use orientation::{Orientation, Transform};
