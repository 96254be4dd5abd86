/*!
    FFmpeg decode backend for the thumbnail crate ecosystem.

    Implements the [`DecodeBackend`] trait over `ffmpeg-next`: container
    demuxing, video stream selection and codec decoding. This is the only
    crate in the ecosystem that links against FFmpeg.

    # Example

    ```ignore
    use thumbnail_extract::generate;
    use thumbnail_ffmpeg::FfmpegSource;
    use thumbnail_types::Dims;

    let mut source = FfmpegSource::open("video.mp4")?;
    let thumb = generate(&mut source, Dims::new(150, 150))?;
    ```

    [`DecodeBackend`]: thumbnail_types::DecodeBackend
*/

pub use thumbnail_types::{DecodeBackend, Error, Result};

mod convert;
mod source;

pub use source::FfmpegSource;
