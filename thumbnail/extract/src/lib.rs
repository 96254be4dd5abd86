/*!
    Representative-frame thumbnail extraction for the thumbnail crate ecosystem.

    This crate turns a decoded video stream into a single still image: a
    correctly oriented RGBA8 bitmap that fits inside a caller-provided
    bounding box while preserving aspect ratio.

    Rather than seeking to a fixed offset — which tends to land on black
    frames, fades and scene transitions — the extractor samples a small
    window of frames from the start of the stream and picks the one whose
    color distribution is closest to the average of the window. The idea
    follows Vadim Zaliva's histogram lookup filter
    (<http://notbrainsurgery.livejournal.com/29773.html>).

    # Example

    ```ignore
    use thumbnail_extract::generate;
    use thumbnail_ffmpeg::FfmpegSource;
    use thumbnail_types::Dims;

    let mut source = FfmpegSource::open("video.mp4")?;
    let thumb = generate(&mut source, Dims::new(150, 150))?;
    // thumb is an RGBA8 Buffer no larger than 150x150
    ```

    # Stages

    1. **Sampling** — pull up to 10 frames, one out of every 3 decoded,
       from the backend ([`sample_frames`]).
    2. **Selection** — pick the frame statistically closest to the window
       average via RGB histogram comparison ([`select_best`]).
    3. **Resampling** — convert to RGBA at the output size, either
       directly (sources already inside the box) or via a 4x supersample
       followed by a box downscale ([`encode_frame`]).
    4. **Orientation** — apply EXIF-style mirror/rotate correction
       ([`adjust_orientation`]).

    Everything is synchronous and single-threaded; the only blocking
    points are the backend's packet reads. Separate extraction runs are
    independent and may run on separate threads, one backend handle each.
*/

pub use thumbnail_types::{
    Buffer, DecodeBackend, Dims, Error, Orientation, PixelFormat, Plane, Result, Transform,
    VideoFrame,
};

mod alpha;
mod downscale;
mod orient;
mod pipeline;
mod resample;
mod sample;
mod select;

pub use alpha::compensate_alpha;
pub use downscale::{SUPERSAMPLE_FACTOR, downscale};
pub use orient::adjust_orientation;
pub use pipeline::{encode_frame, generate, generate_with};
pub use resample::resample;
pub use sample::{SamplerConfig, sample_frames};
pub use select::{HIST_CHANNELS, HIST_SIZE, select_best};
