/*!
    The thumbnail extraction pipeline.
*/

use log::debug;

use thumbnail_types::{Buffer, DecodeBackend, Dims, Orientation, Result, VideoFrame};

use crate::alpha::compensate_alpha;
use crate::downscale::{SUPERSAMPLE_FACTOR, downscale};
use crate::orient::adjust_orientation;
use crate::resample::resample;
use crate::sample::{SamplerConfig, sample_frames};
use crate::select::select_best;

/**
    Extract a thumbnail from the backend's target stream.

    Samples candidate frames with the default [`SamplerConfig`], selects
    the most representative one, and encodes it as an RGBA8 buffer that
    fits inside `thumb_dims` with the aspect ratio preserved. Fails only
    if no frame at all could be decoded, a frame is malformed, or a
    buffer cannot be allocated; read errors after the first decoded frame
    are tolerated.
*/
pub fn generate<B: DecodeBackend>(backend: &mut B, thumb_dims: Dims) -> Result<Buffer> {
    generate_with(backend, thumb_dims, &SamplerConfig::default())
}

/**
    Extract a thumbnail with an explicit sampler configuration.
*/
pub fn generate_with<B: DecodeBackend>(
    backend: &mut B,
    thumb_dims: Dims,
    config: &SamplerConfig,
) -> Result<Buffer> {
    let frames = sample_frames(backend, config)?;
    debug!("sampled {} candidate frames", frames.len());

    let rotation = backend.stream_rotation();
    let frame = select_best(frames);
    let orientation = resolve_orientation(&frame, rotation);

    encode_frame(&frame, thumb_dims, orientation)
}

/**
    Resolve the display orientation of the selected frame.

    A frame-level "Orientation" tag takes precedence and its value is
    used verbatim as the EXIF code. Otherwise a container-level rotation
    in degrees is mapped onto the rotation codes. No tag means upright.
*/
fn resolve_orientation(frame: &VideoFrame, stream_rotation: Option<i64>) -> Orientation {
    if let Some(tag) = frame.tag("Orientation") {
        return Orientation::from_code(tag.parse().unwrap_or(0));
    }
    match stream_rotation {
        Some(degrees) => Orientation::from_rotation(degrees),
        None => Orientation::Upright,
    }
}

/**
    Encode one decoded frame as a correctly oriented RGBA8 thumbnail that
    fits inside `thumb_box`.

    Sources strictly smaller than the box in both dimensions are
    converted at their native size, with alpha compensation applied.
    Everything else is shrunk to fit: each dimension exceeding the box
    divides both dimensions by its overflow ratio, the frame is
    point-resampled to 4x the resulting size and then box-downscaled.
    A source exactly at the box size goes through the scaling path with a
    no-op scale factor, and alpha compensation is skipped on that path —
    both kept for output compatibility with the original filter.
*/
pub fn encode_frame(
    frame: &VideoFrame,
    thumb_box: Dims,
    orientation: Orientation,
) -> Result<Buffer> {
    // If the image fits inside the thumbnail box, simply convert to RGBA.
    if frame.width < thumb_box.width && frame.height < thumb_box.height {
        let mut img = resample(frame, Dims::new(frame.width, frame.height))?;
        compensate_alpha(&mut img);
        adjust_orientation(&mut img, orientation)?;
        return Ok(img);
    }

    let mut target = Dims::new(frame.width, frame.height);
    let width = target.width;
    scale_dims(&mut target, thumb_box.width, width);
    let height = target.height;
    scale_dims(&mut target, thumb_box.height, height);

    let enlarged = resample(
        frame,
        Dims::new(
            target.width * SUPERSAMPLE_FACTOR,
            target.height * SUPERSAMPLE_FACTOR,
        ),
    )?;
    let mut img = downscale(&enlarged, target)?;
    drop(enlarged);

    adjust_orientation(&mut img, orientation)?;
    Ok(img)
}

/// Scale both dimensions to fit `val` into `max`, if it is exceeded.
/// Applying this once per dimension maintains the aspect ratio.
fn scale_dims(dims: &mut Dims, max: u32, val: u32) {
    if val > max {
        let scale = f64::from(val) / f64::from(max);
        dims.width = (f64::from(dims.width) / scale) as u32;
        dims.height = (f64::from(dims.height) / scale) as u32;
    }
}
