/*!
    Point resampling and RGBA conversion.
*/

use thumbnail_types::{Buffer, Dims, Error, PixelFormat, Result, VideoFrame};

/**
    Point-resample a decoded frame into an RGBA8 buffer of the given size.

    Nearest-neighbor sampling with no interpolation. Pixel format
    conversion happens per sampled pixel; YUV formats are converted with
    BT.601 coefficients.
*/
pub fn resample(frame: &VideoFrame, target: Dims) -> Result<Buffer> {
    if frame.width == 0 || frame.height == 0 {
        return Err(Error::invalid_data("frame has zero dimensions"));
    }
    validate_planes(frame)?;

    let mut dst = Buffer::alloc(target.width, target.height)?;
    for y in 0..target.height {
        let sy = (u64::from(y) * u64::from(frame.height) / u64::from(target.height)) as u32;
        for x in 0..target.width {
            let sx = (u64::from(x) * u64::from(frame.width) / u64::from(target.width)) as u32;
            dst.set_pixel(x, y, fetch_rgba(frame, sx, sy));
        }
    }
    Ok(dst)
}

/**
    Check that the frame carries the planes its format requires and that
    each one covers the rows the sampler will touch.
*/
fn validate_planes(frame: &VideoFrame) -> Result<()> {
    let format = frame.format;
    if frame.planes.len() < format.plane_count() {
        return Err(Error::invalid_data(format!(
            "{format:?} frame has {} of {} planes",
            frame.planes.len(),
            format.plane_count(),
        )));
    }

    let width = frame.width as usize;
    let height = frame.height as usize;
    for (i, plane) in frame.planes.iter().take(format.plane_count()).enumerate() {
        let (cols, rows) = plane_extent(format, i, width, height);
        if plane.stride < cols || plane.data.len() < plane.stride * (rows - 1) + cols {
            return Err(Error::invalid_data(format!(
                "{format:?} plane {i} too short for {width}x{height}"
            )));
        }
    }
    Ok(())
}

/// Required bytes-per-row and row count of one plane.
fn plane_extent(format: PixelFormat, plane: usize, width: usize, height: usize) -> (usize, usize) {
    match format {
        PixelFormat::Rgba | PixelFormat::Bgra => (width * 4, height),
        PixelFormat::Rgb24 | PixelFormat::Bgr24 => (width * 3, height),
        PixelFormat::Gray8 => (width, height),
        PixelFormat::Yuv420p => {
            if plane == 0 {
                (width, height)
            } else {
                (width.div_ceil(2), height.div_ceil(2))
            }
        }
        PixelFormat::Yuv422p => {
            if plane == 0 {
                (width, height)
            } else {
                (width.div_ceil(2), height)
            }
        }
        PixelFormat::Yuv444p => (width, height),
        PixelFormat::Nv12 => {
            if plane == 0 {
                (width, height)
            } else {
                (width.div_ceil(2) * 2, height.div_ceil(2))
            }
        }
    }
}

/// Read one source pixel as RGBA. Coordinates must be in bounds.
fn fetch_rgba(frame: &VideoFrame, x: u32, y: u32) -> [u8; 4] {
    let x = x as usize;
    let y = y as usize;
    let p0 = &frame.planes[0];

    match frame.format {
        PixelFormat::Rgba => {
            let i = y * p0.stride + x * 4;
            [p0.data[i], p0.data[i + 1], p0.data[i + 2], p0.data[i + 3]]
        }
        PixelFormat::Bgra => {
            let i = y * p0.stride + x * 4;
            [p0.data[i + 2], p0.data[i + 1], p0.data[i], p0.data[i + 3]]
        }
        PixelFormat::Rgb24 => {
            let i = y * p0.stride + x * 3;
            [p0.data[i], p0.data[i + 1], p0.data[i + 2], 255]
        }
        PixelFormat::Bgr24 => {
            let i = y * p0.stride + x * 3;
            [p0.data[i + 2], p0.data[i + 1], p0.data[i], 255]
        }
        PixelFormat::Gray8 => {
            let v = p0.data[y * p0.stride + x];
            [v, v, v, 255]
        }
        PixelFormat::Yuv420p => {
            let luma = p0.data[y * p0.stride + x];
            let u = frame.planes[1].data[(y / 2) * frame.planes[1].stride + x / 2];
            let v = frame.planes[2].data[(y / 2) * frame.planes[2].stride + x / 2];
            yuv_to_rgba(luma, u, v)
        }
        PixelFormat::Yuv422p => {
            let luma = p0.data[y * p0.stride + x];
            let u = frame.planes[1].data[y * frame.planes[1].stride + x / 2];
            let v = frame.planes[2].data[y * frame.planes[2].stride + x / 2];
            yuv_to_rgba(luma, u, v)
        }
        PixelFormat::Yuv444p => {
            let luma = p0.data[y * p0.stride + x];
            let u = frame.planes[1].data[y * frame.planes[1].stride + x];
            let v = frame.planes[2].data[y * frame.planes[2].stride + x];
            yuv_to_rgba(luma, u, v)
        }
        PixelFormat::Nv12 => {
            let luma = p0.data[y * p0.stride + x];
            let i = (y / 2) * frame.planes[1].stride + (x / 2) * 2;
            let u = frame.planes[1].data[i];
            let v = frame.planes[1].data[i + 1];
            yuv_to_rgba(luma, u, v)
        }
    }
}

/// BT.601 full-range YUV to RGBA.
fn yuv_to_rgba(y: u8, u: u8, v: u8) -> [u8; 4] {
    let y = f32::from(y);
    let u = f32::from(u) - 128.0;
    let v = f32::from(v) - 128.0;

    let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
    let g = (y - 0.344_136 * u - 0.714_136 * v).clamp(0.0, 255.0) as u8;
    let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;
    [r, g, b, 255]
}

#[cfg(test)]
mod tests {
    use super::*;
    use thumbnail_types::Plane;

    fn rgba_frame(pixels: &[[u8; 4]], width: u32, height: u32) -> VideoFrame {
        let mut data = Vec::new();
        for px in pixels {
            data.extend_from_slice(px);
        }
        VideoFrame::new(
            width,
            height,
            PixelFormat::Rgba,
            vec![Plane::new(data, width as usize * 4)],
        )
    }

    #[test]
    fn identity_resample_preserves_pixels() {
        let frame = rgba_frame(
            &[
                [1, 2, 3, 4],
                [5, 6, 7, 8],
                [9, 10, 11, 12],
                [13, 14, 15, 16],
            ],
            2,
            2,
        );
        let buf = resample(&frame, Dims::new(2, 2)).unwrap();
        assert_eq!(buf.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(buf.pixel(1, 0), [5, 6, 7, 8]);
        assert_eq!(buf.pixel(0, 1), [9, 10, 11, 12]);
        assert_eq!(buf.pixel(1, 1), [13, 14, 15, 16]);
    }

    #[test]
    fn nearest_neighbor_upscale() {
        let frame = rgba_frame(&[[10, 0, 0, 255], [0, 20, 0, 255]], 2, 1);
        let buf = resample(&frame, Dims::new(4, 2)).unwrap();
        // Left half samples source pixel 0, right half pixel 1, both rows alike.
        for y in 0..2 {
            assert_eq!(buf.pixel(0, y), [10, 0, 0, 255]);
            assert_eq!(buf.pixel(1, y), [10, 0, 0, 255]);
            assert_eq!(buf.pixel(2, y), [0, 20, 0, 255]);
            assert_eq!(buf.pixel(3, y), [0, 20, 0, 255]);
        }
    }

    #[test]
    fn nearest_neighbor_downscale() {
        // 4 columns striped ABAB; halving the width keeps columns 0 and 2.
        let frame = rgba_frame(
            &[
                [1, 1, 1, 255],
                [2, 2, 2, 255],
                [3, 3, 3, 255],
                [4, 4, 4, 255],
            ],
            4,
            1,
        );
        let buf = resample(&frame, Dims::new(2, 1)).unwrap();
        assert_eq!(buf.pixel(0, 0), [1, 1, 1, 255]);
        assert_eq!(buf.pixel(1, 0), [3, 3, 3, 255]);
    }

    #[test]
    fn bgra_channel_swap() {
        let frame = VideoFrame::new(
            1,
            1,
            PixelFormat::Bgra,
            vec![Plane::new(vec![10, 20, 30, 40], 4)],
        );
        let buf = resample(&frame, Dims::new(1, 1)).unwrap();
        assert_eq!(buf.pixel(0, 0), [30, 20, 10, 40]);
    }

    #[test]
    fn rgb24_gets_opaque_alpha() {
        let frame = VideoFrame::new(
            1,
            1,
            PixelFormat::Rgb24,
            vec![Plane::new(vec![10, 20, 30], 3)],
        );
        let buf = resample(&frame, Dims::new(1, 1)).unwrap();
        assert_eq!(buf.pixel(0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn gray_to_white() {
        let frame = VideoFrame::new(1, 1, PixelFormat::Gray8, vec![Plane::new(vec![255], 1)]);
        let buf = resample(&frame, Dims::new(1, 1)).unwrap();
        assert_eq!(buf.pixel(0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn yuv420p_gray_midpoint() {
        // Y=128, U=V=128 is mid gray in BT.601.
        let frame = VideoFrame::new(
            2,
            2,
            PixelFormat::Yuv420p,
            vec![
                Plane::new(vec![128; 4], 2),
                Plane::new(vec![128], 1),
                Plane::new(vec![128], 1),
            ],
        );
        let buf = resample(&frame, Dims::new(2, 2)).unwrap();
        assert_eq!(buf.pixel(0, 0), [128, 128, 128, 255]);
        assert_eq!(buf.pixel(1, 1), [128, 128, 128, 255]);
    }

    #[test]
    fn yuv420p_red() {
        // Pure red in BT.601 full range: Y=76, U=84, V=255.
        let frame = VideoFrame::new(
            2,
            2,
            PixelFormat::Yuv420p,
            vec![
                Plane::new(vec![76; 4], 2),
                Plane::new(vec![84], 1),
                Plane::new(vec![255], 1),
            ],
        );
        let buf = resample(&frame, Dims::new(2, 2)).unwrap();
        let [r, g, b, a] = buf.pixel(0, 0);
        assert!(r >= 250, "r = {r}");
        assert!(g <= 10, "g = {g}");
        assert!(b <= 10, "b = {b}");
        assert_eq!(a, 255);
    }

    #[test]
    fn respects_stride_padding() {
        // Gray8, 2 wide with stride 4; padding bytes must not be sampled.
        let frame = VideoFrame::new(
            2,
            1,
            PixelFormat::Gray8,
            vec![Plane::new(vec![9, 8, 99, 99], 4)],
        );
        let buf = resample(&frame, Dims::new(2, 1)).unwrap();
        assert_eq!(buf.pixel(0, 0), [9, 9, 9, 255]);
        assert_eq!(buf.pixel(1, 0), [8, 8, 8, 255]);
    }

    #[test]
    fn missing_planes_rejected() {
        let frame = VideoFrame::new(
            2,
            2,
            PixelFormat::Yuv420p,
            vec![Plane::new(vec![128; 4], 2)],
        );
        let err = resample(&frame, Dims::new(2, 2)).unwrap_err();
        assert!(matches!(err, Error::InvalidData { .. }));
    }

    #[test]
    fn short_plane_rejected() {
        let frame = VideoFrame::new(4, 4, PixelFormat::Rgba, vec![Plane::new(vec![0; 8], 16)]);
        let err = resample(&frame, Dims::new(4, 4)).unwrap_err();
        assert!(matches!(err, Error::InvalidData { .. }));
    }
}
