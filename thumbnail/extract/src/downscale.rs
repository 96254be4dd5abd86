/*!
    Box downscaling of a supersampled image.

    Direct nearest-neighbor sampling at large reduction ratios aliases
    badly, and a full convolution filter costs more than a thumbnail is
    worth. The compromise: point-resample to 4x the target size first,
    then average each 4x4 block down to one output pixel.
*/

use thumbnail_types::{Buffer, Dims, Error, Result};

/// Supersampling factor per axis before the box downscale.
pub const SUPERSAMPLE_FACTOR: u32 = 4;

/// Nominal pixel count of one box, the fixed averaging divisor.
const BOX_PIXELS: u16 = (SUPERSAMPLE_FACTOR * SUPERSAMPLE_FACTOR) as u16;

/// Per-block channel sums. u16 fits the max value of 255 * 16.
#[derive(Clone, Copy, Default)]
struct PixelSum {
    r: u16,
    g: u16,
    b: u16,
    a: u16,
}

/**
    Box-downscale a supersampled buffer to the target size.

    The source must be exactly [`SUPERSAMPLE_FACTOR`] times the target in
    both dimensions. Fully transparent source pixels are skipped, but the
    channel sums are still divided by the fixed box size of 16 — blocks
    dominated by transparency average towards black. Known quirk, kept
    for output compatibility.
*/
pub fn downscale(src: &Buffer, target: Dims) -> Result<Buffer> {
    if src.width() != target.width * SUPERSAMPLE_FACTOR
        || src.height() != target.height * SUPERSAMPLE_FACTOR
    {
        return Err(Error::invalid_data(format!(
            "source {}x{} is not {SUPERSAMPLE_FACTOR}x the target {}x{}",
            src.width(),
            src.height(),
            target.width,
            target.height,
        )));
    }

    let width = target.width as usize;
    let mut sums = vec![PixelSum::default(); width * target.height as usize];

    for y in 0..src.height() {
        let dest_y = (y / SUPERSAMPLE_FACTOR) as usize;
        for x in 0..src.width() {
            let [r, g, b, a] = src.pixel(x, y);
            // Skip pixels with maxed transparency
            if a != 0 {
                let p = &mut sums[dest_y * width + (x / SUPERSAMPLE_FACTOR) as usize];
                p.r += u16::from(r);
                p.g += u16::from(g);
                p.b += u16::from(b);
                p.a += u16::from(a);
            }
        }
    }

    let mut dst = Buffer::alloc(target.width, target.height)?;
    for y in 0..target.height {
        for x in 0..target.width {
            let p = sums[y as usize * width + x as usize];
            dst.set_pixel(
                x,
                y,
                [
                    (p.r / BOX_PIXELS) as u8,
                    (p.g / BOX_PIXELS) as u8,
                    (p.b / BOX_PIXELS) as u8,
                    (p.a / BOX_PIXELS) as u8,
                ],
            );
        }
    }
    Ok(dst)
}
