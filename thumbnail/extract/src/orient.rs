/*!
    Orientation correction.

    The thumbnail bitmap carries no metadata, so EXIF-style orientation
    has to be baked into the pixels. Mirrors and the 180 degree rotation
    work in place by swapping pixel quartets; the 90 and 270 degree
    rotations copy into a freshly allocated transposed buffer and swap
    the dimensions.
*/

use thumbnail_types::{Buffer, Orientation, Result, Transform};

/**
    Apply the transform steps of an orientation to a buffer.

    For transposing orientations the buffer's backing storage is replaced
    and its width and height are swapped.
*/
pub fn adjust_orientation(img: &mut Buffer, orientation: Orientation) -> Result<()> {
    for step in orientation.steps() {
        match step {
            Transform::MirrorHorizontal => mirror_horizontally(img),
            Transform::MirrorVertical => mirror_vertically(img),
            Transform::Rotate90 => rotate_90(img)?,
            Transform::Rotate180 => rotate_180(img),
            Transform::Rotate270 => rotate_270(img)?,
        }
    }
    Ok(())
}

fn mirror_horizontally(img: &mut Buffer) {
    let (width, height) = (img.width(), img.height());
    for y in 0..height {
        for x in 0..width / 2 {
            img.swap_pixels((x, y), (width - 1 - x, y));
        }
    }
}

fn mirror_vertically(img: &mut Buffer) {
    let (width, height) = (img.width(), img.height());
    for y in 0..height / 2 {
        for x in 0..width {
            img.swap_pixels((x, y), (x, height - 1 - y));
        }
    }
}

fn rotate_180(img: &mut Buffer) {
    let (width, height) = (img.width(), img.height());
    for y in 0..height / 2 {
        for x in 0..width {
            img.swap_pixels((x, y), (width - 1 - x, height - 1 - y));
        }
    }

    // The center row of an odd-height image has no partner row and is
    // reversed pairwise instead.
    if height % 2 == 1 {
        let y = height / 2;
        for x in 0..width / 2 {
            img.swap_pixels((x, y), (width - 1 - x, y));
        }
    }
}

fn rotate_90(img: &mut Buffer) -> Result<()> {
    let (width, height) = (img.width(), img.height());
    let mut out = Buffer::alloc(height, width)?;
    for y in 0..height {
        for x in 0..width {
            out.set_pixel(height - 1 - y, x, img.pixel(x, y));
        }
    }
    *img = out;
    Ok(())
}

fn rotate_270(img: &mut Buffer) -> Result<()> {
    let (width, height) = (img.width(), img.height());
    let mut out = Buffer::alloc(height, width)?;
    for y in 0..height {
        for x in 0..width {
            out.set_pixel(y, width - 1 - x, img.pixel(x, y));
        }
    }
    *img = out;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x3 buffer with a distinct value per pixel:
    ///
    /// ```text
    /// 1 2
    /// 3 4
    /// 5 6
    /// ```
    fn numbered() -> Buffer {
        let mut buf = Buffer::alloc(2, 3).unwrap();
        let mut n = 1;
        for y in 0..3 {
            for x in 0..2 {
                buf.set_pixel(x, y, [n, n, n, 255]);
                n += 1;
            }
        }
        buf
    }

    fn values(buf: &Buffer) -> Vec<u8> {
        (0..buf.height())
            .flat_map(|y| (0..buf.width()).map(move |x| (x, y)))
            .map(|(x, y)| buf.pixel(x, y)[0])
            .collect()
    }

    #[test]
    fn upright_is_a_no_op() {
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::Upright).unwrap();
        assert_eq!(values(&buf), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn mirror_horizontal() {
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::MirroredHorizontal).unwrap();
        assert_eq!(values(&buf), vec![2, 1, 4, 3, 6, 5]);
    }

    #[test]
    fn mirror_vertical() {
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::MirroredVertical).unwrap();
        assert_eq!(values(&buf), vec![5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn rotate_180_flips_both_axes() {
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::Rotated180).unwrap();
        assert_eq!(values(&buf), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn rotate_180_odd_dimensions() {
        // 3x3 with a center row that has to be reversed in place.
        let mut buf = Buffer::alloc(3, 3).unwrap();
        let mut n = 1;
        for y in 0..3 {
            for x in 0..3 {
                buf.set_pixel(x, y, [n, n, n, 255]);
                n += 1;
            }
        }
        adjust_orientation(&mut buf, Orientation::Rotated180).unwrap();
        assert_eq!(values(&buf), vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn rotate_90_transposes() {
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::Rotated90).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        // 1 2      5 3 1
        // 3 4  ->  6 4 2
        // 5 6
        assert_eq!(values(&buf), vec![5, 3, 1, 6, 4, 2]);
    }

    #[test]
    fn rotate_270_transposes() {
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::Rotated270).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        // 1 2      2 4 6
        // 3 4  ->  1 3 5
        // 5 6
        assert_eq!(values(&buf), vec![2, 4, 6, 1, 3, 5]);
    }

    #[test]
    fn rotate_180_twice_round_trips() {
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::Rotated180).unwrap();
        adjust_orientation(&mut buf, Orientation::Rotated180).unwrap();
        assert_eq!(buf, numbered());
    }

    #[test]
    fn rotate_90_then_270_round_trips() {
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::Rotated90).unwrap();
        adjust_orientation(&mut buf, Orientation::Rotated270).unwrap();
        assert_eq!(buf, numbered());
    }

    #[test]
    fn mirrored_rotated_composites() {
        // Code 7: mirror horizontally, then rotate 90 clockwise.
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::MirroredRotated90).unwrap();
        // 1 2    2 1      6 4 2
        // 3 4 -> 4 3  ->  5 3 1
        // 5 6    6 5
        assert_eq!(values(&buf), vec![6, 4, 2, 5, 3, 1]);

        // Code 5: mirror horizontally, then rotate 270 clockwise.
        let mut buf = numbered();
        adjust_orientation(&mut buf, Orientation::MirroredRotated270).unwrap();
        assert_eq!(values(&buf), vec![1, 3, 5, 2, 4, 6]);
    }
}
