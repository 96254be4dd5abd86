/*!
    Alpha compensation.
*/

use thumbnail_types::Buffer;

/**
    Darken partially transparent pixels in place.

    Color channels of every pixel with alpha below 255 are scaled by
    `alpha / 255`; alpha itself is left untouched. Without this, bright
    colors behind low alpha produce fringing when the thumbnail is later
    composited over a darker background.
*/
pub fn compensate_alpha(img: &mut Buffer) {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let mut px = img.pixel(x, y);
            let alpha = px[3];
            if alpha != 255 {
                let scale = f32::from(alpha) / 255.0;
                for ch in &mut px[..3] {
                    *ch = (f32::from(*ch) * scale).min(255.0) as u8;
                }
                img.set_pixel(x, y, px);
            }
        }
    }
}
