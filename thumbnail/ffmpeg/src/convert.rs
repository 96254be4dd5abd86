/*!
    FFmpeg frame conversion.
*/

use ffmpeg_next::util::format::Pixel;
use ffmpeg_next::util::frame::video::Video as VideoFrameFFmpeg;

use thumbnail_types::{Error, PixelFormat, Plane, Result, VideoFrame};

/**
    Convert an FFmpeg pixel format to our PixelFormat.

    The full-range "J" variants carry the same layout as their plain
    counterparts and map onto the same format.
*/
pub(crate) fn pixel_format_from_ffmpeg(format: Pixel) -> Option<PixelFormat> {
    match format {
        Pixel::RGBA => Some(PixelFormat::Rgba),
        Pixel::BGRA => Some(PixelFormat::Bgra),
        Pixel::RGB24 => Some(PixelFormat::Rgb24),
        Pixel::BGR24 => Some(PixelFormat::Bgr24),
        Pixel::GRAY8 => Some(PixelFormat::Gray8),
        Pixel::YUV420P | Pixel::YUVJ420P => Some(PixelFormat::Yuv420p),
        Pixel::YUV422P | Pixel::YUVJ422P => Some(PixelFormat::Yuv422p),
        Pixel::YUV444P | Pixel::YUVJ444P => Some(PixelFormat::Yuv444p),
        Pixel::NV12 => Some(PixelFormat::Nv12),
        _ => None,
    }
}

/**
    Convert an FFmpeg video frame to our VideoFrame type.

    Copies every pixel plane the format defines, stride included, along
    with the frame's metadata dictionary.
*/
pub(crate) fn convert_frame(frame: &VideoFrameFFmpeg) -> Result<VideoFrame> {
    let ffmpeg_format = frame.format();
    let format = pixel_format_from_ffmpeg(ffmpeg_format).ok_or_else(|| {
        Error::unsupported_format(format!("unsupported pixel format: {ffmpeg_format:?}"))
    })?;

    let width = frame.width();
    let height = frame.height();
    if width == 0 || height == 0 {
        return Err(Error::invalid_data("video frame has zero dimensions"));
    }

    let mut planes = Vec::with_capacity(format.plane_count());
    for i in 0..format.plane_count() {
        planes.push(Plane::new(frame.data(i).to_vec(), frame.stride(i)));
    }

    let mut converted = VideoFrame::new(width, height, format, planes);
    for (key, value) in frame.metadata().iter() {
        converted.metadata.push((key.to_owned(), value.to_owned()));
    }
    Ok(converted)
}
