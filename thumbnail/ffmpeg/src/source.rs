/*!
    FFmpeg decode source.
*/

use std::path::Path;

use ffmpeg_next::{
    codec::{self, decoder::Video as VideoDecoderFFmpeg},
    ffi,
    format::{self, context::Input},
    media,
    util::frame::video::Video as VideoFrameFFmpeg,
};

use log::debug;

use thumbnail_types::{DecodeBackend, Error, Result, VideoFrame};

use crate::convert::convert_frame;

/**
    A decode backend over an FFmpeg input container.

    Opens a container, selects the best video stream and sets up a
    software decoder for it. Not reentrant; use one source per
    extraction run.
*/
pub struct FfmpegSource {
    input: Input,
    decoder: VideoDecoderFFmpeg,
    stream_index: usize,
}

impl FfmpegSource {
    /**
        Open a media file and prepare its best video stream for decoding.
    */
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        ffmpeg_next::init().map_err(|e| Error::codec(e.to_string()))?;

        let path = path.as_ref();
        let input = format::input(path).map_err(|e| Error::invalid_data(e.to_string()))?;

        let (stream_index, parameters) = {
            let stream = input
                .streams()
                .best(media::Type::Video)
                .ok_or_else(|| Error::invalid_data("no video stream in container"))?;
            (stream.index(), stream.parameters())
        };

        let decoder_ctx = codec::context::Context::from_parameters(parameters)
            .map_err(|e| Error::codec(e.to_string()))?;
        let decoder = decoder_ctx
            .decoder()
            .video()
            .map_err(|e| Error::codec(e.to_string()))?;

        debug!(
            "opened {} with video stream {stream_index}",
            path.display()
        );

        Ok(Self {
            input,
            decoder,
            stream_index,
        })
    }
}

impl DecodeBackend for FfmpegSource {
    type Packet = ffmpeg_next::Packet;

    fn read_packet(&mut self) -> Result<ffmpeg_next::Packet> {
        let mut packet = ffmpeg_next::Packet::empty();
        match packet.read(&mut self.input) {
            Ok(()) => Ok(packet),
            Err(ffmpeg_next::Error::Eof) => Err(Error::Eof),
            Err(e) => Err(Error::codec(e.to_string())),
        }
    }

    fn packet_stream_index(&self, packet: &ffmpeg_next::Packet) -> usize {
        packet.stream()
    }

    fn target_stream(&self) -> usize {
        self.stream_index
    }

    fn decode(&mut self, packet: &ffmpeg_next::Packet) -> Result<Option<VideoFrame>> {
        self.decoder
            .send_packet(packet)
            .map_err(|e| Error::codec(e.to_string()))?;

        let mut decoded = VideoFrameFFmpeg::empty();
        match self.decoder.receive_frame(&mut decoded) {
            Ok(()) => convert_frame(&decoded).map(Some),
            Err(ffmpeg_next::Error::Other { errno }) if errno == ffi::AVERROR(ffi::EAGAIN) => {
                Ok(None)
            }
            Err(ffmpeg_next::Error::Eof) => Err(Error::Eof),
            Err(e) => Err(Error::codec(e.to_string())),
        }
    }

    fn stream_rotation(&self) -> Option<i64> {
        let stream = self.input.stream(self.stream_index)?;
        stream
            .metadata()
            .get("rotate")
            .and_then(|v| v.parse().ok())
    }
}

impl std::fmt::Debug for FfmpegSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegSource")
            .field("stream_index", &self.stream_index)
            .field("width", &self.decoder.width())
            .field("height", &self.decoder.height())
            .finish_non_exhaustive()
    }
}
