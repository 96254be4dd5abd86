/*!
    Frame sampling from a decode backend.
*/

use log::{debug, warn};

use thumbnail_types::{DecodeBackend, Result, VideoFrame};

/**
    Configuration for frame sampling.
*/
#[derive(Clone, Copy, Debug)]
pub struct SamplerConfig {
    /// Maximum number of candidate frames to collect.
    pub max_frames: usize,
    /// Keep one out of every `stride` decoded frames, to cover a larger
    /// time window than consecutive frames would.
    pub stride: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_frames: 10,
            stride: 3,
        }
    }
}

/**
    Read packets from the backend until a full frame is decoded.

    Packets on other streams are discarded. The decoder may consume
    several packets before emitting a frame; this loops until it does,
    or until the backend reports EOF or a hard error.
*/
fn read_frame<B: DecodeBackend>(backend: &mut B) -> Result<VideoFrame> {
    loop {
        let packet = backend.read_packet()?;
        if backend.packet_stream_index(&packet) != backend.target_stream() {
            continue;
        }
        if let Some(frame) = backend.decode(&packet)? {
            return Ok(frame);
        }
    }
}

/**
    Pull a bounded, strided set of candidate frames from the backend.

    Collects every `stride`-th frame decoded on the target stream, up to
    `max_frames`. If the stream ends or the decoder fails before the
    first frame, the terminating condition is returned as an error. Once
    at least one frame has been collected, any subsequent failure is
    swallowed and the partial set is returned.
*/
pub fn sample_frames<B: DecodeBackend>(
    backend: &mut B,
    config: &SamplerConfig,
) -> Result<Vec<VideoFrame>> {
    let mut frames = Vec::new();
    let mut decoded = 0usize;

    loop {
        match read_frame(backend) {
            Ok(frame) => {
                if decoded % config.stride == 0 {
                    frames.push(frame);
                    if frames.len() == config.max_frames {
                        break;
                    }
                }
                decoded += 1;
            }
            Err(e) if frames.is_empty() => return Err(e),
            Err(e) => {
                if e.is_eof() {
                    debug!("stream ended after {} candidate frames", frames.len());
                } else {
                    warn!(
                        "read error after {} candidate frames, continuing: {e}",
                        frames.len()
                    );
                }
                break;
            }
        }
    }

    Ok(frames)
}
