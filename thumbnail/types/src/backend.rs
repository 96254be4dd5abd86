/*!
    Decode backend interface.
*/

use crate::{Result, VideoFrame};

/**
    Interface to a decode backend (demuxer + decoder).

    A backend owns a positioned container handle and a decoder for one
    selected video stream. The extraction core drives it with a simple
    pull model:

    1. [`read_packet`] pulls the next container packet, from any stream.
    2. Packets on other streams are discarded by the caller; packets on
       [`target_stream`] are fed to [`decode`].
    3. [`decode`] returns `Ok(Some(frame))` when a frame is complete,
       `Ok(None)` when the decoder needs more input, and `Err` on a hard
       decode failure.

    Backends are not required to be reentrant. A backend handle must not
    be shared between concurrent extraction runs.

    [`read_packet`]: DecodeBackend::read_packet
    [`target_stream`]: DecodeBackend::target_stream
    [`decode`]: DecodeBackend::decode
*/
pub trait DecodeBackend {
    /// Opaque container packet type.
    type Packet;

    /**
        Pull the next packet from the container.

        Returns [`Error::Eof`] when the container is exhausted.

        [`Error::Eof`]: crate::Error::Eof
    */
    fn read_packet(&mut self) -> Result<Self::Packet>;

    /**
        The stream index a packet belongs to.
    */
    fn packet_stream_index(&self, packet: &Self::Packet) -> usize;

    /**
        The index of the video stream being extracted from.
    */
    fn target_stream(&self) -> usize;

    /**
        Feed one packet to the decoder.

        Returns `Ok(Some(frame))` if the packet completed a frame,
        `Ok(None)` if the decoder needs more input before it can emit
        one, and `Err` on a hard decode failure.
    */
    fn decode(&mut self, packet: &Self::Packet) -> Result<Option<VideoFrame>>;

    /**
        Container-level rotation of the target stream in degrees, if the
        container carries a "rotate" tag.
    */
    fn stream_rotation(&self) -> Option<i64>;
}
