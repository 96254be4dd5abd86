/*!
    Error types for the thumbnail crate ecosystem.
*/

use std::fmt;

/**
    Error type for the thumbnail crate ecosystem.
*/
#[derive(Debug)]
pub enum Error {
    /// Underlying I/O failure while reading the container
    Io(std::io::Error),
    /// The demuxer or decoder reported a failure
    Codec { message: String },
    /// Input that does not hold together (truncated planes, zero sizes)
    InvalidData { message: String },
    /// Input in a format the pipeline cannot convert
    UnsupportedFormat { message: String },
    /// A pixel buffer of this many bytes could not be allocated
    Allocation { bytes: usize },
    /// End of stream; terminates the read loop rather than signaling a fault
    Eof,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Codec { message } => write!(f, "codec error: {message}"),
            Self::InvalidData { message } => write!(f, "invalid data: {message}"),
            Self::UnsupportedFormat { message } => write!(f, "unsupported format: {message}"),
            Self::Allocation { bytes } => write!(f, "allocation of {bytes} bytes failed"),
            Self::Eof => write!(f, "end of stream"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl Error {
    /**
        Create a codec error with the given message.
    */
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
        }
    }

    /**
        Create an invalid data error with the given message.
    */
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /**
        Create an unsupported format error with the given message.
    */
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /**
        Create an allocation error for the requested byte count.
    */
    pub fn allocation(bytes: usize) -> Self {
        Self::Allocation { bytes }
    }

    /**
        Returns true for the end-of-stream marker.

        Used by the frame sampler to tell an exhausted container apart
        from a decode failure.
    */
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

/**
    Result type alias for the thumbnail crate ecosystem.
*/
pub type Result<T> = std::result::Result<T, Error>;
