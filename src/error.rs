use std::error::Error;
use std::fmt;
use std::io;

/// Errors that the encoder core itself can produce.
///
/// This is exhaustive for what [`crate::encode`] can return: every variant is either a problem
/// with the caller's input or (for [`EncodeError::EncodingFailed`]) an internal invariant failure
/// in the ECC step. The core never performs I/O and never logs; callers decide what to do with
/// the error.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EncodeError {
    /// A numeric input was outside its declared range (see the data model in SPEC_FULL.md).
    InvalidField(&'static str),

    /// More payload bits remained to be placed than there were non-reserved modules to hold them.
    ///
    /// Does not occur for the standard 21x21 grid and 280-bit main payload, but is detected
    /// defensively rather than assumed.
    PayloadOverflow,

    /// The Reed-Solomon codec rejected a data block it should always accept.
    EncodingFailed(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use self::EncodeError::*;
        match self {
            InvalidField(name) => write!(fmt, "field `{name}` is outside its valid range"),
            PayloadOverflow => write!(
                fmt,
                "payload has more bits than the grid has non-reserved modules"
            ),
            EncodingFailed(reason) => write!(fmt, "Reed-Solomon encoding failed: {reason}"),
        }
    }
}

impl Error for EncodeError {}

/// Errors from the ambient layers (CLI, batch config, file I/O) that wrap the core's
/// [`EncodeError`] alongside environment-facing failures the core itself never produces.
#[derive(Debug)]
#[non_exhaustive]
pub enum GpTagError {
    /// The encoder core rejected the assembled parameters.
    Encode(EncodeError),

    /// Reading or writing a file (a tag image, or a batch config) failed.
    Io(io::Error),

    /// A batch config file or CLI flag combination could not be parsed into valid parameters.
    Config(String),

    /// The `image` crate failed to serialize the rendered raster.
    ImageWrite(String),
}

impl fmt::Display for GpTagError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use self::GpTagError::*;
        match self {
            Encode(e) => write!(fmt, "{e}"),
            Io(e) => write!(fmt, "I/O error: {e}"),
            Config(msg) => write!(fmt, "configuration error: {msg}"),
            ImageWrite(msg) => write!(fmt, "failed to write image: {msg}"),
        }
    }
}

impl Error for GpTagError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GpTagError::Encode(e) => Some(e),
            GpTagError::Io(e) => Some(e),
            GpTagError::Config(_) | GpTagError::ImageWrite(_) => None,
        }
    }
}

impl From<EncodeError> for GpTagError {
    fn from(err: EncodeError) -> GpTagError {
        GpTagError::Encode(err)
    }
}

impl From<io::Error> for GpTagError {
    fn from(err: io::Error) -> GpTagError {
        GpTagError::Io(err)
    }
}

/// Result type for the encoder core.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for the ambient CLI/batch layers.
pub type GpTagResult<T> = Result<T, GpTagError>;
