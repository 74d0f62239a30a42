//! Error type shared by every fallible buffer operation.
use core::fmt::{self, Display};

#[cfg(feature = "std")]
use std::error;

/// The error returned when a [`ByteBuffer`] operation is rejected.
///
/// A failed operation never leaves the buffer half-modified: its length, capacity and
/// content are the ones it had before the call.
///
/// [`ByteBuffer`]: crate::ByteBuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The allocator refused the request, or the requested size is above
    /// [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    OutOfMemory,
    /// A formatting trait implementation reported an error while writing into the
    /// buffer.
    FormattingFailed,
    /// A precondition of the call was not met.
    InvalidArgument(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfMemory => f.pad("No memory"),
            Error::FormattingFailed => f.pad("Buf formatting failed"),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(_doc, doc(cfg(feature = "std")))]
impl error::Error for Error {}
