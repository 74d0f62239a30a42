/// Appends formatted text to a [`ByteBuffer`].
///
/// `bufwrite!` takes a buffer followed by the same arguments as [`format!`]. It expands
/// to a call to [`ByteBuffer::push_fmt`] and evaluates to its result: the number of bytes
/// written, or the [`Error`] that rejected the write.
///
/// ```
/// use iobuf::{bufwrite, ByteBuffer};
///
/// let mut buff = ByteBuffer::new(4)?;
///
/// assert_eq!(bufwrite!(buff, "{}-{}", 3, 100)?, 5);
/// assert_eq!(bufwrite!(buff, "!")?, 1);
/// assert_eq!(buff, "3-100!");
/// # Ok::<(), iobuf::Error>(())
/// ```
///
/// The buffer is borrowed mutably for the call. To write through a `&mut ByteBuffer`,
/// pass the dereferenced place: `bufwrite!(*buf, ...)`.
///
/// [`ByteBuffer`]: ./types/buffer/struct.ByteBuffer.html
/// [`ByteBuffer::push_fmt`]: ./types/buffer/struct.ByteBuffer.html#method.push_fmt
/// [`Error`]: ./error/enum.Error.html
/// [`format!`]: https://doc.rust-lang.org/std/macro.format.html
#[macro_export]
macro_rules! bufwrite {
    ($buf: expr, $($arg: tt)*) => {
        $crate::types::ByteBuffer::push_fmt(&mut $buf, ::core::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::{ByteBuffer, Error};

    #[test]
    fn through_reference() -> Result<(), Error> {
        fn fill(buff: &mut ByteBuffer) -> Result<usize, Error> {
            bufwrite!(*buff, "{:>4}|{:<4}|", 1, "ab")
        }

        let mut buff = ByteBuffer::new(8)?;
        assert_eq!(fill(&mut buff)?, 10);
        assert_eq!(buff, "   1|ab  |");
        Ok(())
    }

    #[test]
    fn named_arguments() -> Result<(), Error> {
        let mut buff = ByteBuffer::new(3)?;
        let name = "buf";

        bufwrite!(buff, "{name}:{len:02x}", len = 255)?;
        assert_eq!(buff, "buf:ff");
        assert_eq!(buff.capacity(), 6);
        Ok(())
    }
}
