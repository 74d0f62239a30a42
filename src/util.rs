//! Byte level helpers shared by the buffer predicates.

/// Returns `true` if `byte` is in the C `isspace` set of the "C" locale: space, `\t`,
/// `\n`, `\v`, `\f` and `\r`.
///
/// Unlike [`u8::is_ascii_whitespace`], the vertical tab (`0x0B`) is included.
///
/// # Examples
/// ```
/// use iobuf::util::is_space;
///
/// assert!(is_space(b' '));
/// assert!(is_space(0x0B));
/// assert!(!is_space(b'a'));
/// ```
#[inline]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns the part of `bytes` before the first NUL byte, or all of `bytes` if there is
/// none.
///
/// # Examples
/// ```
/// use iobuf::util::until_nul;
///
/// assert_eq!(until_nul(b"abc\0def"), b"abc");
/// assert_eq!(until_nul(b"abc"), b"abc");
/// ```
#[inline]
pub fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}
