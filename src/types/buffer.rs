//! Growable byte buffer type.
use core::{
    cmp::{min, Ordering},
    ffi::CStr,
    fmt::{self, Debug, Display, Write},
    num::NonZeroUsize,
    ops::{Index, IndexMut},
};

use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::{borrow::Cow, io};

use bstr::BStr;

#[cfg(feature = "std")]
use bstr::ByteSlice;

use super::{search::Finder, TryExtend};
use crate::{
    util::{is_space, until_nul},
    Error,
};

/// Hard ceiling on the capacity of any [`ByteBuffer`]: 16 MiB.
pub const MAX_CAPACITY: usize = 16 * 1024 * 1024;

/// Number of leading bytes rendered by the [`Debug`] implementation.
const INSPECT_BYTES: usize = 33;

/// A byte buffer that grows by a fixed, caller chosen unit.
///
/// Every time the buffer needs more room, its capacity grows by the smallest whole
/// number of growth units that fits the request, instead of doubling. A large unit
/// trades memory for fewer reallocations. The capacity never shrinks on its own and never
/// exceeds [`MAX_CAPACITY`].
///
/// The buffer is byte oriented: it may hold any sequence of bytes, including zeros.
///
/// # Examples
/// ```
/// use iobuf::ByteBuffer;
///
/// let mut buff = ByteBuffer::new(4)?;
/// buff.push_str("hello")?;
///
/// assert_eq!(buff.len(), 5);
/// assert_eq!(buff.capacity(), 8);
/// assert_eq!(buff, "hello");
/// # Ok::<(), iobuf::Error>(())
/// ```
///
/// Formatted writes go through the [`bufwrite!`](crate::bufwrite) macro:
///
/// ```
/// use iobuf::{bufwrite, ByteBuffer};
///
/// let mut buff = ByteBuffer::new(16)?;
/// bufwrite!(buff, "{}-{}", 3, 100)?;
///
/// assert_eq!(buff, "3-100");
/// # Ok::<(), iobuf::Error>(())
/// ```
pub struct ByteBuffer {
    /// Allocated storage. Its length is the buffer capacity, so every byte up to the
    /// capacity is initialized.
    data: Vec<u8>,
    len:  usize,
    unit: NonZeroUsize,
}

impl ByteBuffer {
    /// Creates an empty [`ByteBuffer`] that grows by `unit` bytes at a time.
    ///
    /// It does not allocate until it is first pushed into.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `unit` is zero.
    ///
    /// # Examples
    /// ```
    /// use iobuf::{ByteBuffer, Error};
    ///
    /// let buff = ByteBuffer::new(64)?;
    /// assert_eq!(buff.capacity(), 0);
    ///
    /// assert!(matches!(ByteBuffer::new(0), Err(Error::InvalidArgument(_))));
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[inline]
    pub fn new(unit: usize) -> Result<Self, Error> {
        NonZeroUsize::new(unit)
            .map(Self::with_unit)
            .ok_or(Error::InvalidArgument("buf unit should not be 0"))
    }

    /// Creates an empty [`ByteBuffer`] with a growth unit that is known to be valid.
    #[inline]
    pub const fn with_unit(unit: NonZeroUsize) -> Self {
        Self {
            data: Vec::new(),
            len: 0,
            unit,
        }
    }

    /// Creates a [`ByteBuffer`] growing by `unit` holding a copy of `bytes`.
    ///
    /// # Errors
    /// Fails like [`new`](Self::new) and [`push_bytes`](Self::push_bytes).
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn from_bytes(unit: usize, bytes: impl AsRef<[u8]>) -> Result<Self, Error> {
        let mut buff = Self::new(unit)?;
        buff.push_bytes(bytes.as_ref())?;
        Ok(buff)
    }

    /// Returns the growth unit of the buffer.
    #[inline]
    pub const fn unit(&self) -> usize {
        self.unit.get()
    }

    /// Returns the number of bytes the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes in the buffer, also referred to as its 'length'.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let mut buff = ByteBuffer::new(8)?;
    /// assert_eq!(buff.len(), 0);
    /// buff.push_u8(b'c')?;
    /// assert_eq!(buff.len(), 1);
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer contains no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ensures the buffer can hold `target` bytes, returning the resulting capacity.
    ///
    /// If the capacity is already large enough this does nothing. Otherwise the capacity
    /// grows to the smallest `capacity + k * unit` (with `k >= 1`) that is at least
    /// `target`, keeping the current content.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the new capacity would be above
    /// [`MAX_CAPACITY`] or the allocator refuses the request. The buffer is left
    /// untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use iobuf::{ByteBuffer, Error, MAX_CAPACITY};
    ///
    /// let mut buff = ByteBuffer::new(10)?;
    /// assert_eq!(buff.grow(25)?, 30);
    /// assert_eq!(buff.grow(5)?, 30);
    /// assert_eq!(buff.grow(MAX_CAPACITY + 1), Err(Error::OutOfMemory));
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    pub fn grow(&mut self, target: usize) -> Result<usize, Error> {
        let capacity = self.capacity();

        if target <= capacity {
            return Ok(capacity);
        }

        if target > MAX_CAPACITY {
            tracing::debug!(
                requested = target,
                max = MAX_CAPACITY,
                "buffer growth above ceiling refused"
            );
            return Err(Error::OutOfMemory);
        }

        let unit = self.unit();
        let missing = target - capacity;
        let steps = missing / unit + usize::from(missing % unit != 0);

        let new_capacity = match steps
            .checked_mul(unit)
            .and_then(|extra| extra.checked_add(capacity))
        {
            Some(new_capacity) if new_capacity <= MAX_CAPACITY => new_capacity,
            _ => {
                tracing::debug!(
                    requested = target,
                    unit,
                    capacity,
                    "rounded buffer capacity above ceiling refused"
                );
                return Err(Error::OutOfMemory);
            },
        };

        if self.data.try_reserve_exact(new_capacity - capacity).is_err() {
            tracing::debug!(new_capacity, "allocator refused buffer growth");
            return Err(Error::OutOfMemory);
        }
        self.data.resize(new_capacity, 0);

        tracing::trace!(old = capacity, new = new_capacity, unit, "buffer grown");
        Ok(new_capacity)
    }

    /// Releases the storage of the buffer, resetting both length and capacity to zero.
    ///
    /// Returns the number of bytes the buffer held. Use [`truncate`](Self::truncate) to
    /// drop the content while keeping the allocation.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let mut buff = ByteBuffer::from_bytes(4, "Hello!")?;
    /// assert_eq!(buff.clear(), 6);
    /// assert!(buff.is_empty());
    /// assert_eq!(buff.capacity(), 0);
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[inline]
    pub fn clear(&mut self) -> usize {
        let len = self.len;
        self.data = Vec::new();
        self.len = 0;
        len
    }

    /// Shortens the buffer to `new_len` bytes, keeping the capacity.
    ///
    /// Does nothing if `new_len` is not lesser than the current length.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Append the given byte slice onto the end of the buffer, returning the number of
    /// bytes appended.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the buffer cannot grow to fit `bytes`; nothing
    /// is appended in that case.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let mut buff = ByteBuffer::new(4)?;
    /// assert_eq!(buff.push_bytes(b"abc")?, 3);
    /// assert_eq!(buff.push_bytes(b"")?, 0);
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        let new_len = self.len.checked_add(bytes.len()).ok_or(Error::OutOfMemory)?;
        self.grow(new_len)?;

        self.data[self.len..new_len].copy_from_slice(bytes);
        self.len = new_len;
        Ok(bytes.len())
    }

    /// Append the bytes of the given string slice onto the end of the buffer, returning
    /// the number of bytes appended.
    ///
    /// # Errors
    /// Fails like [`push_bytes`](Self::push_bytes).
    #[inline]
    pub fn push_str(&mut self, string: &str) -> Result<usize, Error> {
        self.push_bytes(string.as_bytes())
    }

    /// Append the given C string, without its terminator, onto the end of the buffer,
    /// returning the number of bytes appended.
    ///
    /// # Errors
    /// Fails like [`push_bytes`](Self::push_bytes).
    #[inline]
    pub fn push_cstr(&mut self, cstr: &CStr) -> Result<usize, Error> {
        self.push_bytes(cstr.to_bytes())
    }

    /// Append the given byte onto the end of the buffer.
    ///
    /// # Errors
    /// Fails like [`push_bytes`](Self::push_bytes).
    #[inline]
    pub fn push_u8(&mut self, byte: u8) -> Result<(), Error> {
        self.grow(self.len + 1)?;

        self.data[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Append formatted text onto the end of the buffer, returning the number of bytes
    /// written.
    ///
    /// The text is first formatted straight into the spare capacity. If it does not fit,
    /// the buffer grows to fit exactly the required length and the text is formatted
    /// again.
    /// Prefer the [`bufwrite!`](crate::bufwrite) macro to calling this directly.
    ///
    /// # Errors
    /// Returns [`Error::FormattingFailed`] if a formatting trait implementation returns
    /// an error, and [`Error::OutOfMemory`] if the buffer cannot grow to fit the text.
    /// The length of the buffer is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let mut buff = ByteBuffer::new(2)?;
    /// assert_eq!(buff.push_fmt(format_args!("{}-{}", 3, 100))?, 5);
    /// assert_eq!(buff, "3-100");
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        let needed = self.format_into_spare(args)?;

        if needed > self.capacity() - self.len {
            let target = self.len.checked_add(needed).ok_or(Error::OutOfMemory)?;
            self.grow(target)?;

            // A `Display` implementation may render differently the second time.
            if self.format_into_spare(args)? != needed {
                tracing::debug!(needed, "formatted output changed between passes");
                return Err(Error::FormattingFailed);
            }
        }

        self.len += needed;
        Ok(needed)
    }

    /// Formats `args` into the bytes past the length, returning the full length of the
    /// output even when it only partially fits.
    fn format_into_spare(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        let mut writer = SpareWriter {
            spare:   &mut self.data[self.len..],
            written: 0,
        };

        match writer.write_fmt(args) {
            Ok(()) => Ok(writer.written),
            Err(_) => {
                tracing::debug!("formatting trait reported an error");
                Err(Error::FormattingFailed)
            },
        }
    }

    /// Removes `count` bytes from the front of the buffer, shifting the rest to the
    /// start, and returns the number of bytes actually removed.
    ///
    /// If `count` is greater than the length, all bytes are removed and the former length
    /// is returned.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let mut buff = ByteBuffer::from_bytes(4, "abcdef")?;
    /// assert_eq!(buff.remove_front(2), 2);
    /// assert_eq!(buff, "cdef");
    /// assert_eq!(buff.remove_front(100), 4);
    /// assert!(buff.is_empty());
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove_front(&mut self, count: usize) -> usize {
        if count >= self.len {
            let len = self.len;
            self.len = 0;
            return len;
        }

        self.data.copy_within(count..self.len, 0);
        self.len -= count;
        count
    }

    /// Removes `count` bytes from the back of the buffer and returns the number of bytes
    /// actually removed.
    ///
    /// If `count` is greater than the length, all bytes are removed and the former length
    /// is returned.
    #[inline]
    pub fn remove_back(&mut self, count: usize) -> usize {
        let removed = min(count, self.len);
        self.len -= removed;
        removed
    }

    /// Set the length of the buffer to `new_len`, returning the final length.
    ///
    /// If `new_len` is lesser than the current length the buffer is truncated. If it is
    /// greater, the buffer grows and the gap is filled with ASCII spaces (`0x20`).
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the buffer cannot grow to `new_len`; the buffer
    /// is unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let mut buff = ByteBuffer::from_bytes(4, "ab")?;
    /// assert_eq!(buff.set_len(5)?, 5);
    /// assert_eq!(buff, "ab   ");
    /// assert_eq!(buff.set_len(1)?, 1);
    /// assert_eq!(buff, "a");
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    pub fn set_len(&mut self, new_len: usize) -> Result<usize, Error> {
        if new_len < self.len {
            self.remove_back(self.len - new_len);
        } else if new_len > self.len {
            self.grow(new_len)?;
            self.data[self.len..new_len].fill(b' ');
            self.len = new_len;
        }

        Ok(self.len)
    }

    /// Reverses the order of the bytes in the buffer, in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.as_bytes_mut().reverse();
    }

    /// Returns a byte slice of the [`ByteBuffer`] contents.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let buff = ByteBuffer::from_bytes(8, "hello")?;
    ///
    /// assert_eq!(&[104, 101, 108, 108, 111], buff.as_bytes());
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Returns a mutable byte slice of the [`ByteBuffer`] contents.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    /// Returns the contents followed by a NUL terminator.
    ///
    /// The terminator is stored right past the length without changing it. When the byte
    /// at that position is already NUL the storage is returned as is, so repeated calls
    /// are `O(1)`. Otherwise the buffer grows by one byte if it is full and the
    /// terminator is written.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the buffer is full and cannot grow.
    pub fn as_bytes_with_nul(&mut self) -> Result<&[u8], Error> {
        let terminated = self.len < self.capacity() && self.data[self.len] == 0;

        if !terminated {
            self.grow(self.len + 1)?;
            self.data[self.len] = 0;
        }

        Ok(&self.data[..=self.len])
    }

    /// Returns the contents as a C string.
    ///
    /// The C string ends at the first NUL byte of the contents, if there is one. See
    /// [`as_bytes_with_nul`](Self::as_bytes_with_nul) for how the terminator is placed.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the buffer is full and cannot grow.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let mut buff = ByteBuffer::from_bytes(4, "abcd")?;
    /// assert_eq!(buff.as_c_str()?.to_bytes(), b"abcd");
    /// assert_eq!(buff.len(), 4);
    /// assert_eq!(buff.capacity(), 8);
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    pub fn as_c_str(&mut self) -> Result<&CStr, Error> {
        let bytes = self.as_bytes_with_nul()?;
        let end = until_nul(bytes).len();
        debug_assert!(end < bytes.len());

        // SAFETY: `as_bytes_with_nul` always ends in NUL, so `end` is the index of the
        // first NUL and the slice has no interior NUL byte.
        Ok(unsafe { CStr::from_bytes_with_nul_unchecked(&bytes[..=end]) })
    }

    /// Compares the buffer with `other` as C strings.
    ///
    /// Both sides are read up to their first NUL byte, so bytes after an embedded NUL do
    /// not take part in the comparison. Bytes compare as unsigned values.
    ///
    /// # Examples
    /// ```
    /// use core::cmp::Ordering;
    /// use iobuf::ByteBuffer;
    ///
    /// let buff = ByteBuffer::from_bytes(4, "abc")?;
    ///
    /// assert_eq!(buff.compare("abd"), Ordering::Less);
    /// assert_eq!(buff.compare("ab"), Ordering::Greater);
    /// assert_eq!(buff.compare("abc\0zzz"), Ordering::Equal);
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[inline]
    pub fn compare(&self, other: impl AsRef<[u8]>) -> Ordering {
        until_nul(self.as_bytes()).cmp(until_nul(other.as_ref()))
    }

    /// Returns `true` if [`compare`](Self::compare) finds the buffer and `other` equal.
    #[inline]
    pub fn equals(&self, other: impl AsRef<[u8]>) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Returns `true` if the buffer is not empty and holds only whitespace bytes, as
    /// defined by [`is_space`](crate::util::is_space).
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// assert!(!ByteBuffer::new(4)?.is_space());
    /// assert!(ByteBuffer::from_bytes(4, " \t\r\n")?.is_space());
    /// assert!(!ByteBuffer::from_bytes(4, " a ")?.is_space());
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[inline]
    pub fn is_space(&self) -> bool {
        !self.is_empty() && self.as_bytes().iter().all(|&b| is_space(b))
    }

    /// Returns `true` if the start of the buffer matches `prefix`.
    ///
    /// Only the first `min(self.len(), prefix.len())` bytes are compared. A prefix longer
    /// than the buffer matches as long as the buffer is a prefix of it.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let buff = ByteBuffer::from_bytes(4, "foo")?;
    ///
    /// assert!(buff.starts_with("fo"));
    /// assert!(buff.starts_with("foobar"));
    /// assert!(!buff.starts_with("bar"));
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.as_bytes()
            .iter()
            .zip(prefix.as_ref())
            .all(|(lhs, rhs)| lhs == rhs)
    }

    /// Returns `true` if the end of the buffer matches `suffix`.
    ///
    /// Only the last `min(self.len(), suffix.len())` bytes are compared, anchored at the
    /// end of both. A suffix longer than the buffer matches as long as the buffer is a
    /// suffix of it.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let buff = ByteBuffer::from_bytes(4, "bar")?;
    ///
    /// assert!(buff.ends_with("ar"));
    /// assert!(buff.ends_with("foobar"));
    /// assert!(!buff.ends_with("foo"));
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.as_bytes()
            .iter()
            .rev()
            .zip(suffix.as_ref().iter().rev())
            .all(|(lhs, rhs)| lhs == rhs)
    }

    /// Returns the offset of the first occurrence of `pattern` starting at or after
    /// `start`, or the buffer length if there is none.
    ///
    /// The search uses the Boyer-Moore bad-character rule, with a shift table built for
    /// each call.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `pattern` is empty.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let buff = ByteBuffer::from_bytes(4, "abcabcabc")?;
    ///
    /// assert_eq!(buff.find("bca", 0)?, 1);
    /// assert_eq!(buff.find("bca", 2)?, 4);
    /// assert_eq!(buff.find("xyz", 0)?, buff.len());
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    pub fn find(&self, pattern: impl AsRef<[u8]>, start: usize) -> Result<usize, Error> {
        let finder = Finder::new(pattern.as_ref())?;

        Ok(finder.find_in(self.as_bytes(), start).unwrap_or(self.len))
    }

    /// Returns `true` if and only if this buffer contains the given non-empty `needle`.
    #[inline]
    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        matches!(self.find(needle, 0), Ok(idx) if idx < self.len)
    }

    /// Returns the byte at `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Returns a mutable reference to the byte at `index`, or `None` if it is out of
    /// bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut u8> {
        self.as_bytes_mut().get_mut(index)
    }

    /// Copies the range `begin..end` into a new buffer with the same growth unit.
    ///
    /// Negative indices count from the end of the buffer. `begin` is clamped to zero,
    /// `end` defaults to and is clamped to the length. An empty or inverted range gives
    /// an empty buffer.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the new buffer cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use iobuf::ByteBuffer;
    ///
    /// let buff = ByteBuffer::from_bytes(4, "hello world")?;
    ///
    /// assert_eq!(buff.slice(6, None)?, "world");
    /// assert_eq!(buff.slice(-5, Some(-2))?, "wor");
    /// assert_eq!(buff.slice(0, Some(5))?, "hello");
    /// assert!(buff.slice(5, Some(2))?.is_empty());
    /// # Ok::<(), iobuf::Error>(())
    /// ```
    pub fn slice(&self, begin: isize, end: Option<isize>) -> Result<Self, Error> {
        let begin = self.resolve_index(begin);
        let end = end.map_or(self.len, |end| self.resolve_index(end));

        let mut copy = Self::with_unit(self.unit);
        if begin < end {
            copy.push_bytes(&self.as_bytes()[begin..end])?;
        }

        Ok(copy)
    }

    /// Maps a possibly negative index onto `0..=len`.
    fn resolve_index(&self, index: isize) -> usize {
        if index < 0 {
            self.len.saturating_sub(index.unsigned_abs())
        } else {
            min(index.unsigned_abs(), self.len)
        }
    }

    /// Creates an independent copy of the buffer with the same growth unit.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the copy cannot be allocated.
    #[inline]
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut copy = Self::with_unit(self.unit);
        copy.push_bytes(self.as_bytes())?;
        Ok(copy)
    }

    /// Consumes the buffer, returning its contents.
    #[inline]
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.len);
        self.data
    }

    /// Returns the contents as a `str`, replacing invalid UTF-8 sequences with the
    /// replacement codepoint.
    #[cfg(feature = "std")]
    #[cfg_attr(_doc, doc(cfg(feature = "std")))]
    #[inline]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        self.as_bytes().to_str_lossy()
    }

    /// Writes the contents to the standard output.
    ///
    /// # Errors
    /// Returns any error of the underlying write.
    #[cfg(feature = "std")]
    #[cfg_attr(_doc, doc(cfg(feature = "std")))]
    pub fn print(&self) -> io::Result<()> {
        io::Write::write_all(&mut io::stdout().lock(), self.as_bytes())
    }

    /// Writes the contents and a newline to the standard output.
    ///
    /// # Errors
    /// Returns any error of the underlying write.
    #[cfg(feature = "std")]
    #[cfg_attr(_doc, doc(cfg(feature = "std")))]
    pub fn println(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        io::Write::write_all(&mut stdout, self.as_bytes())?;
        io::Write::write_all(&mut stdout, b"\n")
    }
}

/// Writer over the spare capacity of a buffer that keeps counting past its end.
struct SpareWriter<'a> {
    spare:   &'a mut [u8],
    written: usize,
}

impl Write for SpareWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();

        if let Some(room) = self.spare.get_mut(self.written..) {
            let fit = min(room.len(), bytes.len());
            room[..fit].copy_from_slice(&bytes[..fit]);
        }

        self.written = self.written.checked_add(bytes.len()).ok_or(fmt::Error)?;
        Ok(())
    }
}

impl Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<bbuf [{}]", self.len)?;

        for (idx, byte) in self.as_bytes().iter().enumerate() {
            if idx == INSPECT_BYTES {
                f.write_str(" ..")?;
                break;
            }
            write!(f, " {byte:02x}")?;
        }

        f.write_char('>')
    }
}

impl Display for ByteBuffer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bstr: &BStr = self.as_bytes().as_ref();

        Display::fmt(bstr, f)
    }
}

impl Clone for ByteBuffer {
    /// # Panics
    /// Panics if the copy cannot be allocated. See [`ByteBuffer::try_clone`].
    #[inline]
    fn clone(&self) -> Self {
        // Same capacity a fresh buffer gets from pushing the content.
        let unit = self.unit();
        let capacity = (self.len / unit + usize::from(self.len % unit != 0)) * unit;

        let mut copy = Self::with_unit(self.unit);
        copy.data.reserve_exact(capacity);
        copy.data.extend_from_slice(self.as_bytes());
        copy.data.resize(capacity, 0);
        copy.len = self.len;
        copy
    }
}

impl PartialEq for ByteBuffer {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().eq(other.as_bytes())
    }
}

impl Eq for ByteBuffer {}

impl PartialOrd for ByteBuffer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteBuffer {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

macro_rules! buffer_eq {
    ($($t:ty),+ $(,)?) => {
        $(
            impl PartialEq<$t> for ByteBuffer {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.as_bytes() == AsRef::<[u8]>::as_ref(other)
                }
            }

            impl PartialEq<ByteBuffer> for $t {
                #[inline]
                fn eq(&self, other: &ByteBuffer) -> bool {
                    AsRef::<[u8]>::as_ref(self) == other.as_bytes()
                }
            }
        )+
    };
}

buffer_eq!([u8], str, &[u8], &str, Vec<u8>);

impl AsRef<[u8]> for ByteBuffer {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<BStr> for ByteBuffer {
    #[inline]
    fn as_ref(&self) -> &BStr {
        self.as_bytes().as_ref()
    }
}

impl AsMut<[u8]> for ByteBuffer {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl Index<usize> for ByteBuffer {
    type Output = u8;

    /// Get a reference to the byte of the buffer at the `index`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len;
        self.as_bytes().get(index).unwrap_or_else(|| {
            panic!("index out of bounds: the len is {len} but the index is {index}")
        })
    }
}

impl IndexMut<usize> for ByteBuffer {
    /// Get a exclusive reference to the byte of the buffer at the `index`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        self.as_bytes_mut().get_mut(index).unwrap_or_else(|| {
            panic!("index out of bounds: the len is {len} but the index is {index}")
        })
    }
}

impl Write for ByteBuffer {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map(drop).map_err(|_| fmt::Error)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(_doc, doc(cfg(feature = "std")))]
impl io::Write for ByteBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push_bytes(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::OutOfMemory, err))
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TryExtend<u8> for ByteBuffer {
    #[inline]
    fn try_extend(&mut self, byte: u8) -> Result<(), Error> {
        self.push_u8(byte)
    }
}

impl TryExtend<&[u8]> for ByteBuffer {
    #[inline]
    fn try_extend(&mut self, slice: &[u8]) -> Result<(), Error> {
        self.push_bytes(slice).map(drop)
    }
}

impl TryExtend<&str> for ByteBuffer {
    #[inline]
    fn try_extend(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string).map(drop)
    }
}

impl TryExtend<&CStr> for ByteBuffer {
    #[inline]
    fn try_extend(&mut self, cstr: &CStr) -> Result<(), Error> {
        self.push_cstr(cstr).map(drop)
    }
}

impl TryExtend<&ByteBuffer> for ByteBuffer {
    #[inline]
    fn try_extend(&mut self, other: &ByteBuffer) -> Result<(), Error> {
        self.push_bytes(other.as_bytes()).map(drop)
    }
}
