//! Boyer-Moore substring search using the bad-character rule.
use crate::Error;

/// Number of distinct byte values, one table slot for each.
const ALPHABET: usize = 256;

/// Bad-character shift table of a pattern.
///
/// Every byte that does not occur in the pattern maps to the pattern length. A byte that
/// does occur maps to its distance from the end of the pattern, counted from its
/// rightmost occurrence.
#[derive(Clone)]
pub struct BadCharTable {
    shifts: [usize; ALPHABET],
}

impl BadCharTable {
    /// Builds the table for `pattern` in `O(256 + pattern.len())`.
    pub fn new(pattern: &[u8]) -> Self {
        let len = pattern.len();
        let mut shifts = [len; ALPHABET];

        // Later positions overwrite earlier ones, so the rightmost occurrence wins.
        for (idx, &byte) in pattern.iter().enumerate() {
            shifts[byte as usize] = len - 1 - idx;
        }

        Self { shifts }
    }

    /// Returns the shift recorded for `byte`.
    #[inline]
    pub fn shift(&self, byte: u8) -> usize {
        self.shifts[byte as usize]
    }
}

/// A prepared search for one non-empty pattern.
///
/// The table lives inside the finder, so distinct finders never share state and a
/// finder can be used on any number of haystacks.
///
/// # Examples
/// ```
/// use iobuf::types::search::Finder;
///
/// let finder = Finder::new(b"bca").unwrap();
///
/// assert_eq!(finder.find_in(b"abcabcabc", 0), Some(1));
/// assert_eq!(finder.find_in(b"abcabcabc", 2), Some(4));
/// assert_eq!(finder.find_in(b"abcabcabc", 5), None);
/// ```
#[derive(Clone)]
pub struct Finder<'p> {
    pattern: &'p [u8],
    table:   BadCharTable,
}

impl<'p> Finder<'p> {
    /// Prepares a search for `pattern`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `pattern` is empty.
    pub fn new(pattern: &'p [u8]) -> Result<Self, Error> {
        if pattern.is_empty() {
            return Err(Error::InvalidArgument("search pattern should not be empty"));
        }

        Ok(Self {
            pattern,
            table: BadCharTable::new(pattern),
        })
    }

    /// Returns the pattern this finder looks for.
    #[inline]
    pub fn pattern(&self) -> &'p [u8] {
        self.pattern
    }

    /// Returns the offset of the first occurrence of the pattern in `haystack` that
    /// starts at or after `start`.
    ///
    /// The pattern is aligned with the haystack and compared right to left. On a
    /// mismatch `j` bytes from the right, the window moves by the bad-character shift of
    /// the mismatched haystack byte minus `j`, or by one when that would not move it
    /// forward.
    pub fn find_in(&self, haystack: &[u8], start: usize) -> Option<usize> {
        let len = self.pattern.len();
        let last = len - 1;

        if len > haystack.len() {
            return None;
        }

        let end = haystack.len() - len;
        let mut idx = start;

        while idx <= end {
            let mut skip = 0;

            for j in 0..len {
                let k = last - j;
                let byte = haystack[idx + k];

                if self.pattern[k] != byte {
                    let shift = self.table.shift(byte);
                    skip = if shift > j { shift - j } else { 1 };
                    break;
                }
            }

            if skip == 0 {
                return Some(idx);
            }

            idx += skip;
        }

        None
    }
}
