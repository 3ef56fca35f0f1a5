/*!
Operations over NUL terminated byte strings.

The string ends at its first NUL byte, or at the end of the slice if it has
none. Everything after the terminator is ignored.
*/

use crate::cursor::SliceCursor;
use crate::error::Utf8Error;
use crate::sink::CodepointSink;
use crate::{count, decode_range, decode_range_safe, validate};

/// Returns the bytes of `bytes` before its first NUL byte.
///
/// # Example
///
/// ```
/// use utf8_cursor::until_nul;
///
/// assert_eq!(b"ab", until_nul(b"ab\0cd"));
/// assert_eq!(b"ab", until_nul(b"ab"));
/// ```
pub fn until_nul(bytes: &[u8]) -> &[u8] {
    match memchr::memchr(0, bytes) {
        Some(nul) => &bytes[..nul],
        None => bytes,
    }
}

/// Decodes a NUL terminated string without validation into `sink`.
pub fn decode_c_str<S: CodepointSink + ?Sized>(bytes: &[u8], sink: &mut S) -> usize {
    let (begin, end) = SliceCursor::bounds(until_nul(bytes));
    decode_range(begin, &end, sink)
}

/// Decodes and validates a NUL terminated string into `sink`.
pub fn decode_c_str_safe<S: CodepointSink + ?Sized>(
    bytes: &[u8],
    sink: &mut S,
) -> Result<usize, Utf8Error> {
    let (begin, end) = SliceCursor::bounds(until_nul(bytes));
    decode_range_safe(begin, &end, sink)
}

/// Validates a NUL terminated string.
pub fn validate_c_str(bytes: &[u8]) -> Result<(), Utf8Error> {
    let (begin, end) = SliceCursor::bounds(until_nul(bytes));
    validate(begin, &end)
}

/// Counts the codepoints of a NUL terminated string.
pub fn count_c_str(bytes: &[u8]) -> usize {
    let (begin, end) = SliceCursor::bounds(until_nul(bytes));
    count(begin, &end)
}
