/*!
Decoding and encoding whole ranges into sinks.

The checked variants stop at the first failure and return it. Everything
produced before the failure stays in the sink; callers that want all or
nothing truncate the sink themselves.
*/

use log::debug;

use crate::cursor::Cursor;
use crate::encode::{encode, encode_safe};
use crate::error::Utf8Error;
use crate::iter::{decode_and_next, decode_and_next_safe};
use crate::sink::{ByteSink, CodepointSink};

/// Decodes every codepoint between `begin` and `end` without validation and
/// appends them to `sink`. Returns the number of codepoints appended.
pub fn decode_range<C, S>(mut begin: C, end: &C, sink: &mut S) -> usize
where
    C: Cursor,
    S: CodepointSink + ?Sized,
{
    let mut n = 0;
    while begin.offset() < end.offset() && begin.peek().is_some() {
        let (codepoint, next) = decode_and_next(begin);
        sink.push_codepoint(codepoint);
        begin = next;
        n += 1;
    }
    n
}

/// Decodes and validates every codepoint between `begin` and `end`,
/// appending them to `sink`. Returns the number of codepoints appended.
///
/// # Example
///
/// ```
/// use utf8_cursor::{decode_range_safe, ErrorKind, SliceCursor};
///
/// let (begin, end) = SliceCursor::bounds(b"A1\xF0\x80\x80\xAFz");
/// let mut out: Vec<u32> = Vec::new();
/// let err = decode_range_safe(begin, &end, &mut out).unwrap_err();
/// assert_eq!(ErrorKind::OverlongSequence, err.kind());
/// assert_eq!(vec![0x41u32, 0x31], out);
/// ```
pub fn decode_range_safe<C, S>(mut begin: C, end: &C, sink: &mut S) -> Result<usize, Utf8Error>
where
    C: Cursor,
    S: CodepointSink + ?Sized,
{
    let mut n = 0;
    while begin.offset() < end.offset() {
        let (codepoint, next) = decode_and_next_safe(begin, end).map_err(|err| {
            debug!("decoding stopped after {} codepoints: {}", n, err);
            err
        })?;
        sink.push_codepoint(codepoint);
        begin = next;
        n += 1;
    }
    Ok(n)
}

/// Encodes every codepoint of `codepoints` without validation and appends
/// the bytes to `sink`. Returns the number of bytes appended.
pub fn encode_range<I, S>(codepoints: I, sink: &mut S) -> usize
where
    I: IntoIterator<Item = u32>,
    S: ByteSink + ?Sized,
{
    codepoints.into_iter().map(|codepoint| encode(codepoint, sink)).sum()
}

/// Encodes every codepoint of `codepoints`, rejecting surrogates and values
/// above [`MAX_CODEPOINT`](crate::MAX_CODEPOINT), and appends the bytes to
/// `sink`. Returns the number of bytes appended.
///
/// The error's offset is the index of the offending codepoint. Nothing is
/// appended for it or for anything after it.
///
/// # Example
///
/// ```
/// use utf8_cursor::{encode_range_safe, ErrorKind};
///
/// let mut out: Vec<u8> = Vec::new();
/// let err = encode_range_safe([0x41, 0x31, 0xD800, 0xE4], &mut out).unwrap_err();
/// assert_eq!(ErrorKind::BadCodepoint, err.kind());
/// assert_eq!(2, err.offset());
/// assert_eq!(b"A1", &out[..]);
/// ```
pub fn encode_range_safe<I, S>(codepoints: I, sink: &mut S) -> Result<usize, Utf8Error>
where
    I: IntoIterator<Item = u32>,
    S: ByteSink + ?Sized,
{
    let mut written = 0;
    for (i, codepoint) in codepoints.into_iter().enumerate() {
        match encode_safe(codepoint, sink) {
            Ok(len) => written += len,
            Err(err) => {
                let err = err.with_offset(i);
                debug!("encoding stopped after {} bytes: {} (U+{:04X})", written, err, codepoint);
                return Err(err);
            }
        }
    }
    Ok(written)
}
