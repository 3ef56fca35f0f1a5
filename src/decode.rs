/*!
Decoding of single UTF-8 sequences.

The trusting and checked decoders are the same routine instantiated with a
different `CHECKED` flag, so both read the exact same bytes in the exact same
order. The trusting instantiation compiles down to the bit assembly alone.
*/

use log::trace;

use crate::cursor::{Cursor, IntoCursor};
use crate::error::{ErrorKind, Utf8Error};
use crate::util::utf8::{
    byte_count, codepoint_range, continuation_payload, is_continuation_byte, is_surrogate,
    leading_payload, MAX_UTF8_LEN, NOT_A_CHARACTER,
};

#[cfg_attr(feature = "perf-inline", inline(always))]
fn decode_impl<C: Cursor, const CHECKED: bool>(
    cursor: &C,
    end: usize,
) -> Result<(u32, usize), Utf8Error> {
    let start = cursor.offset();
    let fail = |kind: ErrorKind, len: usize, byte: Option<u8>| {
        trace!("rejected sequence at offset {}: {}", start, kind);
        Utf8Error::decode(kind, start, len, byte)
    };

    let lead = match cursor.peek() {
        Some(lead) if start < end => lead,
        _ if CHECKED => return Err(fail(ErrorKind::IncompleteSequence, 0, None)),
        _ => return Ok((NOT_A_CHARACTER, 0)),
    };
    let len = byte_count(lead);
    if len == 0 {
        if CHECKED {
            return Err(fail(ErrorKind::BadLeadingByte, 0, Some(lead)));
        }
        return Ok((NOT_A_CHARACTER, 0));
    }

    // all bytes of the sequence are read before any of them is inspected
    let mut bytes = [0b1000_0000; MAX_UTF8_LEN];
    let mut it = cursor.clone();
    for (i, slot) in bytes.iter_mut().enumerate().take(len).skip(1) {
        match if it.advance() && start + i < end { it.peek() } else { None } {
            Some(byte) => *slot = byte,
            None if CHECKED => return Err(fail(ErrorKind::IncompleteSequence, len, Some(lead))),
            // missing bytes of a truncated sequence contribute no payload
            None => break,
        }
    }
    let tail = &bytes[1..len];
    if CHECKED && !tail.iter().all(|&byte| is_continuation_byte(byte)) {
        return Err(fail(ErrorKind::BadContinuationByte, len, Some(lead)));
    }
    let second = bytes[1];
    let codepoint = tail
        .iter()
        .fold(leading_payload(lead, len), |cp, &byte| (cp << 6) | continuation_payload(byte));

    if CHECKED {
        let overlong = match len {
            2 => lead & 0b1111_1110 == 0b1100_0000,
            3 => lead == 0xE0 && second & 0b1110_0000 == 0b1000_0000,
            4 => lead == 0xF0 && second & 0b1111_0000 == 0b1000_0000,
            _ => false,
        };
        if overlong {
            return Err(fail(ErrorKind::OverlongSequence, len, Some(lead)));
        }
        if !codepoint_range(len).contains(&codepoint) || is_surrogate(codepoint) {
            return Err(fail(ErrorKind::BadCodepoint, len, Some(lead)));
        }
    }
    Ok((codepoint, len))
}

/// Decodes the UTF-8 sequence at the start of `input` without validating it.
///
/// The sequence must be complete and well formed. If it is not, the returned
/// value is unspecified (but this never panics or reads out of bounds). An
/// invalid leading byte decodes to [`NOT_A_CHARACTER`].
///
/// # Example
///
/// ```
/// use utf8_cursor::decode;
///
/// assert_eq!(0x00E4, decode("ä"));
/// assert_eq!(0x1D122, decode("𝄢"));
/// ```
#[inline]
pub fn decode<I: IntoCursor>(input: I) -> u32 {
    decode_at(&input.into_cursor()).0
}

/// Decodes the sequence under `cursor` without validating it, returning the
/// codepoint together with the number of bytes it occupies.
///
/// The length is `0` if the byte under the cursor cannot start a sequence.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn decode_at<C: Cursor>(cursor: &C) -> (u32, usize) {
    match decode_impl::<C, false>(cursor, usize::MAX) {
        Ok(decoded) => decoded,
        Err(_) => unreachable!("the trusting decoder never reports errors"),
    }
}

/// Decodes and validates the UTF-8 sequence at the start of `input`. The
/// sequence may not extend past the end of `input`.
///
/// # Example
///
/// ```
/// use utf8_cursor::{decode_safe, ErrorKind};
///
/// assert_eq!(Ok(0x20AC), decode_safe("€"));
/// let err = decode_safe(b"\xE2\x82").unwrap_err();
/// assert_eq!(ErrorKind::IncompleteSequence, err.kind());
/// ```
#[inline]
pub fn decode_safe<I: IntoCursor>(input: I) -> Result<u32, Utf8Error> {
    decode_impl::<_, true>(&input.into_cursor(), usize::MAX).map(|(codepoint, _)| codepoint)
}

/// Decodes and validates the sequence under `cursor`, returning the
/// codepoint together with the number of bytes it occupies.
///
/// No byte at or after `end` is read; a sequence that needs such a byte is
/// reported as [`ErrorKind::IncompleteSequence`]. The end of the cursor's
/// buffer bounds the sequence as well.
///
/// Rules are checked in a fixed order and the first violated one is
/// reported: the leading byte, then each continuation byte in turn (present,
/// then shaped `10xxxxxx`), then overlong forms, then the codepoint range.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn decode_safe_at<C: Cursor>(cursor: &C, end: &C) -> Result<(u32, usize), Utf8Error> {
    decode_impl::<C, true>(cursor, end.offset())
}
