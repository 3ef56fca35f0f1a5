use crate::error::Utf8Error;
use crate::sink::ByteSink;
use crate::util::utf8::{encoded_len, is_valid_codepoint, MAX_UTF8_LEN};

#[cfg_attr(feature = "perf-inline", inline(always))]
fn encode_impl<const CHECKED: bool>(
    codepoint: u32,
) -> Result<([u8; MAX_UTF8_LEN], usize), Utf8Error> {
    if CHECKED && !is_valid_codepoint(codepoint) {
        return Err(Utf8Error::encode(0));
    }
    let mut buf = [0; MAX_UTF8_LEN];
    let len = encoded_len(codepoint);
    // bits above the 21st are truncated for values that are not codepoints
    match len {
        1 => buf[0] = codepoint as u8,
        2 => {
            buf[0] = (0b1100_0000 | (codepoint >> 6)) as u8;
            buf[1] = (0b1000_0000 | (codepoint & 0b0011_1111)) as u8;
        }
        3 => {
            buf[0] = (0b1110_0000 | (codepoint >> 12)) as u8;
            buf[1] = (0b1000_0000 | ((codepoint >> 6) & 0b0011_1111)) as u8;
            buf[2] = (0b1000_0000 | (codepoint & 0b0011_1111)) as u8;
        }
        _ => {
            buf[0] = (0b1111_0000 | (codepoint >> 18)) as u8;
            buf[1] = (0b1000_0000 | ((codepoint >> 12) & 0b0011_1111)) as u8;
            buf[2] = (0b1000_0000 | ((codepoint >> 6) & 0b0011_1111)) as u8;
            buf[3] = (0b1000_0000 | (codepoint & 0b0011_1111)) as u8;
        }
    }
    Ok((buf, len))
}

/// Encodes `codepoint` into a fixed buffer without validating it. Returns the
/// buffer and the number of leading bytes that are in use.
///
/// # Example
///
/// ```
/// use utf8_cursor::encode_to_array;
///
/// let (buf, len) = encode_to_array(0x20AC);
/// assert_eq!(b"\xE2\x82\xAC", &buf[..len]);
/// ```
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn encode_to_array(codepoint: u32) -> ([u8; MAX_UTF8_LEN], usize) {
    match encode_impl::<false>(codepoint) {
        Ok(encoded) => encoded,
        Err(_) => unreachable!("the trusting encoder never reports errors"),
    }
}

/// Appends the UTF-8 encoding of `codepoint` to `sink` and returns the number
/// of bytes appended.
///
/// The minimal length for the value is always used. No validation happens:
/// surrogates are encoded like any other value and values above
/// [`MAX_CODEPOINT`](crate::MAX_CODEPOINT) produce bytes that no checked
/// decoder accepts.
///
/// # Example
///
/// ```
/// use utf8_cursor::encode;
///
/// let mut out: Vec<u8> = Vec::new();
/// encode(0x41, &mut out);
/// encode(0x1D122, &mut out);
/// assert_eq!("A𝄢".as_bytes(), &out[..]);
/// ```
#[inline]
pub fn encode<S: ByteSink + ?Sized>(codepoint: u32, sink: &mut S) -> usize {
    let (buf, len) = encode_to_array(codepoint);
    sink.extend_bytes(&buf[..len]);
    len
}

/// Appends the UTF-8 encoding of `codepoint` to `sink` and returns the number
/// of bytes appended, rejecting surrogates and values above
/// [`MAX_CODEPOINT`](crate::MAX_CODEPOINT).
///
/// On error nothing is appended and the error kind is
/// [`ErrorKind::BadCodepoint`](crate::ErrorKind::BadCodepoint).
///
/// # Example
///
/// ```
/// use utf8_cursor::{encode_safe, ErrorKind};
///
/// let mut out: Vec<u8> = Vec::new();
/// assert_eq!(Ok(2), encode_safe(0xE4, &mut out));
/// let err = encode_safe(0xD800, &mut out).unwrap_err();
/// assert_eq!(ErrorKind::BadCodepoint, err.kind());
/// assert_eq!("ä".as_bytes(), &out[..]);
/// ```
#[inline]
pub fn encode_safe<S: ByteSink + ?Sized>(codepoint: u32, sink: &mut S) -> Result<usize, Utf8Error> {
    let (buf, len) = encode_impl::<true>(codepoint)?;
    sink.extend_bytes(&buf[..len]);
    Ok(len)
}
