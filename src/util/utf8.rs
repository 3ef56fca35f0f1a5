/*!
Utilities for classifying UTF-8 code units and codepoints.

Everything in here operates on single bytes or single codepoints. The layout
these routines encode is the one from RFC 3629:

```text
#bytes  #bits  codepoint   encoding
     1      7     U+0000   0xxxxxxx
     2     11     U+0080   110xxxxx 10xxxxxx
     3     16     U+0800   1110xxxx 10xxxxxx 10xxxxxx
     4     21    U+10000   11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
```
*/

/// The largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// The value returned in place of a codepoint when decoding fails.
pub const NOT_A_CHARACTER: u32 = 0xFFFF;

/// The longest UTF-8 sequence in bytes.
pub const MAX_UTF8_LEN: usize = 4;

/// Given a UTF-8 leading byte, this returns the total number of code units
/// in the encoded codepoint it starts.
///
/// If the given byte can never start a sequence (a continuation byte, or a
/// byte of the form `11111xxx`), then this returns `0`.
///
/// Note that this only looks at the high bits. `0xC0`, `0xC1` and `0xF5`
/// through `0xF7` are classified by their shape even though no valid
/// sequence starts with them; the checked decoder rejects those later.
///
/// # Example
///
/// ```
/// use utf8_cursor::byte_count;
///
/// assert_eq!(1, byte_count(b'a'));
/// assert_eq!(2, byte_count(0xC3));
/// assert_eq!(3, byte_count(0xE2));
/// assert_eq!(4, byte_count(0xF0));
/// assert_eq!(0, byte_count(0x80));
/// assert_eq!(0, byte_count(0xF8));
/// ```
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn byte_count(leading_byte: u8) -> usize {
    if is_ascii(leading_byte) {
        1
    } else if leading_byte & 0b1110_0000 == 0b1100_0000 {
        2
    } else if leading_byte & 0b1111_0000 == 0b1110_0000 {
        3
    } else if leading_byte & 0b1111_1000 == 0b1111_0000 {
        4
    } else {
        0
    }
}

/// Returns true if and only if the most significant bit of `byte` is unset.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_ascii(byte: u8) -> bool {
    byte & 0b1000_0000 == 0
}

/// Returns true if and only if `byte` has the shape `10xxxxxx`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_continuation_byte(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Returns true if and only if the given byte (or the end of a buffer, when
/// `None`) sits on a codepoint boundary.
///
/// If the surrounding bytes are not valid UTF-8, then the answer is only
/// meaningful with respect to the byte itself.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_boundary(byte: Option<u8>) -> bool {
    match byte {
        None => true,
        // Other than ASCII (where the most significant bit is never set),
        // leading bytes always have their two most significant bits set,
        // where as continuation bytes never have their second most
        // significant bit set.
        Some(b) => !is_continuation_byte(b),
    }
}

/// Returns true if and only if `codepoint` is in `0xD800..=0xDFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_surrogate(codepoint: u32) -> bool {
    (0xD800..=0xDFFF).contains(&codepoint)
}

/// Returns true if and only if `codepoint` is a Unicode scalar value.
#[inline]
pub fn is_valid_codepoint(codepoint: u32) -> bool {
    codepoint <= MAX_CODEPOINT && !is_surrogate(codepoint)
}

/// Returns the minimal number of bytes needed to encode `codepoint`.
///
/// Values above [`MAX_CODEPOINT`] report `4`, matching what the trusting
/// encoder emits for them.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn encoded_len(codepoint: u32) -> usize {
    if codepoint < 0x80 {
        1
    } else if codepoint < 0x800 {
        2
    } else if codepoint < 0x10000 {
        3
    } else {
        4
    }
}

/// The payload bits carried by a leading byte of a sequence of `len` bytes.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn leading_payload(byte: u8, len: usize) -> u32 {
    let mask = match len {
        1 => 0b0111_1111,
        2 => 0b0001_1111,
        3 => 0b0000_1111,
        _ => 0b0000_0111,
    };
    u32::from(byte & mask)
}

/// The six payload bits of a continuation byte.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn continuation_payload(byte: u8) -> u32 {
    u32::from(byte & 0b0011_1111)
}

/// The range of codepoints that must be encoded with exactly `len` bytes.
pub(crate) fn codepoint_range(len: usize) -> core::ops::RangeInclusive<u32> {
    match len {
        1 => 0..=0x7F,
        2 => 0x80..=0x7FF,
        3 => 0x800..=0xFFFF,
        _ => 0x10000..=MAX_CODEPOINT,
    }
}
