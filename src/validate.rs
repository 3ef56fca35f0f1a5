use log::debug;

use crate::cursor::Cursor;
use crate::decode::decode_safe_at;
use crate::error::Utf8Error;

/// Checks that the bytes between `begin` and `end` are valid UTF-8.
///
/// The first offending sequence is reported; its start is available through
/// [`Utf8Error::offset`]. Use [`validate_with_position`] to get it back as a
/// cursor in the same pass.
///
/// # Example
///
/// ```
/// use utf8_cursor::{validate, ErrorKind, SliceCursor};
///
/// let (begin, end) = SliceCursor::bounds(b"ab\xC0\xAFcd");
/// let err = validate(begin, &end).unwrap_err();
/// assert_eq!(ErrorKind::OverlongSequence, err.kind());
/// assert_eq!(2, err.offset());
/// ```
pub fn validate<C: Cursor>(begin: C, end: &C) -> Result<(), Utf8Error> {
    scan(begin, end).1
}

/// Returns the cursor at the start of the first invalid sequence between
/// `begin` and `end`, or a cursor at `end` when there is none.
pub fn valid_up_to<C: Cursor>(begin: C, end: &C) -> C {
    scan(begin, end).0
}

/// Checks the bytes between `begin` and `end` like [`validate`], and also
/// returns the cursor where the scan stopped: the start of the offending
/// sequence on error, or `end` on success.
///
/// # Example
///
/// ```
/// use utf8_cursor::{validate_with_position, Cursor, ErrorKind, SliceCursor};
///
/// let (begin, end) = SliceCursor::bounds(b"ab\xE2\x82");
/// let (at, result) = validate_with_position(begin, &end);
/// assert_eq!(2, at.offset());
/// assert_eq!(ErrorKind::IncompleteSequence, result.unwrap_err().kind());
/// ```
pub fn validate_with_position<C: Cursor>(begin: C, end: &C) -> (C, Result<(), Utf8Error>) {
    scan(begin, end)
}

fn scan<C: Cursor>(mut cursor: C, end: &C) -> (C, Result<(), Utf8Error>) {
    while cursor.offset() < end.offset() {
        match decode_safe_at(&cursor, end) {
            Ok((_, len)) => {
                cursor.advance_by(len);
            }
            Err(err) => {
                debug!("validation stopped: {}", err);
                return (cursor, Err(err));
            }
        }
    }
    (cursor, Ok(()))
}
