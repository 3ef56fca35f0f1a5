/*!
Moving cursors across codepoint boundaries.

The trusting routines here assume the cursor sits on a codepoint boundary of
valid UTF-8. On malformed input they still terminate and never read out of
bounds, but the positions they produce are unspecified.
*/

use crate::cursor::Cursor;
use crate::decode::{decode_at, decode_safe_at};
use crate::error::Utf8Error;
use crate::util::utf8::{byte_count, is_continuation_byte};

/// Moves `cursor` to the start of the next codepoint.
///
/// The distance is given by the leading byte. A byte that cannot lead a
/// sequence is stepped over on its own. At the end of the buffer the cursor
/// is returned unchanged.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn next<C: Cursor>(mut cursor: C) -> C {
    let len = cursor.peek().map_or(1, byte_count).max(1);
    cursor.advance_by(len);
    cursor
}

/// Moves `cursor` to the start of the previous codepoint by walking back over
/// continuation bytes until a leading byte is found.
///
/// At the start of the buffer the cursor is returned unchanged.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn previous<C: Cursor>(mut cursor: C) -> C {
    while cursor.backtrack() {
        match cursor.peek() {
            Some(byte) if is_continuation_byte(byte) => continue,
            _ => break,
        }
    }
    cursor
}

/// Decodes the codepoint under `cursor` and moves to the next one.
///
/// # Example
///
/// ```
/// use utf8_cursor::{decode_and_next, SliceCursor, Cursor};
///
/// let it = SliceCursor::new("ä!".as_bytes());
/// let (codepoint, it) = decode_and_next(it);
/// assert_eq!(0xE4, codepoint);
/// assert_eq!(2, it.offset());
/// ```
#[inline]
pub fn decode_and_next<C: Cursor>(mut cursor: C) -> (u32, C) {
    let (codepoint, len) = decode_at(&cursor);
    cursor.advance_by(len.max(1));
    (codepoint, cursor)
}

/// Decodes and validates the codepoint under `cursor` and moves to the next
/// one. The sequence may not extend to or past `end`.
///
/// On error the cursor is not moved; the error's offset is its position.
#[inline]
pub fn decode_and_next_safe<C: Cursor>(mut cursor: C, end: &C) -> Result<(u32, C), Utf8Error> {
    let (codepoint, len) = decode_safe_at(&cursor, end)?;
    cursor.advance_by(len);
    Ok((codepoint, cursor))
}

/// Decodes the codepoint under `cursor` and moves to the start of the
/// codepoint before it.
#[inline]
pub fn decode_and_previous<C: Cursor>(cursor: C) -> (u32, C) {
    let (codepoint, _) = decode_at(&cursor);
    (codepoint, previous(cursor))
}

/// Decodes and validates the codepoint under `cursor` and moves to the start
/// of the codepoint before it.
///
/// Only the decoded sequence is validated. The backward step walks over
/// continuation bytes back to the nearest leading byte, bounded by the start
/// of the buffer, so on malformed input its result is best effort.
#[inline]
pub fn decode_and_previous_safe<C: Cursor>(cursor: C, end: &C) -> Result<(u32, C), Utf8Error> {
    let (codepoint, _) = decode_safe_at(&cursor, end)?;
    Ok((codepoint, previous(cursor)))
}

/// Counts the codepoints between `begin` and `end` by repeatedly stepping
/// with [`next`].
#[inline]
pub fn count<C: Cursor>(mut begin: C, end: &C) -> usize {
    let mut n = 0;
    while begin.offset() < end.offset() && begin.peek().is_some() {
        begin = next(begin);
        n += 1;
    }
    n
}

/// Returns the signed number of codepoints from `from` to `to`.
///
/// The result is positive when `from` comes before `to` and negative when the
/// arguments are reversed, so `distance(a, b) == -distance(b, a)`.
///
/// # Example
///
/// ```
/// use utf8_cursor::{distance, SliceCursor};
///
/// let (begin, end) = SliceCursor::bounds("A1äÑ".as_bytes());
/// assert_eq!(4, distance(&begin, &end));
/// assert_eq!(-4, distance(&end, &begin));
/// ```
pub fn distance<C: Cursor>(from: &C, to: &C) -> isize {
    if from.offset() <= to.offset() {
        count(from.clone(), to) as isize
    } else {
        -(count(to.clone(), from) as isize)
    }
}

/// An iterator over the codepoints between two cursors, decoded without
/// validation.
///
/// Iterating from the back steps with [`previous`].
#[derive(Clone, Debug)]
pub struct Codepoints<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Codepoints<C> {
    /// Creates an iterator over the codepoints from `begin` up to `end`.
    pub fn new(begin: C, end: C) -> Self {
        Codepoints { front: begin, back: end }
    }

    /// The position of the next codepoint yielded from the front.
    pub fn cursor(&self) -> &C {
        &self.front
    }
}

impl<C: Cursor> Iterator for Codepoints<C> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.front.offset() >= self.back.offset() || self.front.peek().is_none() {
            return None;
        }
        let (codepoint, front) = decode_and_next(self.front.clone());
        self.front = front;
        Some(codepoint)
    }
}

impl<C: Cursor> DoubleEndedIterator for Codepoints<C> {
    fn next_back(&mut self) -> Option<u32> {
        if self.front.offset() >= self.back.offset() {
            return None;
        }
        self.back = previous(self.back.clone());
        Some(decode_at(&self.back).0)
    }
}

/// An iterator over the codepoints between two cursors that validates every
/// sequence.
///
/// The first error is yielded as `Err` and ends the iteration.
#[derive(Clone, Debug)]
pub struct CheckedCodepoints<C> {
    cursor: C,
    end: C,
    failed: bool,
}

impl<C: Cursor> CheckedCodepoints<C> {
    /// Creates an iterator that validates the sequences from `begin` up to
    /// `end`.
    pub fn new(begin: C, end: C) -> Self {
        CheckedCodepoints { cursor: begin, end, failed: false }
    }

    /// The position of the next sequence to decode. After an error this is
    /// the start of the offending sequence.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }
}

impl<C: Cursor> Iterator for CheckedCodepoints<C> {
    type Item = Result<u32, Utf8Error>;

    fn next(&mut self) -> Option<Result<u32, Utf8Error>> {
        if self.failed || self.cursor.offset() >= self.end.offset() {
            return None;
        }
        match decode_and_next_safe(self.cursor.clone(), &self.end) {
            Ok((codepoint, cursor)) => {
                self.cursor = cursor;
                Some(Ok(codepoint))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<C: Cursor> core::iter::FusedIterator for CheckedCodepoints<C> {}
