/// Conversion into a [`Cursor`] positioned at the start of a buffer.
pub trait IntoCursor {
    type Cursor: Cursor;
    fn into_cursor(self) -> Self::Cursor;
}

impl<C: Cursor> IntoCursor for C {
    type Cursor = Self;

    fn into_cursor(self) -> Self {
        self
    }
}

impl<'a> IntoCursor for &'a [u8] {
    type Cursor = SliceCursor<'a>;

    fn into_cursor(self) -> SliceCursor<'a> {
        SliceCursor::new(self)
    }
}

impl<'a, const N: usize> IntoCursor for &'a [u8; N] {
    type Cursor = SliceCursor<'a>;

    fn into_cursor(self) -> SliceCursor<'a> {
        SliceCursor::new(self)
    }
}

impl<'a> IntoCursor for &'a str {
    type Cursor = SliceCursor<'a>;

    fn into_cursor(self) -> SliceCursor<'a> {
        SliceCursor::new(self.as_bytes())
    }
}

#[cfg(feature = "ropey")]
impl<'a> IntoCursor for ropey::RopeSlice<'a> {
    type Cursor = RopeyCursor<'a>;

    fn into_cursor(self) -> RopeyCursor<'a> {
        RopeyCursor::new(self)
    }
}

#[cfg(feature = "ropey")]
impl<'a> IntoCursor for &'a ropey::Rope {
    type Cursor = RopeyCursor<'a>;

    fn into_cursor(self) -> RopeyCursor<'a> {
        RopeyCursor::new(self.slice(..))
    }
}

/// A bidirectional position inside a byte buffer.
///
/// A cursor sits either on a byte or at the end of its buffer. Two cursors
/// over the same buffer are compared by their [`offset`](Cursor::offset).
/// Nothing here knows about UTF-8; the codec routines build on these four
/// primitives only, so any buffer type (contiguous or not) can be decoded
/// once it provides them.
pub trait Cursor: Clone {
    /// Returns the byte under the cursor, or `None` at the end of the buffer.
    fn peek(&self) -> Option<u8>;
    /// Moves forward by one byte. Returns false (without moving) if the
    /// cursor is already at the end of the buffer.
    fn advance(&mut self) -> bool;
    /// Moves backward by one byte. Returns false (without moving) if the
    /// cursor is already at the start of the buffer.
    fn backtrack(&mut self) -> bool;
    /// The position of this cursor in bytes from the start of the buffer.
    fn offset(&self) -> usize;

    /// Moves forward by up to `n` bytes and returns how far it got.
    fn advance_by(&mut self, n: usize) -> usize {
        let mut moved = 0;
        while moved < n && self.advance() {
            moved += 1;
        }
        moved
    }
}

/// A [`Cursor`] over a contiguous byte slice.
#[derive(Clone, Copy, Debug)]
pub struct SliceCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    /// Creates a cursor at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceCursor { bytes, pos: 0 }
    }

    /// Creates a cursor at `pos`, clamped to the length of `bytes`.
    pub fn at(bytes: &'a [u8], pos: usize) -> Self {
        SliceCursor { bytes, pos: pos.min(bytes.len()) }
    }

    /// Returns cursors at the start and at the end of `bytes`.
    ///
    /// # Example
    ///
    /// ```
    /// use utf8_cursor::{count, SliceCursor};
    ///
    /// let (begin, end) = SliceCursor::bounds("añb".as_bytes());
    /// assert_eq!(3, count(begin, &end));
    /// ```
    pub fn bounds(bytes: &'a [u8]) -> (Self, Self) {
        (SliceCursor::new(bytes), SliceCursor::at(bytes, bytes.len()))
    }

    /// The whole underlying buffer.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The bytes from the cursor to the end of the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl Cursor for SliceCursor<'_> {
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn advance(&mut self) -> bool {
        if self.pos < self.bytes.len() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn backtrack(&mut self) -> bool {
        if self.pos > 0 {
            self.pos -= 1;
            true
        } else {
            false
        }
    }

    fn offset(&self) -> usize {
        self.pos
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let moved = n.min(self.bytes.len() - self.pos);
        self.pos += moved;
        moved
    }
}

/// A [`Cursor`] over the chunks of a rope.
///
/// The chunk containing the cursor is cached, so stepping inside a chunk
/// never walks the tree.
#[cfg(feature = "ropey")]
#[derive(Clone, Copy, Debug)]
pub struct RopeyCursor<'a> {
    slice: ropey::RopeSlice<'a>,
    chunk: &'a [u8],
    chunk_start: usize,
    pos: usize,
}

#[cfg(feature = "ropey")]
impl<'a> RopeyCursor<'a> {
    /// Creates a cursor at the start of `slice`.
    pub fn new(slice: ropey::RopeSlice<'a>) -> Self {
        Self::at(slice, 0)
    }

    /// Creates a cursor at byte `pos`, clamped to the length of `slice`.
    pub fn at(slice: ropey::RopeSlice<'a>, pos: usize) -> Self {
        let pos = pos.min(slice.len_bytes());
        let (chunk, chunk_start, _, _) = slice.chunk_at_byte(pos);
        RopeyCursor { slice, chunk: chunk.as_bytes(), chunk_start, pos }
    }

    /// Returns cursors at the start and at the end of `slice`.
    pub fn bounds(slice: ropey::RopeSlice<'a>) -> (Self, Self) {
        (Self::new(slice), Self::at(slice, slice.len_bytes()))
    }

    fn load_chunk(&mut self) {
        let (chunk, chunk_start, _, _) = self.slice.chunk_at_byte(self.pos);
        self.chunk = chunk.as_bytes();
        self.chunk_start = chunk_start;
    }
}

#[cfg(feature = "ropey")]
impl Cursor for RopeyCursor<'_> {
    fn peek(&self) -> Option<u8> {
        if self.pos >= self.slice.len_bytes() {
            return None;
        }
        self.chunk.get(self.pos - self.chunk_start).copied()
    }

    fn advance(&mut self) -> bool {
        if self.pos >= self.slice.len_bytes() {
            return false;
        }
        self.pos += 1;
        if self.pos - self.chunk_start >= self.chunk.len() && self.pos < self.slice.len_bytes() {
            self.load_chunk();
        }
        true
    }

    fn backtrack(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        if self.pos < self.chunk_start {
            self.load_chunk();
        }
        true
    }

    fn offset(&self) -> usize {
        self.pos
    }
}
