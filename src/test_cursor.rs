use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Cursor;

#[derive(Debug)]
struct XorShift64Star {
    state: Cell<u64>,
}

impl XorShift64Star {
    fn new() -> Self {
        // Any non-zero seed will do -- this uses the hash of a global counter.
        let mut seed = 0;
        while seed == 0 {
            let mut hasher = DefaultHasher::new();
            static COUNTER: AtomicUsize = AtomicUsize::new(0);
            hasher.write_usize(COUNTER.fetch_add(1, Ordering::Relaxed));
            seed = hasher.finish();
        }

        XorShift64Star { state: Cell::new(seed) }
    }

    fn next(&self) -> u64 {
        let mut x = self.state.get();
        debug_assert_ne!(x, 0);
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state.set(x);
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Return a value from `0..n`.
    fn next_usize(&self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

/// A cursor over a buffer split into chunks. Sequences may straddle chunk
/// boundaries, and the bytes need not be valid UTF-8.
#[derive(Clone, Debug)]
pub(crate) struct Chunked<'a> {
    chunks: Vec<&'a [u8]>,
    chunk: usize,
    pos: usize,
    offset: usize,
}

impl<'a> Chunked<'a> {
    pub fn new(chunks: &[&'a [u8]]) -> Self {
        let mut chunks: Vec<_> = chunks.iter().copied().filter(|chunk| !chunk.is_empty()).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }
        Chunked { chunks, chunk: 0, pos: 0, offset: 0 }
    }

    /// Splits `haystack` into chunks of random length between 1 and 4 bytes.
    pub fn random(haystack: &'a [u8]) -> Self {
        let ran = XorShift64Star::new();
        let mut chunks = Vec::new();
        let mut start = 0;
        while start < haystack.len() {
            let end = (start + ran.next_usize(4) + 1).min(haystack.len());
            chunks.push(&haystack[start..end]);
            start = end;
        }
        Chunked::new(&chunks)
    }

    /// Returns cursors at the start and at the end of the chunks.
    pub fn bounds(chunks: &[&'a [u8]]) -> (Self, Self) {
        let begin = Chunked::new(chunks);
        let mut end = begin.clone();
        while end.advance() {}
        (begin, end)
    }

    pub fn random_bounds(haystack: &'a [u8]) -> (Self, Self) {
        let begin = Chunked::random(haystack);
        let mut end = begin.clone();
        while end.advance() {}
        (begin, end)
    }
}

impl Cursor for Chunked<'_> {
    fn peek(&self) -> Option<u8> {
        self.chunks[self.chunk].get(self.pos).copied()
    }

    fn advance(&mut self) -> bool {
        if self.peek().is_none() {
            return false;
        }
        self.pos += 1;
        self.offset += 1;
        if self.pos == self.chunks[self.chunk].len() && self.chunk + 1 < self.chunks.len() {
            self.chunk += 1;
            self.pos = 0;
        }
        true
    }

    fn backtrack(&mut self) -> bool {
        if self.offset == 0 {
            return false;
        }
        if self.pos == 0 {
            self.chunk -= 1;
            self.pos = self.chunks[self.chunk].len();
        }
        self.pos -= 1;
        self.offset -= 1;
        true
    }

    fn offset(&self) -> usize {
        self.offset
    }
}
