/*!
Appendable outputs for encoded bytes and decoded codepoints.

The codec never picks a container for its output. Encoders append into any
[`ByteSink`] and decoders into any [`CodepointSink`]; adapters for the std
growable collections are provided and other containers only need to
implement one method.
*/

use std::collections::VecDeque;

/// A container that encoded bytes can be appended to.
pub trait ByteSink {
    fn push_byte(&mut self, byte: u8);

    /// Appends all of `bytes` in order.
    fn extend_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push_byte(byte);
        }
    }
}

/// A container that decoded codepoints can be appended to.
pub trait CodepointSink {
    fn push_codepoint(&mut self, codepoint: u32);
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    #[inline]
    fn extend_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl ByteSink for VecDeque<u8> {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.push_back(byte);
    }

    fn extend_bytes(&mut self, bytes: &[u8]) {
        self.extend(bytes.iter().copied());
    }
}

impl CodepointSink for Vec<u32> {
    #[inline]
    fn push_codepoint(&mut self, codepoint: u32) {
        self.push(codepoint);
    }
}

impl CodepointSink for VecDeque<u32> {
    #[inline]
    fn push_codepoint(&mut self, codepoint: u32) {
        self.push_back(codepoint);
    }
}
