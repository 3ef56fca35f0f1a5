use regex_automata::util::escape::DebugByte;

use crate::util::utf8::NOT_A_CHARACTER;

/// The reason a checked operation rejected its input.
///
/// This is a closed set. Every malformed input maps to exactly one kind,
/// determined by the first rule it violates in this order: leading byte
/// classification, sequence truncation, continuation byte shape, overlong
/// form, codepoint range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The first byte of a sequence is a continuation byte or `11111xxx`.
    BadLeadingByte,
    /// The input ended before all bytes declared by the leading byte.
    IncompleteSequence,
    /// A codepoint is encoded with more bytes than its value requires.
    OverlongSequence,
    /// A byte that should continue a sequence is not of the form `10xxxxxx`.
    BadContinuationByte,
    /// The codepoint is a surrogate or outside the range its length allows.
    BadCodepoint,
}

impl ErrorKind {
    /// Returns a short human readable description of this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::BadLeadingByte => "bad leading byte",
            ErrorKind::IncompleteSequence => "incomplete sequence",
            ErrorKind::OverlongSequence => "overlong sequence",
            ErrorKind::BadContinuationByte => "bad continuation byte",
            ErrorKind::BadCodepoint => "bad code point",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Returns the message for an optional error kind, where `None` is the
/// "no error" state.
///
/// # Example
///
/// ```
/// use utf8_cursor::{error_message, ErrorKind};
///
/// assert_eq!("no error", error_message(None));
/// assert_eq!("overlong sequence", error_message(Some(ErrorKind::OverlongSequence)));
/// ```
pub fn error_message(kind: Option<ErrorKind>) -> &'static str {
    kind.map_or("no error", ErrorKind::message)
}

/// An error that occurs when a checked operation encounters a sequence that
/// is not valid UTF-8, or a codepoint that cannot be encoded.
///
/// The error provides:
///
/// * The [`ErrorKind`] that was violated.
/// * The offset of the start of the offending sequence. For encoding errors
/// this is the index of the offending codepoint in its input.
/// * The number of bytes the leading byte declared, when decoding. This is `0`
/// for a bad leading byte and for encoding errors.
/// * The first byte of the offending sequence, if there was one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utf8Error {
    kind: ErrorKind,
    offset: usize,
    byte_count: usize,
    byte: Option<u8>,
}

impl Utf8Error {
    pub(crate) fn decode(
        kind: ErrorKind,
        offset: usize,
        byte_count: usize,
        byte: Option<u8>,
    ) -> Utf8Error {
        Utf8Error { kind, offset, byte_count, byte }
    }

    pub(crate) fn encode(offset: usize) -> Utf8Error {
        Utf8Error { kind: ErrorKind::BadCodepoint, offset, byte_count: 0, byte: None }
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the offset at which the offending sequence (or codepoint)
    /// starts.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the sequence length declared by the leading byte.
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Returns the sentinel codepoint that stands in for the failed decode,
    /// [`NOT_A_CHARACTER`].
    pub fn codepoint(&self) -> u32 {
        NOT_A_CHARACTER
    }

    /// Returns a short human readable description of the failure.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    pub(crate) fn with_offset(mut self, offset: usize) -> Utf8Error {
        self.offset = offset;
        self
    }
}

impl std::error::Error for Utf8Error {}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.byte {
            Some(byte) => {
                let byte = DebugByte(byte);
                write!(f, "{} at offset {} (byte \"{:?}\")", self.kind, self.offset, byte)
            }
            None => write!(f, "{} at offset {}", self.kind, self.offset),
        }
    }
}
