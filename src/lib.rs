/*!
A UTF-8 codec over generic byte cursors.

Every operation comes in two flavours. The trusting one (`decode`, `encode`,
`next`, ...) assumes well formed input and does no checking beyond staying in
bounds. The checked one (`decode_safe`, `encode_safe`, `validate`, ...)
classifies every malformed sequence into an [`ErrorKind`] and reports it as a
[`Utf8Error`].

Input is read through the [`Cursor`] trait, implemented here for byte slices,
string slices and (with the `ropey` feature) rope slices. Output is appended
to a [`ByteSink`] or [`CodepointSink`].

# Example

```
use utf8_cursor::{decode_range_safe, encode_range, ErrorKind, SliceCursor};

let mut bytes: Vec<u8> = Vec::new();
encode_range([0x41, 0xE4, 0x1D122], &mut bytes);
assert_eq!("Aä𝄢".as_bytes(), &bytes[..]);

let (begin, end) = SliceCursor::bounds(b"A\xED\xA0\x80");
let mut codepoints: Vec<u32> = Vec::new();
let err = decode_range_safe(begin, &end, &mut codepoints).unwrap_err();
assert_eq!(ErrorKind::BadCodepoint, err.kind());
assert_eq!(vec![0x41u32], codepoints);
```
*/

pub use c_str::{count_c_str, decode_c_str, decode_c_str_safe, until_nul, validate_c_str};
#[cfg(feature = "ropey")]
pub use cursor::RopeyCursor;
pub use cursor::{Cursor, IntoCursor, SliceCursor};
pub use decode::{decode, decode_at, decode_safe, decode_safe_at};
pub use encode::{encode, encode_safe, encode_to_array};
pub use error::{error_message, ErrorKind, Utf8Error};
pub use iter::{
    count, decode_and_next, decode_and_next_safe, decode_and_previous, decode_and_previous_safe,
    distance, next, previous, CheckedCodepoints, Codepoints,
};
pub use range::{decode_range, decode_range_safe, encode_range, encode_range_safe};
pub use sink::{ByteSink, CodepointSink};
pub use util::utf8::{
    byte_count, encoded_len, is_ascii, is_boundary, is_continuation_byte, is_surrogate,
    is_valid_codepoint, MAX_CODEPOINT, MAX_UTF8_LEN, NOT_A_CHARACTER,
};
pub use validate::{valid_up_to, validate, validate_with_position};

mod c_str;
mod cursor;
mod decode;
mod encode;
mod error;
mod iter;
mod range;
mod sink;
mod util;
mod validate;

#[cfg(test)]
mod test_cursor;
