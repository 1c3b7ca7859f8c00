// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Keycode is a lexicographical order-preserving binary encoding for column
//! values embedded in keys of an ordered key/value store.
//!
//! Every supported type is encoded so that comparing two encodings as
//! unsigned byte strings yields the same order as comparing the values:
//!
//! * ULONG: 8 byte big-endian.
//! * LONG, TIME: 8 byte big-endian, sign bit flipped.
//! * DOUBLE: 8 byte big-endian, sign bit flipped, all bits flipped if
//!   negative.
//! * DECIMAL: integer and fraction digits packed into fixed slots, sign bit
//!   of the first byte flipped, all bytes flipped if negative.
//! * STRING, BINARY: raw bytes. Inside keys they are right-padded with
//!   `0x00` to the column's max length.
//! * DATE, DATETIME: canonical `yyyy-MM-dd` and `yyyy-MM-dd HH:mm:ss` text.
//!
//! Descending encodings are the bitwise complement of the ascending ones,
//! padding included.

mod decimal;
mod deserializer;
mod serializer;
mod value;

pub use decimal::{bytes_for_digits, decimal_width};
pub use deserializer::KeyDeserializer;
pub use serializer::KeySerializer;
pub use value::{decode, decode_key, encode, encode_key, key_width};

/// Flips every bit of `bytes` in place.
#[inline]
pub fn complement(bytes: &mut [u8]) {
	for byte in bytes.iter_mut() {
		*byte = !*byte;
	}
}
