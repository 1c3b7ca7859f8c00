// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::RowId;

use crate::EncodedKey;

/// Appends fixed-width, big-endian fields to a key buffer.
#[derive(Debug, Default)]
pub struct KeySerializer {
	buffer: Vec<u8>,
}

impl KeySerializer {
	pub fn new() -> Self {
		Self {
			buffer: Vec::new(),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	pub fn extend_u8(&mut self, value: impl Into<u8>) -> &mut Self {
		self.buffer.push(value.into());
		self
	}

	pub fn extend_u64(&mut self, value: impl Into<u64>) -> &mut Self {
		self.buffer.extend_from_slice(&value.into().to_be_bytes());
		self
	}

	pub fn extend_bytes(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
		self.buffer.extend_from_slice(bytes.as_ref());
		self
	}

	pub fn extend_repeat(&mut self, byte: u8, count: usize) -> &mut Self {
		self.buffer.resize(self.buffer.len() + count, byte);
		self
	}

	pub fn extend_row_id(&mut self, row: RowId) -> &mut Self {
		self.buffer.extend_from_slice(row.as_bytes());
		self
	}

	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	pub fn finish(self) -> Vec<u8> {
		self.buffer
	}

	pub fn to_encoded_key(self) -> EncodedKey {
		EncodedKey::new(self.buffer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chained_fields() {
		let mut serializer = KeySerializer::with_capacity(10);
		serializer.extend_u8(0x07u8).extend_u64(0x0102u64).extend_repeat(0xFF, 1);
		assert_eq!(serializer.finish(), vec![0x07, 0, 0, 0, 0, 0, 0, 0x01, 0x02, 0xFF]);
	}

	#[test]
	fn test_row_id() {
		let mut serializer = KeySerializer::new();
		serializer.extend_row_id(RowId::max());
		assert_eq!(serializer.len(), 16);
		assert!(serializer.finish().iter().all(|b| *b == 0xFF));
	}
}
