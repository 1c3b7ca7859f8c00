// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::{
	Result, RowId,
	error,
	error::diagnostic::key::{empty_key, index_key_too_short, invalid_key_length, truncated_key},
	return_error,
};

use super::{EncodedKey, EncodedKeyRange, IndexValues, KeyKind};
use crate::{
	catalog::{IndexId, SortDirection, TableId},
	util::encoding::keycode::{KeyDeserializer, KeySerializer},
};

const KIND_SIZE: usize = 1;
const ID_SIZE: usize = 8;

/// Turns a failed field read into a corrupt key error.
fn field<T>(value: Option<T>, kind: KeyKind, name: &str) -> Result<T> {
	value.ok_or_else(|| error!(truncated_key(kind.name(), name)))
}

/// Size of keys that carry only a table id.
pub const TABLE_KEY_SIZE: usize = KIND_SIZE + ID_SIZE;
/// Size of a data row key.
pub const DATA_KEY_SIZE: usize = KIND_SIZE + ID_SIZE + RowId::SIZE;
/// Size of a null index key, and the minimum size of an index key.
pub const NULL_INDEX_KEY_SIZE: usize = KIND_SIZE + 2 * ID_SIZE + RowId::SIZE;

/// Every key shape stored by the engine.
///
/// A key starts with its [`KeyKind`] byte, followed by the big-endian table
/// id, the index id for index keys, the fixed-width column values for
/// ordered index keys and the row id for row-addressed keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKey {
	Tables,
	Columns {
		table: TableId,
	},
	Indices {
		table: TableId,
	},
	Schema {
		table: TableId,
	},
	AutoInc {
		table: TableId,
	},
	RowCount {
		table: TableId,
	},
	Data {
		table: TableId,
		row: RowId,
	},
	Index {
		table: TableId,
		index: IndexId,
		direction: SortDirection,
		values: IndexValues,
		row: RowId,
	},
	NullIndex {
		table: TableId,
		index: IndexId,
		row: RowId,
	},
}

impl RowKey {
	pub fn kind(&self) -> KeyKind {
		match self {
			RowKey::Tables => KeyKind::Tables,
			RowKey::Columns {
				..
			} => KeyKind::Columns,
			RowKey::Indices {
				..
			} => KeyKind::Indices,
			RowKey::Schema {
				..
			} => KeyKind::Schema,
			RowKey::AutoInc {
				..
			} => KeyKind::AutoInc,
			RowKey::RowCount {
				..
			} => KeyKind::RowCount,
			RowKey::Data {
				..
			} => KeyKind::Data,
			RowKey::Index {
				direction,
				..
			} => KeyKind::index(*direction),
			RowKey::NullIndex {
				..
			} => KeyKind::NullIndex,
		}
	}

	pub fn encode(&self) -> EncodedKey {
		match self {
			RowKey::Tables => EncodedKey::new(vec![KeyKind::Tables as u8]),
			RowKey::Columns {
				table,
			}
			| RowKey::Indices {
				table,
			}
			| RowKey::Schema {
				table,
			}
			| RowKey::AutoInc {
				table,
			}
			| RowKey::RowCount {
				table,
			} => {
				let mut serializer = KeySerializer::with_capacity(TABLE_KEY_SIZE);
				serializer.extend_u8(self.kind()).extend_u64(*table);
				serializer.to_encoded_key()
			}
			RowKey::Data {
				table,
				row,
			} => {
				let mut serializer = KeySerializer::with_capacity(DATA_KEY_SIZE);
				serializer.extend_u8(KeyKind::Data).extend_u64(*table).extend_row_id(*row);
				serializer.to_encoded_key()
			}
			RowKey::Index {
				table,
				index,
				direction,
				values,
				row,
			} => {
				let mut serializer = KeySerializer::with_capacity(NULL_INDEX_KEY_SIZE + values.len());
				serializer
					.extend_u8(KeyKind::index(*direction))
					.extend_u64(*table)
					.extend_u64(*index)
					.extend_bytes(values.as_bytes())
					.extend_row_id(*row);
				serializer.to_encoded_key()
			}
			RowKey::NullIndex {
				table,
				index,
				row,
			} => {
				let mut serializer = KeySerializer::with_capacity(NULL_INDEX_KEY_SIZE);
				serializer
					.extend_u8(KeyKind::NullIndex)
					.extend_u64(*table)
					.extend_u64(*index)
					.extend_row_id(*row);
				serializer.to_encoded_key()
			}
		}
	}

	/// Parses a stored key. Unknown kinds and lengths that do not match the
	/// kind's layout are corrupt keys.
	pub fn decode(key: &EncodedKey) -> Result<Self> {
		let Some(first) = key.first() else {
			return_error!(empty_key());
		};
		let kind = KeyKind::try_from(*first)?;

		let expect_length = |expected: usize| -> Result<()> {
			if key.len() != expected {
				return_error!(invalid_key_length(kind.name(), expected, key.len()));
			}
			Ok(())
		};

		let mut de = KeyDeserializer::from_bytes(&key[KIND_SIZE..]);
		match kind {
			KeyKind::Tables => {
				expect_length(KIND_SIZE)?;
				Ok(RowKey::Tables)
			}
			KeyKind::Columns | KeyKind::Indices | KeyKind::Schema | KeyKind::AutoInc | KeyKind::RowCount => {
				expect_length(TABLE_KEY_SIZE)?;
				let table = TableId(field(de.read_u64(), kind, "table id")?);
				Ok(match kind {
					KeyKind::Columns => RowKey::Columns {
						table,
					},
					KeyKind::Indices => RowKey::Indices {
						table,
					},
					KeyKind::Schema => RowKey::Schema {
						table,
					},
					KeyKind::AutoInc => RowKey::AutoInc {
						table,
					},
					_ => RowKey::RowCount {
						table,
					},
				})
			}
			KeyKind::Data => {
				expect_length(DATA_KEY_SIZE)?;
				let table = TableId(field(de.read_u64(), kind, "table id")?);
				let row = field(de.read_row_id(), kind, "row id")?;
				Ok(RowKey::Data {
					table,
					row,
				})
			}
			KeyKind::NullIndex => {
				expect_length(NULL_INDEX_KEY_SIZE)?;
				let table = TableId(field(de.read_u64(), kind, "table id")?);
				let index = IndexId(field(de.read_u64(), kind, "index id")?);
				let row = field(de.read_row_id(), kind, "row id")?;
				Ok(RowKey::NullIndex {
					table,
					index,
					row,
				})
			}
			KeyKind::IndexAsc | KeyKind::IndexDesc => {
				if key.len() < NULL_INDEX_KEY_SIZE {
					return_error!(index_key_too_short(key.len()));
				}
				let direction = if kind == KeyKind::IndexAsc {
					SortDirection::Asc
				} else {
					SortDirection::Desc
				};
				let table = TableId(field(de.read_u64(), kind, "table id")?);
				let index = IndexId(field(de.read_u64(), kind, "index id")?);
				let values = field(de.read_bytes(key.len() - NULL_INDEX_KEY_SIZE), kind, "index values")?;
				let row = field(de.read_row_id(), kind, "row id")?;
				Ok(RowKey::Index {
					table,
					index,
					direction,
					values: IndexValues::new(values),
					row,
				})
			}
		}
	}

	/// Row id of row-addressed keys.
	pub fn row(&self) -> Option<RowId> {
		match self {
			RowKey::Data {
				row,
				..
			}
			| RowKey::Index {
				row,
				..
			}
			| RowKey::NullIndex {
				row,
				..
			} => Some(*row),
			_ => None,
		}
	}
}

// Key prefixes and scan ranges
impl RowKey {
	pub fn data_prefix(table: TableId) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(TABLE_KEY_SIZE);
		serializer.extend_u8(KeyKind::Data).extend_u64(table);
		serializer.to_encoded_key()
	}

	pub fn index_prefix(table: TableId, index: IndexId, direction: SortDirection) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(TABLE_KEY_SIZE + ID_SIZE);
		serializer.extend_u8(KeyKind::index(direction)).extend_u64(table).extend_u64(index);
		serializer.to_encoded_key()
	}

	pub fn null_index_prefix(table: TableId, index: IndexId) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(TABLE_KEY_SIZE + ID_SIZE);
		serializer.extend_u8(KeyKind::NullIndex).extend_u64(table).extend_u64(index);
		serializer.to_encoded_key()
	}

	/// Every data row of a table, ordered by row id.
	pub fn data_scan(table: TableId) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&Self::data_prefix(table))
	}

	/// Every entry of one direction of an index.
	pub fn index_scan(table: TableId, index: IndexId, direction: SortDirection) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&Self::index_prefix(table, index, direction))
	}

	pub fn null_index_scan(table: TableId, index: IndexId) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&Self::null_index_prefix(table, index))
	}
}

#[cfg(test)]
mod tests {
	use keystone_type::ErrorKind;

	use super::*;

	fn row(byte: u8) -> RowId {
		RowId::from_bytes([byte; 16])
	}

	fn all_shapes(table: u64) -> Vec<RowKey> {
		let table = TableId(table);
		vec![
			RowKey::Tables,
			RowKey::Columns {
				table,
			},
			RowKey::Indices {
				table,
			},
			RowKey::Schema {
				table,
			},
			RowKey::AutoInc {
				table,
			},
			RowKey::RowCount {
				table,
			},
			RowKey::Data {
				table,
				row: row(0x11),
			},
			RowKey::Index {
				table,
				index: IndexId(3),
				direction: SortDirection::Asc,
				values: IndexValues::new(vec![0x80, 0, 0, 0, 0, 0, 0, 5]),
				row: row(0x22),
			},
			RowKey::Index {
				table,
				index: IndexId(3),
				direction: SortDirection::Desc,
				values: IndexValues::new(vec![0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFA]),
				row: row(0x22),
			},
			RowKey::NullIndex {
				table,
				index: IndexId(3),
				row: row(0x33),
			},
		]
	}

	#[test]
	fn test_encode_decode_every_shape() {
		for key in all_shapes(42) {
			let encoded = key.encode();
			assert_eq!(encoded[0], key.kind() as u8);
			assert_eq!(RowKey::decode(&encoded).unwrap(), key);
		}
	}

	#[test]
	fn test_layout_is_bit_exact() {
		let key = RowKey::Data {
			table: TableId(0x0102),
			row: row(0xAB),
		}
		.encode();
		let mut expected = vec![0x06, 0, 0, 0, 0, 0, 0, 0x01, 0x02];
		expected.extend([0xAB; 16]);
		assert_eq!(key.as_slice(), expected.as_slice());

		let key = RowKey::Schema {
			table: TableId(7),
		}
		.encode();
		assert_eq!(key.as_slice(), &[0x03, 0, 0, 0, 0, 0, 0, 0, 7]);
	}

	#[test]
	fn test_shapes_sort_by_kind_regardless_of_ids() {
		let low_ids = all_shapes(u64::MAX);
		let high_ids = all_shapes(0);
		for (i, a) in low_ids.iter().enumerate() {
			for b in high_ids.iter().skip(i + 1) {
				assert!(a.encode() < b.encode(), "{:?} !< {:?}", a.kind(), b.kind());
			}
		}
	}

	#[test]
	fn test_row_id_breaks_ties() {
		let values = IndexValues::new(vec![0x80, 0, 0, 0, 0, 0, 0, 5]);
		let key = |r: RowId| RowKey::Index {
			table: TableId(1),
			index: IndexId(1),
			direction: SortDirection::Asc,
			values: values.clone(),
			row: r,
		};
		let a = key(row(0x01)).encode();
		let b = key(row(0x02)).encode();
		assert_ne!(a, b);
		assert!(a < b);
	}

	#[test]
	fn test_decode_empty_key() {
		let err = RowKey::decode(&EncodedKey::new(vec![])).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::CorruptKey);
	}

	#[test]
	fn test_decode_unknown_kind() {
		let err = RowKey::decode(&EncodedKey::new(vec![0x42, 0, 0])).unwrap_err();
		assert_eq!(err.code, "KEY_002");
	}

	#[test]
	fn test_decode_wrong_length() {
		let mut bytes = RowKey::Data {
			table: TableId(1),
			row: row(1),
		}
		.encode()
		.into_vec();
		bytes.pop();
		let err = RowKey::decode(&EncodedKey::new(bytes)).unwrap_err();
		assert_eq!(err.code, "KEY_003");

		let err = RowKey::decode(&EncodedKey::new(vec![0x00, 0x00])).unwrap_err();
		assert_eq!(err.code, "KEY_003");
	}

	#[test]
	fn test_decode_short_index_key() {
		let err = RowKey::decode(&EncodedKey::new(vec![0x07; 20])).unwrap_err();
		assert_eq!(err.code, "KEY_004");
	}

	#[test]
	fn test_field_reads_past_the_end_are_corrupt() {
		let mut de = KeyDeserializer::from_bytes(&[0, 0, 0, 7]);
		let err = field(de.read_u64(), KeyKind::Data, "table id").unwrap_err();
		assert_eq!(err.code, "KEY_005");
		assert_eq!(err.kind(), ErrorKind::CorruptKey);

		let mut de = KeyDeserializer::from_bytes(&[0, 0, 0, 0, 0, 0, 0, 7]);
		assert_eq!(field(de.read_u64(), KeyKind::Data, "table id").unwrap(), 7);
		let err = field(de.read_row_id(), KeyKind::Data, "row id").unwrap_err();
		assert_eq!(err.code, "KEY_005");
	}

	#[test]
	fn test_scans_cover_only_their_table() {
		let range = RowKey::data_scan(TableId(5));
		let inside = RowKey::Data {
			table: TableId(5),
			row: RowId::max(),
		}
		.encode();
		let outside = RowKey::Data {
			table: TableId(6),
			row: RowId::nil(),
		}
		.encode();
		assert!(range.contains_key(&inside));
		assert!(!range.contains_key(&outside));
	}
}
