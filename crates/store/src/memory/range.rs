// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crossbeam_skiplist::map::Range as MapRange;
use keystone_core::{
	EncodedKey, EncodedKeyRange,
	interface::{OrderedRange, StoredValues},
};
use keystone_type::Result;

use crate::memory::Memory;

impl OrderedRange for Memory {
	type Range<'a> = Range<'a>;

	fn range(&self, range: EncodedKeyRange) -> Result<Self::Range<'_>> {
		Ok(Range {
			range: self.memory.range(range),
		})
	}
}

pub struct Range<'a> {
	pub(crate) range: MapRange<'a, EncodedKey, EncodedKeyRange, EncodedKey, Vec<u8>>,
}

impl<'a> Iterator for Range<'a> {
	type Item = StoredValues;

	fn next(&mut self) -> Option<Self::Item> {
		let entry = self.range.next()?;
		Some(StoredValues {
			key: entry.key().clone(),
			values: entry.value().clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use std::ops::Bound;

	use keystone_core::interface::{Delta, OrderedCommit, OrderedContains, OrderedGet, OrderedRemove, OrderedSet};

	use super::*;

	fn key(bytes: &[u8]) -> EncodedKey {
		EncodedKey::new(bytes)
	}

	fn keys(store: &Memory, range: EncodedKeyRange) -> Vec<Vec<u8>> {
		store.range(range).unwrap().map(|entry| entry.key.into_vec()).collect()
	}

	fn seeded() -> Memory {
		let store = Memory::new();
		let entries: [&[u8]; 5] = [&[0x01], &[0x02, 0x00], &[0x02, 0xFF], &[0x03], &[0xFF, 0xFF]];
		store.commit(
			entries
				.into_iter()
				.map(|k| Delta::Set {
					key: key(k),
					values: k.to_vec(),
				})
				.collect(),
		)
		.unwrap();
		store
	}

	#[test]
	fn test_set_get_remove() {
		let store = Memory::new();
		store.set(&key(b"a"), b"1".to_vec()).unwrap();
		assert_eq!(store.get(&key(b"a")).unwrap().unwrap().values, b"1".to_vec());
		assert!(store.contains(&key(b"a")).unwrap());

		store.remove(&key(b"a")).unwrap();
		assert_eq!(store.get(&key(b"a")).unwrap(), None);
		assert!(!store.contains(&key(b"a")).unwrap());
	}

	#[test]
	fn test_set_overwrites() {
		let store = Memory::new();
		store.set(&key(b"a"), b"1".to_vec()).unwrap();
		store.set(&key(b"a"), b"2".to_vec()).unwrap();
		assert_eq!(store.get(&key(b"a")).unwrap().unwrap().values, b"2".to_vec());
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn test_range_is_ordered_and_bounded() {
		let store = seeded();
		assert_eq!(keys(&store, EncodedKeyRange::all()).len(), 5);
		assert_eq!(
			keys(&store, EncodedKeyRange::start_end(Some(key(&[0x02])), Some(key(&[0x03])))),
			vec![vec![0x02, 0x00], vec![0x02, 0xFF]]
		);
		assert_eq!(
			keys(&store, EncodedKeyRange::new(Bound::Excluded(key(&[0x02, 0x00])), Bound::Included(key(&[0x03])))),
			vec![vec![0x02, 0xFF], vec![0x03]]
		);
	}

	#[test]
	fn test_prefix() {
		let store = seeded();
		assert_eq!(store.prefix(&key(&[0x02])).unwrap().count(), 2);
		assert_eq!(store.prefix(&key(&[0xFF])).unwrap().count(), 1);
	}

	#[test]
	fn test_commit_applies_in_order() {
		let store = Memory::new();
		store.commit(vec![
			Delta::Set {
				key: key(b"k"),
				values: b"1".to_vec(),
			},
			Delta::Remove {
				key: key(b"k"),
			},
			Delta::Set {
				key: key(b"j"),
				values: b"2".to_vec(),
			},
		])
		.unwrap();
		assert!(!store.contains(&key(b"k")).unwrap());
		assert!(store.contains(&key(b"j")).unwrap());
	}

	#[test]
	fn test_clones_share_data() {
		let store = Memory::new();
		let clone = store.clone();
		clone.set(&key(b"x"), vec![]).unwrap();
		assert!(store.contains(&key(b"x")).unwrap());
	}
}
