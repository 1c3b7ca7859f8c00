// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Bound, RangeBounds};

use super::EncodedKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyRange {
	pub start: Bound<EncodedKey>,
	pub end: Bound<EncodedKey>,
}

impl EncodedKeyRange {
	pub fn new(start: Bound<EncodedKey>, end: Bound<EncodedKey>) -> Self {
		Self {
			start,
			end,
		}
	}

	/// Inclusive start, exclusive end. `None` leaves the side unbounded.
	pub fn start_end(start: Option<EncodedKey>, end: Option<EncodedKey>) -> Self {
		Self {
			start: start.map_or(Bound::Unbounded, Bound::Included),
			end: end.map_or(Bound::Unbounded, Bound::Excluded),
		}
	}

	/// Every key that starts with `prefix`.
	pub fn prefix(prefix: &[u8]) -> Self {
		Self {
			start: Bound::Included(EncodedKey::new(prefix)),
			end: prefix_end(prefix).map_or(Bound::Unbounded, Bound::Excluded),
		}
	}

	pub fn all() -> Self {
		Self {
			start: Bound::Unbounded,
			end: Bound::Unbounded,
		}
	}

	pub fn contains_key(&self, key: &[u8]) -> bool {
		let after_start = match &self.start {
			Bound::Included(start) => key >= start.as_slice(),
			Bound::Excluded(start) => key > start.as_slice(),
			Bound::Unbounded => true,
		};
		let before_end = match &self.end {
			Bound::Included(end) => key <= end.as_slice(),
			Bound::Excluded(end) => key < end.as_slice(),
			Bound::Unbounded => true,
		};
		after_start && before_end
	}
}

impl RangeBounds<EncodedKey> for EncodedKeyRange {
	fn start_bound(&self) -> Bound<&EncodedKey> {
		self.start.as_ref()
	}

	fn end_bound(&self) -> Bound<&EncodedKey> {
		self.end.as_ref()
	}
}

/// The smallest key greater than every key starting with `prefix`, or
/// `None` when no such key exists (empty or all `0xFF`).
pub fn prefix_end(prefix: &[u8]) -> Option<EncodedKey> {
	let position = prefix.iter().rposition(|b| *b != 0xFF)?;
	let mut end = prefix[..=position].to_vec();
	end[position] += 1;
	Some(EncodedKey::new(end))
}
