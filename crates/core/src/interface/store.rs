// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The ordered byte-keyed store the engine runs on. Keys compare as
//! unsigned byte strings; range scans only ever move forward.

use keystone_type::Result;

use crate::{EncodedKey, EncodedKeyRange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta {
	Set {
		key: EncodedKey,
		values: Vec<u8>,
	},
	Remove {
		key: EncodedKey,
	},
}

impl Delta {
	pub fn key(&self) -> &EncodedKey {
		match self {
			Delta::Set {
				key,
				..
			}
			| Delta::Remove {
				key,
			} => key,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredValues {
	pub key: EncodedKey,
	pub values: Vec<u8>,
}

pub trait OrderedStore:
	Send + Sync + Clone + OrderedCommit + OrderedGet + OrderedContains + OrderedSet + OrderedRemove + OrderedRange + 'static
{
}

pub trait OrderedCommit {
	/// Applies all deltas of one batch in order.
	fn commit(&self, deltas: Vec<Delta>) -> Result<()>;
}

pub trait OrderedGet {
	fn get(&self, key: &EncodedKey) -> Result<Option<StoredValues>>;
}

pub trait OrderedContains {
	fn contains(&self, key: &EncodedKey) -> Result<bool>;
}

pub trait OrderedSet: OrderedCommit {
	fn set(&self, key: &EncodedKey, values: Vec<u8>) -> Result<()> {
		Self::commit(
			self,
			vec![Delta::Set {
				key: key.clone(),
				values,
			}],
		)
	}
}

pub trait OrderedRemove: OrderedCommit {
	fn remove(&self, key: &EncodedKey) -> Result<()> {
		Self::commit(
			self,
			vec![Delta::Remove {
				key: key.clone(),
			}],
		)
	}
}

pub trait OrderedIter: Iterator<Item = StoredValues> {}
impl<T> OrderedIter for T where T: Iterator<Item = StoredValues> {}

pub trait OrderedRange {
	type Range<'a>: OrderedIter
	where
		Self: 'a;

	/// Entries within `range` in ascending key order.
	fn range(&self, range: EncodedKeyRange) -> Result<Self::Range<'_>>;

	fn prefix(&self, prefix: &EncodedKey) -> Result<Self::Range<'_>> {
		self.range(EncodedKeyRange::prefix(prefix))
	}
}
