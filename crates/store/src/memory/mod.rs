// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use crossbeam_skiplist::SkipMap;
use keystone_core::{EncodedKey, interface::OrderedStore};
use parking_lot::Mutex;

mod commit;
mod contains;
mod get;
mod range;

pub use range::Range;

/// Ordered store held in a lock-free skip list. Clones share the same data.
#[derive(Clone)]
pub struct Memory(Arc<MemoryInner>);

pub struct MemoryInner {
	memory: SkipMap<EncodedKey, Vec<u8>>,
	// serializes commits so one batch is never interleaved with another
	writer: Mutex<()>,
}

impl Deref for Memory {
	type Target = MemoryInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Default for Memory {
	fn default() -> Self {
		Self::new()
	}
}

impl Memory {
	pub fn new() -> Self {
		Self(Arc::new(MemoryInner {
			memory: SkipMap::new(),
			writer: Mutex::new(()),
		}))
	}

	pub fn len(&self) -> usize {
		self.memory.len()
	}

	pub fn is_empty(&self) -> bool {
		self.memory.is_empty()
	}
}

impl OrderedStore for Memory {}
