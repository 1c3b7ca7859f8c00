// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod store;

pub use store::{
	Delta, OrderedCommit, OrderedContains, OrderedGet, OrderedIter, OrderedRange, OrderedRemove, OrderedSet,
	OrderedStore, StoredValues,
};
