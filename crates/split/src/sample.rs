// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{EncodedKey, EncodedKeyRange, interface::OrderedRange};
use keystone_type::Result;
use tracing::trace;

use crate::SplitSample;

/// Walks `range` and groups consecutive entries into segments of roughly
/// `segment_bytes`. Each segment yields its middle key weighted by the
/// segment's byte size.
pub fn sample_range<S: OrderedRange>(store: &S, range: EncodedKeyRange, segment_bytes: u64) -> Result<Vec<SplitSample>> {
	let segment_bytes = segment_bytes.max(1);

	let mut result = Vec::new();
	let mut segment: Vec<EncodedKey> = Vec::new();
	let mut weight = 0u64;

	for entry in store.range(range)? {
		weight += (entry.key.len() + entry.values.len()) as u64;
		segment.push(entry.key);
		if weight >= segment_bytes {
			result.push(middle(&mut segment, weight));
			weight = 0;
		}
	}
	if !segment.is_empty() {
		result.push(middle(&mut segment, weight));
	}

	trace!(samples = result.len(), "sampled range");
	Ok(result)
}

fn middle(segment: &mut Vec<EncodedKey>, weight: u64) -> SplitSample {
	let key = segment.swap_remove(segment.len() / 2);
	segment.clear();
	SplitSample::new(key.into_vec(), weight)
}
