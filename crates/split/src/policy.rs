// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Bound;

use keystone_core::{EncodedKey, EncodedKeyRange};
use keystone_type::Result;
use tracing::debug;

use crate::{SplitConfig, SplitSample, combine};

/// Chooses the key at which a region is split.
pub trait SplitPolicy {
	/// Returns `None` when no usable split point lies strictly inside
	/// `bounds`.
	fn split_point(&self, samples: &[SplitSample], bounds: &EncodedKeyRange) -> Result<Option<EncodedKey>>;
}

/// Splits at the weighted average of the samples, falling back to the
/// weighted median sample when there are too few samples or the average
/// lands outside the region.
#[derive(Debug, Clone)]
pub struct MedianSplitPolicy {
	min_samples: usize,
}

impl MedianSplitPolicy {
	pub fn new(min_samples: usize) -> Self {
		Self {
			min_samples: min_samples.max(1),
		}
	}
}

impl Default for MedianSplitPolicy {
	fn default() -> Self {
		Self::from(&SplitConfig::default())
	}
}

impl From<&SplitConfig> for MedianSplitPolicy {
	fn from(config: &SplitConfig) -> Self {
		Self::new(config.min_samples)
	}
}

impl SplitPolicy for MedianSplitPolicy {
	fn split_point(&self, samples: &[SplitSample], bounds: &EncodedKeyRange) -> Result<Option<EncodedKey>> {
		if samples.is_empty() {
			return Ok(None);
		}

		if samples.len() >= self.min_samples && samples.iter().any(|s| s.weight > 0) {
			let combined = EncodedKey::new(combine(samples)?);
			if inside(bounds, &combined) {
				debug!(key = ?combined.as_slice(), "split at weighted average");
				return Ok(Some(combined));
			}
		}

		let median = median(samples);
		debug!(key = ?median.as_slice(), "split at median sample");
		Ok(inside(bounds, &median).then_some(median))
	}
}

/// Sample at which the cumulative weight reaches half of the total.
fn median(samples: &[SplitSample]) -> EncodedKey {
	let mut sorted: Vec<&SplitSample> = samples.iter().collect();
	sorted.sort_by(|l, r| l.key.cmp(&r.key));

	let total: u128 = sorted.iter().map(|s| s.weight as u128).sum();
	if total == 0 {
		return EncodedKey::new(sorted[sorted.len() / 2].key.clone());
	}

	let mut seen = 0u128;
	for sample in &sorted {
		seen += sample.weight as u128;
		if seen * 2 >= total {
			return EncodedKey::new(sample.key.clone());
		}
	}
	EncodedKey::new(sorted[sorted.len() - 1].key.clone())
}

/// Splitting at the region start would leave an empty left half.
fn inside(bounds: &EncodedKeyRange, key: &EncodedKey) -> bool {
	if let Bound::Included(start) = &bounds.start {
		if start == key {
			return false;
		}
	}
	bounds.contains_key(key)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bounds(start: &[u8], end: &[u8]) -> EncodedKeyRange {
		EncodedKeyRange::start_end(Some(EncodedKey::new(start)), Some(EncodedKey::new(end)))
	}

	fn key(bytes: &[u8]) -> Option<EncodedKey> {
		Some(EncodedKey::new(bytes))
	}

	#[test]
	fn test_no_samples() {
		let policy = MedianSplitPolicy::default();
		assert_eq!(policy.split_point(&[], &EncodedKeyRange::all()).unwrap(), None);
	}

	#[test]
	fn test_weighted_average_inside_bounds() {
		let policy = MedianSplitPolicy::default();
		let samples = vec![SplitSample::new(*b"aa", 1), SplitSample::new(*b"dd", 2)];
		assert_eq!(policy.split_point(&samples, &bounds(b"a", b"z")).unwrap(), key(b"cc"));
	}

	#[test]
	fn test_too_few_samples_use_median() {
		let policy = MedianSplitPolicy::new(4);
		let samples = vec![SplitSample::new(*b"aa", 1), SplitSample::new(*b"cc", 5), SplitSample::new(*b"dd", 1)];
		assert_eq!(policy.split_point(&samples, &bounds(b"a", b"z")).unwrap(), key(b"cc"));
	}

	#[test]
	fn test_average_outside_bounds_uses_median() {
		let policy = MedianSplitPolicy::default();
		// the average lies above the region and the median is the region start
		let samples = vec![SplitSample::new(*b"b\x00", 1), SplitSample::new(*b"\x00\x00", 1)];
		assert_eq!(policy.split_point(&samples, &bounds(b"\x00\x00", b"\x00\x01")).unwrap(), None);

		let samples = vec![SplitSample::new(*b"bb", 1), SplitSample::new(*b"bz", 1), SplitSample::new(*b"zz", 1)];
		assert_eq!(policy.split_point(&samples, &bounds(b"ba", b"c")).unwrap(), key(b"bz"));
	}

	#[test]
	fn test_region_start_is_not_a_split_point() {
		let policy = MedianSplitPolicy::default();
		let samples = vec![SplitSample::new(*b"aa", 3)];
		assert_eq!(policy.split_point(&samples, &bounds(b"aa", b"z")).unwrap(), None);
	}

	#[test]
	fn test_zero_weights_pick_middle_sample() {
		let policy = MedianSplitPolicy::default();
		let samples = vec![SplitSample::new(*b"a", 0), SplitSample::new(*b"c", 0), SplitSample::new(*b"b", 0)];
		assert_eq!(policy.split_point(&samples, &EncodedKeyRange::all()).unwrap(), key(b"b"));
	}
}
