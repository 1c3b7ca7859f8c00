// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::{
	Result,
	error::diagnostic::contract::{invalid_split_weight, no_split_samples, zero_split_weight},
	return_error,
};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

/// A sampled key and the byte weight of the segment it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSample {
	pub key: Vec<u8>,
	pub weight: u64,
}

impl SplitSample {
	pub fn new(key: impl Into<Vec<u8>>, weight: u64) -> Self {
		Self {
			key: key.into(),
			weight,
		}
	}

	/// Builds a sample from a big-endian weight of at most 8 bytes.
	pub fn from_bytes(key: impl Into<Vec<u8>>, weight: &[u8]) -> Result<Self> {
		if weight.len() > 8 {
			return_error!(invalid_split_weight(weight.len()));
		}
		let mut buf = [0u8; 8];
		buf[8 - weight.len()..].copy_from_slice(weight);
		Ok(Self::new(key, u64::from_be_bytes(buf)))
	}
}

/// Weighted average of the sample keys.
///
/// Every key is right-padded with zero bytes to the longest sample key and
/// read as an unsigned big-endian integer. The result is the integer
/// `Σ(key·weight) / Σweight` in minimal big-endian form.
pub fn combine(samples: &[SplitSample]) -> Result<Vec<u8>> {
	if samples.is_empty() {
		return_error!(no_split_samples());
	}

	let width = samples.iter().map(|s| s.key.len()).max().unwrap_or(0);

	let mut weighted = BigUint::zero();
	let mut total = BigUint::zero();
	let mut padded = Vec::with_capacity(width);
	for sample in samples {
		padded.clear();
		padded.extend_from_slice(&sample.key);
		padded.resize(width, 0x00);

		weighted += BigUint::from_bytes_be(&padded) * sample.weight;
		total += sample.weight;
	}

	if total.is_zero() {
		return_error!(zero_split_weight());
	}

	let average = weighted / total;
	let mut result = average.to_bytes_be();
	if result.first() == Some(&0x00) {
		result.remove(0);
	}

	debug!(samples = samples.len(), width, "combined split samples");
	Ok(result)
}
