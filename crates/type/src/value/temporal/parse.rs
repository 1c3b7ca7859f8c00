// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Splitting of the accepted date and time spellings into numeric
//! components. Range validation happens in the value constructors.

fn number(text: &str, min_len: usize, max_len: usize) -> Option<u32> {
	if text.len() < min_len || text.len() > max_len || !text.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	text.parse().ok()
}

/// `yyyy-MM-dd`, `yyyy/MM/dd` or `yyyyMMdd`.
pub(crate) fn ymd(text: &str) -> Option<(i32, u32, u32)> {
	let separator = if text.contains('-') {
		'-'
	} else if text.contains('/') {
		'/'
	} else {
		if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
			return None;
		}
		let year = number(&text[0..4], 4, 4)?;
		let month = number(&text[4..6], 2, 2)?;
		let day = number(&text[6..8], 2, 2)?;
		return Some((year as i32, month, day));
	};

	let mut parts = text.split(separator);
	let year = number(parts.next()?, 4, 4)?;
	let month = number(parts.next()?, 1, 2)?;
	let day = number(parts.next()?, 1, 2)?;
	if parts.next().is_some() {
		return None;
	}
	Some((year as i32, month, day))
}

/// `HH:mm:ss`, `HH:mm` or `HHmmss`. Hours may exceed two digits in the
/// colon forms.
pub(crate) fn hms(text: &str) -> Option<(u32, u32, u32)> {
	if !text.contains(':') {
		if text.len() != 6 || !text.bytes().all(|b| b.is_ascii_digit()) {
			return None;
		}
		let hour = number(&text[0..2], 2, 2)?;
		let minute = number(&text[2..4], 2, 2)?;
		let second = number(&text[4..6], 2, 2)?;
		return Some((hour, minute, second));
	}

	let mut parts = text.split(':');
	let hour = number(parts.next()?, 1, 3)?;
	let minute = number(parts.next()?, 1, 2)?;
	let second = match parts.next() {
		Some(second) => number(second, 1, 2)?,
		None => 0,
	};
	if parts.next().is_some() {
		return None;
	}
	Some((hour, minute, second))
}
