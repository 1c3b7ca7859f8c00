// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use super::parse;
use crate::{Error, error::diagnostic::parse::invalid_time};

/// A signed number of seconds, displayed as `HH:mm:ss`.
///
/// Unlike a time of day the value may be negative or exceed 24 hours, so
/// it can also hold elapsed durations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
	seconds: i64,
}

impl Time {
	pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
		if minute > 59 || second > 59 {
			return None;
		}
		Some(Self {
			seconds: hour as i64 * 3600 + minute as i64 * 60 + second as i64,
		})
	}

	pub const fn from_seconds(seconds: i64) -> Self {
		Self {
			seconds,
		}
	}

	pub const fn to_seconds(&self) -> i64 {
		self.seconds
	}

	/// Parses `HH:mm:ss`, `HHmmss` or `HH:mm`, optionally preceded by `-`.
	pub fn parse(text: &str) -> Result<Self, Error> {
		let trimmed = text.trim();
		let (negative, unsigned) = match trimmed.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, trimmed),
		};

		let time = parse::hms(unsigned)
			.and_then(|(hour, minute, second)| Self::new(hour, minute, second))
			.ok_or_else(|| crate::error!(invalid_time(text)))?;

		Ok(if negative {
			Self::from_seconds(-time.seconds)
		} else {
			time
		})
	}

	pub fn hour(&self) -> u64 {
		self.seconds.unsigned_abs() / 3600
	}

	pub fn minute(&self) -> u64 {
		self.seconds.unsigned_abs() % 3600 / 60
	}

	pub fn second(&self) -> u64 {
		self.seconds.unsigned_abs() % 60
	}
}

impl Display for Time {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.seconds < 0 {
			f.write_str("-")?;
		}
		write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
	}
}

impl Serialize for Time {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct TimeVisitor;

impl<'de> Visitor<'de> for TimeVisitor {
	type Value = Time;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a time in HH:mm:ss format")
	}

	fn visit_str<E>(self, value: &str) -> Result<Time, E>
	where
		E: de::Error,
	{
		Time::parse(value).map_err(|_| E::custom(format!("invalid time: {}", value)))
	}
}

impl<'de> Deserialize<'de> for Time {
	fn deserialize<D>(deserializer: D) -> Result<Time, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(TimeVisitor)
	}
}
