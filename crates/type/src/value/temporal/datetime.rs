// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use super::{Date, parse};
use crate::{Error, error::diagnostic::parse::invalid_datetime};

const SECONDS_PER_DAY: i64 = 86_400;

/// A calendar date with a time of day at second precision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	date: Date,
	seconds_of_day: u32,
}

impl DateTime {
	pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		let date = Date::new(year, month, day)?;
		Self::from_date_and_time(date, hour, minute, second)
	}

	pub fn from_date_and_time(date: Date, hour: u32, minute: u32, second: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 {
			return None;
		}
		Some(Self {
			date,
			seconds_of_day: hour * 3600 + minute * 60 + second,
		})
	}

	pub fn from_timestamp(seconds: i64) -> Option<Self> {
		let days = seconds.div_euclid(SECONDS_PER_DAY);
		let date = Date::from_days_since_epoch(i32::try_from(days).ok()?)?;
		Some(Self {
			date,
			seconds_of_day: seconds.rem_euclid(SECONDS_PER_DAY) as u32,
		})
	}

	/// Seconds since 1970-01-01 00:00:00.
	pub fn timestamp(&self) -> i64 {
		self.date.to_days_since_epoch() as i64 * SECONDS_PER_DAY + self.seconds_of_day as i64
	}

	/// Parses `yyyy-MM-dd HH:mm:ss`, `yyyy/MM/dd HH:mm:ss`,
	/// `yyyyMMddHHmmss` or `yyyy-MM-ddTHH:mm:ss`.
	pub fn parse(text: &str) -> Result<Self, Error> {
		let trimmed = text.trim();
		let invalid = || crate::error!(invalid_datetime(text));

		let (date, time) = if trimmed.len() == 14 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
			trimmed.split_at(8)
		} else {
			let position = trimmed.find([' ', 'T']).ok_or_else(invalid)?;
			(&trimmed[..position], trimmed[position + 1..].trim_start())
		};

		let (year, month, day) = parse::ymd(date).ok_or_else(invalid)?;
		let (hour, minute, second) = parse::hms(time).ok_or_else(invalid)?;
		Self::new(year, month, day, hour, minute, second).ok_or_else(invalid)
	}

	pub fn date(&self) -> Date {
		self.date
	}

	pub fn hour(&self) -> u32 {
		self.seconds_of_day / 3600
	}

	pub fn minute(&self) -> u32 {
		self.seconds_of_day % 3600 / 60
	}

	pub fn second(&self) -> u32 {
		self.seconds_of_day % 60
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {:02}:{:02}:{:02}", self.date, self.hour(), self.minute(), self.second())
	}
}

impl Serialize for DateTime {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
	type Value = DateTime;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a datetime in yyyy-MM-dd HH:mm:ss format")
	}

	fn visit_str<E>(self, value: &str) -> Result<DateTime, E>
	where
		E: de::Error,
	{
		DateTime::parse(value).map_err(|_| E::custom(format!("invalid datetime: {}", value)))
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D>(deserializer: D) -> Result<DateTime, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateTimeVisitor)
	}
}
