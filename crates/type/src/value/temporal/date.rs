// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::parse;
use crate::{Error, error::diagnostic::parse::invalid_date};

const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

// days from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;

/// A calendar date without time of day, years 0000 through 9999, held as
/// the signed number of days since 1970-01-01.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
	days: i32,
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		if !YEARS.contains(&year) || !(1..=12).contains(&month) || day == 0 || day > month_length(year, month) {
			return None;
		}
		let days = i32::try_from(civil_to_days(year, month, day)).ok()?;
		Some(Self {
			days,
		})
	}

	/// Parses `yyyy-MM-dd`, `yyyy/MM/dd` or `yyyyMMdd`.
	pub fn parse(text: &str) -> Result<Self, Error> {
		parse::ymd(text.trim())
			.and_then(|(year, month, day)| Self::new(year, month, day))
			.ok_or_else(|| crate::error!(invalid_date(text)))
	}

	pub fn year(&self) -> i32 {
		days_to_civil(self.days).0
	}

	pub fn month(&self) -> u32 {
		days_to_civil(self.days).1
	}

	pub fn day(&self) -> u32 {
		days_to_civil(self.days).2
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days
	}

	pub fn from_days_since_epoch(days: i32) -> Option<Self> {
		YEARS.contains(&days_to_civil(days).0).then_some(Self {
			days,
		})
	}
}

fn month_length(year: i32, month: u32) -> u32 {
	let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
	match month {
		2 if leap => 29,
		2 => 28,
		4 | 6 | 9 | 11 => 30,
		_ => 31,
	}
}

/// Proleptic Gregorian date to days since the epoch. Years are counted from
/// March so the leap day closes the year.
fn civil_to_days(year: i32, month: u32, day: u32) -> i64 {
	let year = i64::from(year) - i64::from(month <= 2);
	let era = year.div_euclid(400);
	let year_of_era = year.rem_euclid(400);
	let shifted_month = (i64::from(month) + 9) % 12;
	let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
	let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
	era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

fn days_to_civil(days: i32) -> (i32, u32, u32) {
	let shifted = i64::from(days) + EPOCH_SHIFT;
	let era = shifted.div_euclid(DAYS_PER_ERA);
	let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);
	let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
	let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
	let shifted_month = (5 * day_of_year + 2) / 153;

	let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
	let month = (shifted_month + 2) % 12 + 1;
	let year = era * 400 + year_of_era + i64::from(month <= 2);
	(year as i32, month as u32, day as u32)
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = days_to_civil(self.days);
		write!(f, "{:04}-{:02}-{:02}", year, month, day)
	}
}

impl From<Date> for String {
	fn from(date: Date) -> Self {
		date.to_string()
	}
}

impl TryFrom<String> for Date {
	type Error = Error;

	fn try_from(text: String) -> Result<Self, Self::Error> {
		Self::parse(&text)
	}
}
