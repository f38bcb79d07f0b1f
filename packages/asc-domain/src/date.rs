use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Month-resolution date used for project timelines, serialized as "YYYY-MM".
/// Field order gives chronological ordering.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct YearMonth {
	pub year: u16,
	pub month: u8,
}

impl YearMonth {
	pub const fn new(year: u16, month: u8) -> Self {
		Self { year, month }
	}
}

impl fmt::Display for YearMonth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}", self.year, self.month)
	}
}

impl FromStr for YearMonth {
	type Err = Error;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let invalid = || Error::InvalidYearMonth { value: raw.to_string() };
		let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
		let year: u16 = year.parse().map_err(|_| invalid())?;
		let month: u8 = month.parse().map_err(|_| invalid())?;

		if year == 0 || !(1..=12).contains(&month) {
			return Err(invalid());
		}

		Ok(Self { year, month })
	}
}

impl Serialize for YearMonth {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for YearMonth {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		raw.parse().map_err(serde::de::Error::custom)
	}
}

pub mod iso_date {
	use serde::{Deserialize, Deserializer, Serializer};
	use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

	const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

	pub fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let formatted = value.format(FORMAT).map_err(serde::ser::Error::custom)?;

		serializer.serialize_str(&formatted)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		Date::parse(&raw, FORMAT).map_err(serde::de::Error::custom)
	}
}

pub mod rfc3339 {
	use serde::{Deserialize, Deserializer, Serializer};
	use time::{OffsetDateTime, format_description::well_known::Rfc3339};

	pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let formatted = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;

		serializer.serialize_str(&formatted)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		OffsetDateTime::parse(&raw, &Rfc3339).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn year_month_parses_and_orders() {
		let earlier: YearMonth = "2020-01".parse().unwrap();
		let later: YearMonth = "2023-09".parse().unwrap();

		assert!(earlier < later);
		assert_eq!(later.to_string(), "2023-09");
	}

	#[test]
	fn year_month_rejects_malformed_values() {
		assert!("2020".parse::<YearMonth>().is_err());
		assert!("2020-13".parse::<YearMonth>().is_err());
		assert!("0000-05".parse::<YearMonth>().is_err());
		assert!("20-5x".parse::<YearMonth>().is_err());
	}
}
