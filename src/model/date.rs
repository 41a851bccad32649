use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// A calendar date serialized as `MM/DD/YY`.
///
/// The two-digit year limits the representable range to 2000 through 2099;
/// the format will overflow in the year 2100. The upstream API uses this
/// format for label expiration dates.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct AwfulDate {
    year: u16,
    month: u8,
    day: u8,
}

/// A rejected date component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DateError {
    /// The year is outside 2000..=2099.
    Year(u16),
    /// The month is outside 1..=12.
    Month(u8),
    /// The day is invalid for the given year and month.
    Day {
        /// The year of the rejected date.
        year: u16,
        /// The month of the rejected date.
        month: u8,
        /// The rejected day.
        day: u8,
    },
    /// The text is not of the form `MM/DD/YY`.
    Format(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "year must be between 2000 and 2099: {year}"),
            Self::Month(month) => write!(f, "month must be between 1 and 12: {month}"),
            Self::Day { year, month, day } => {
                write!(f, "day {day} is not valid for year {year} month {month}")
            }
            Self::Format(text) => write!(f, "expected a MM/DD/YY date: {text:?}"),
        }
    }
}

impl std::error::Error for DateError {}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            if leap { 29 } else { 28 }
        }
    }
}

impl AwfulDate {
    /// Build a date, validating the year range, month, and day-of-month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(2000..=2099).contains(&year) {
            return Err(DateError::Year(year));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::Month(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateError::Day { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// The four-digit year.
    pub fn year(self) -> u16 {
        self.year
    }

    /// The month, 1 through 12.
    pub fn month(self) -> u8 {
        self.month
    }

    /// The day of the month.
    pub fn day(self) -> u8 {
        self.day
    }

    fn parse(text: &str) -> Result<Self, DateError> {
        let format = || DateError::Format(text.to_string());
        let mut parts = text.splitn(3, '/');
        let month = parts.next().ok_or_else(format)?;
        let day = parts.next().ok_or_else(format)?;
        let year = parts.next().ok_or_else(format)?;
        let month: u8 = month.parse().map_err(|_| format())?;
        let day: u8 = day.parse().map_err(|_| format())?;
        let year: u16 = year.parse().map_err(|_| format())?;
        if year > 99 {
            return Err(format());
        }
        Self::new(year + 2000, month, day)
    }
}

impl fmt::Display for AwfulDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:02}",
            self.month,
            self.day,
            self.year - 2000
        )
    }
}

impl Serialize for AwfulDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AwfulDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::end_of_year("12/31/27", 2027, 12, 31)]
    #[case::leap_february("02/29/24", 2024, 2, 29)]
    #[case::single_digit_fields("1/2/03", 2003, 1, 2)]
    fn test_parse_valid(
        #[case] text: &str,
        #[case] year: u16,
        #[case] month: u8,
        #[case] day: u8,
    ) {
        let date: AwfulDate = serde_json::from_str(&format!("\"{text}\"")).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (year, month, day));
    }

    #[rstest]
    #[case::month_zero("00/15/25")]
    #[case::month_too_large("13/01/25")]
    #[case::day_zero("06/00/25")]
    #[case::thirty_one_in_june("06/31/25")]
    #[case::non_leap_february("02/29/25")]
    #[case::four_digit_year("02/10/2025")]
    #[case::not_a_date("soon")]
    fn test_parse_invalid(#[case] text: &str) {
        assert!(serde_json::from_str::<AwfulDate>(&format!("\"{text}\"")).is_err());
    }

    #[rstest]
    #[case::century_leap_year(2000, 2, 29, true)]
    #[case::year_too_early(1999, 6, 15, false)]
    #[case::year_too_late(2100, 6, 15, false)]
    fn test_new_year_bounds(
        #[case] year: u16,
        #[case] month: u8,
        #[case] day: u8,
        #[case] ok: bool,
    ) {
        assert_eq!(AwfulDate::new(year, month, day).is_ok(), ok);
    }

    #[rstest]
    fn test_display_pads_components() {
        let date = AwfulDate::new(2027, 3, 4).unwrap();
        assert_eq!(date.to_string(), "03/04/27");
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"03/04/27\"");
    }
}
