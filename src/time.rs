use hifitime::{Epoch, Unit};
use std::fmt;
use std::str::FromStr;

use crate::sysview_errors::SysViewError;

/// Calendar date (UTC) at which the ephemerides are requested.
///
/// Horizons is queried over the one-day window `[date, date.next_day()]` with a one-day
/// step, so the first row of the ephemeris block is the state at 00:00 UTC of `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObservationDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl ObservationDate {
    /// Build a date, rejecting calendar dates that do not exist.
    ///
    /// Argument
    /// --------
    /// * `year`, `month`, `day`: Gregorian calendar components
    ///
    /// Return
    /// ------
    /// * The date or [`SysViewError::InvalidDate`]
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, SysViewError> {
        Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0)
            .map_err(|e| SysViewError::InvalidDate(format!("{year:04}-{month:02}-{day:02}: {e}")))?;
        Ok(ObservationDate { year, month, day })
    }

    /// Build a date from its textual components, e.g. `("2022", "06", "22")`.
    pub fn from_parts(yyyy: &str, mm: &str, dd: &str) -> Result<Self, SysViewError> {
        let invalid = || SysViewError::InvalidDate(format!("{yyyy}-{mm}-{dd}"));
        let year = i32::from_str(yyyy.trim()).map_err(|_| invalid())?;
        let month = u8::from_str(mm.trim()).map_err(|_| invalid())?;
        let day = u8::from_str(dd.trim()).map_err(|_| invalid())?;
        Self::new(year, month, day)
    }

    /// Current UTC date.
    pub fn today() -> Result<Self, SysViewError> {
        let now = Epoch::now().map_err(|e| SysViewError::InvalidDate(e.to_string()))?;
        Ok(Self::from_epoch(&now))
    }

    fn from_epoch(epoch: &Epoch) -> Self {
        let (year, month, day, ..) = epoch.to_gregorian_utc();
        ObservationDate { year, month, day }
    }

    /// Epoch at 00:00 UTC of this date.
    pub fn epoch(&self) -> Result<Epoch, SysViewError> {
        Epoch::maybe_from_gregorian_utc(self.year, self.month, self.day, 0, 0, 0, 0)
            .map_err(|e| SysViewError::InvalidDate(format!("{self}: {e}")))
    }

    /// The following calendar day, rolling over months and years.
    pub fn next_day(&self) -> Result<Self, SysViewError> {
        // step from noon so a leap second cannot keep us on the same day
        let noon = Epoch::maybe_from_gregorian_utc(self.year, self.month, self.day, 12, 0, 0, 0)
            .map_err(|e| SysViewError::InvalidDate(format!("{self}: {e}")))?;
        Ok(Self::from_epoch(&(noon + Unit::Day * 1_i64)))
    }

    /// Julian date (UTC) at 00:00 of this date.
    pub fn julian_date(&self) -> Result<f64, SysViewError> {
        Ok(self.epoch()?.to_jde_utc_days())
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ObservationDate {
    type Err = SysViewError;

    /// Parse a `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        match parts.as_slice() {
            [yyyy, mm, dd] => Self::from_parts(yyyy, mm, dd),
            _ => Err(SysViewError::InvalidDate(format!(
                "{s}: expected format YYYY-MM-DD"
            ))),
        }
    }
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let date: ObservationDate = "2022-06-22".parse().unwrap();
        assert_eq!(date, ObservationDate::new(2022, 6, 22).unwrap());
        assert_eq!(date.to_string(), "2022-06-22");
        assert_eq!(ObservationDate::from_parts("2022", "6", "22").unwrap(), date);
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(
            "2022-02-30".parse::<ObservationDate>(),
            Err(SysViewError::InvalidDate(_))
        ));
        assert!(matches!(
            "2022/06/22".parse::<ObservationDate>(),
            Err(SysViewError::InvalidDate(_))
        ));
        assert!(matches!(
            ObservationDate::from_parts("2022", "13", "01"),
            Err(SysViewError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_next_day_rolls_over() {
        let d = ObservationDate::new(2022, 6, 22).unwrap();
        assert_eq!(d.next_day().unwrap(), ObservationDate::new(2022, 6, 23).unwrap());

        let end_of_month = ObservationDate::new(2022, 6, 30).unwrap();
        assert_eq!(
            end_of_month.next_day().unwrap(),
            ObservationDate::new(2022, 7, 1).unwrap()
        );

        let new_year = ObservationDate::new(2023, 12, 31).unwrap();
        assert_eq!(
            new_year.next_day().unwrap(),
            ObservationDate::new(2024, 1, 1).unwrap()
        );

        let leap = ObservationDate::new(2024, 2, 28).unwrap();
        assert_eq!(leap.next_day().unwrap(), ObservationDate::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_julian_date() {
        let d = ObservationDate::new(2020, 1, 1).unwrap();
        assert!((d.julian_date().unwrap() - 2458849.5).abs() < 1e-6);
    }
}
