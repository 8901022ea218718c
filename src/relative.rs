//! Formatting of a zone relative to the device zone: signed offset labels,
//! day classification and wall-clock rendering.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Error;
use crate::offset::{device_zone, offset_minutes, project};
use crate::MINUTES_PER_HOUR;

/// U+2212 minus sign, distinct from an ASCII hyphen so rendered labels stay unambiguous
const MINUS_SIGN: char = '\u{2212}';

/// Relative calendar day of a zone compared to a reference zone
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DayRelative {
    /// The zone's local date is one day behind
    Yesterday,
    /// Both zones share the same local date
    Today,
    /// The zone's local date is one day ahead
    Tomorrow,
}

impl fmt::Display for DayRelative {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Yesterday => "Yesterday",
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
        })
    }
}

/// Formats the offset of `target` relative to `device` at a given Unix time.
///
/// A non-negative difference carries a leading `+`, a negative one a minus
/// sign. The magnitude is split into whole hours and remainder minutes, and
/// the minute component is omitted when zero: `"+3h"`, `"−2h 30m"`, `"+0h"`.
///
/// # Errors
///
/// Returns [`Error::UnknownZone`] if either identifier is not recognized.
pub fn diff_label_from(device: &str, target: &str, unix_time: i64) -> Result<String, Error> {
    let diff = offset_minutes(target, unix_time)? - offset_minutes(device, unix_time)?;
    let sign = if diff < 0 { MINUS_SIGN } else { '+' };
    let hours = diff.abs() / MINUTES_PER_HOUR;
    let minutes = diff.abs() % MINUTES_PER_HOUR;
    if minutes == 0 {
        Ok(format!("{}{}h", sign, hours))
    } else {
        Ok(format!("{}{}h {}m", sign, hours, minutes))
    }
}

/// Formats the offset of a zone relative to the device zone at a given Unix time.
///
/// Same as [`diff_label_from`] with the device zone resolved per call.
pub fn diff_label(target: &str, unix_time: i64) -> Result<String, Error> {
    diff_label_from(&device_zone()?, target, unix_time)
}

/// Decimal date key of a zone's local calendar date, `year * 10_000 + month * 100 + day`.
fn date_key(zone: &str, unix_time: i64) -> Result<i64, Error> {
    let local = project(zone, unix_time)?;
    Ok(i64::from(local.year()) * 10_000
        + i64::from(local.month()) * 100
        + i64::from(local.month_day()))
}

/// Classifies the local calendar date of `target` against `device` at the same Unix time.
///
/// Date keys are order-isomorphic to calendar dates, so comparing them
/// classifies correctly across month and year boundaries, and real zone
/// offsets never place two zones more than one calendar day apart.
///
/// # Errors
///
/// Returns [`Error::UnknownZone`] if either identifier is not recognized.
pub fn day_relative_from(device: &str, target: &str, unix_time: i64) -> Result<DayRelative, Error> {
    let delta = date_key(target, unix_time)? - date_key(device, unix_time)?;
    Ok(match delta.cmp(&0) {
        Ordering::Less => DayRelative::Yesterday,
        Ordering::Equal => DayRelative::Today,
        Ordering::Greater => DayRelative::Tomorrow,
    })
}

/// Classifies the local calendar date of a zone against the device zone at a given Unix time.
///
/// Same as [`day_relative_from`] with the device zone resolved per call.
pub fn day_relative(target: &str, unix_time: i64) -> Result<DayRelative, Error> {
    day_relative_from(&device_zone()?, target, unix_time)
}

/// Renders the local wall-clock time of a zone at a given Unix time as zero-padded 24-hour `HH:MM`.
///
/// # Errors
///
/// Returns [`Error::UnknownZone`] if the identifier is not recognized.
pub fn time_hhmm(zone: &str, unix_time: i64) -> Result<String, Error> {
    let local = project(zone, unix_time)?;
    Ok(format!("{:02}:{:02}", local.hour(), local.minute()))
}

#[cfg(test)]
mod tests {
    use super::{day_relative, day_relative_from, diff_label, diff_label_from, time_hhmm, DayRelative};
    use crate::error::Error;
    use crate::offset::device_zone;

    // 2024-01-15T12:00:00Z
    const WINTER: i64 = 1705320000;
    // 2024-06-16T06:30:00Z, 23:30 the previous day in Los Angeles
    const SUMMER: i64 = 1718519400;
    // 2024-01-01T00:30:00Z
    const NEW_YEAR: i64 = 1704069000;

    #[test]
    fn test_diff_label_whole_hours() -> Result<(), Error> {
        assert_eq!(diff_label_from("America/New_York", "Asia/Tokyo", WINTER)?, "+14h");
        assert_eq!(diff_label_from("Asia/Tokyo", "America/New_York", WINTER)?, "\u{2212}14h");
        assert_eq!(diff_label_from("America/New_York", "Europe/London", WINTER)?, "+5h");
        Ok(())
    }

    #[test]
    fn test_diff_label_with_minutes() -> Result<(), Error> {
        assert_eq!(diff_label_from("America/New_York", "Asia/Kolkata", WINTER)?, "+10h 30m");
        assert_eq!(diff_label_from("America/New_York", "Asia/Kathmandu", WINTER)?, "+10h 45m");
        assert_eq!(diff_label_from("Asia/Kolkata", "America/New_York", WINTER)?, "\u{2212}10h 30m");
        Ok(())
    }

    #[test]
    fn test_diff_label_zero() -> Result<(), Error> {
        assert_eq!(diff_label_from("America/New_York", "America/New_York", WINTER)?, "+0h");
        // Distinct zones sharing an offset also collapse to zero
        assert_eq!(diff_label_from("Europe/Paris", "Europe/Berlin", WINTER)?, "+0h");
        Ok(())
    }

    #[test]
    fn test_day_relative_same_date() -> Result<(), Error> {
        // 07:00 in New York, 21:00 in Tokyo, both on January 15
        assert_eq!(
            day_relative_from("America/New_York", "Asia/Tokyo", WINTER)?,
            DayRelative::Today
        );
        assert_eq!(
            day_relative_from("America/New_York", "America/New_York", WINTER)?,
            DayRelative::Today
        );
        Ok(())
    }

    #[test]
    fn test_day_relative_across_date_line() -> Result<(), Error> {
        // 23:30 June 15 in Los Angeles, 15:30 June 16 in Tokyo
        assert_eq!(
            day_relative_from("America/Los_Angeles", "Asia/Tokyo", SUMMER)?,
            DayRelative::Tomorrow
        );
        assert_eq!(
            day_relative_from("Asia/Tokyo", "America/Los_Angeles", SUMMER)?,
            DayRelative::Yesterday
        );
        Ok(())
    }

    #[test]
    fn test_day_relative_year_boundary() -> Result<(), Error> {
        // Midway is still on December 31 2023 while Kiritimati is on January 1 2024,
        // so the date keys differ by far more than one
        assert_eq!(
            day_relative_from("Pacific/Midway", "Pacific/Kiritimati", NEW_YEAR)?,
            DayRelative::Tomorrow
        );
        assert_eq!(
            day_relative_from("Pacific/Kiritimati", "Pacific/Midway", NEW_YEAR)?,
            DayRelative::Yesterday
        );
        Ok(())
    }

    #[test]
    fn test_time_hhmm() -> Result<(), Error> {
        // 2024-06-15T09:05:00Z, British Summer Time is UTC+1
        assert_eq!(time_hhmm("Europe/London", 1718442300)?, "10:05");
        assert_eq!(time_hhmm("America/New_York", WINTER)?, "07:00");
        assert_eq!(time_hhmm("Asia/Kathmandu", WINTER)?, "17:45");
        Ok(())
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            diff_label_from("America/New_York", "Not/A_Zone", WINTER),
            Err(Error::UnknownZone(_))
        ));
        assert!(matches!(
            day_relative_from("Not/A_Zone", "Asia/Tokyo", WINTER),
            Err(Error::UnknownZone(_))
        ));
        assert!(matches!(time_hhmm("Not/A_Zone", WINTER), Err(Error::UnknownZone(_))));
    }

    #[test]
    fn test_device_forms_against_own_zone() -> Result<(), Error> {
        // Headless environments may expose no zone at all; when one is
        // exposed, a zone relative to itself is zero offset on today's date
        match device_zone() {
            Ok(zone) => {
                assert_eq!(diff_label(&zone, WINTER)?, "+0h");
                assert_eq!(day_relative(&zone, WINTER)?, DayRelative::Today);
            }
            Err(Error::DeviceZone(_)) => {}
            Err(error) => return Err(error),
        }
        Ok(())
    }

    #[test]
    fn test_day_relative_display() {
        assert_eq!(DayRelative::Today.to_string(), "Today");
        assert_eq!(DayRelative::Tomorrow.to_string(), "Tomorrow");
        assert_eq!(DayRelative::Yesterday.to_string(), "Yesterday");
    }
}
