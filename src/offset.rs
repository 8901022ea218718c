//! UTC offset computation and resolution of the device time zone.

use std::time::SystemTime;

use tz::{DateTime, TimeZoneRef, UtcDateTime};

use crate::error::Error;
use crate::SECONDS_PER_MINUTE;

/// Looks up the rules of a zone in the compiled IANA database.
pub(crate) fn rules_for(zone: &str) -> Result<TimeZoneRef<'static>, Error> {
    tzdb::tz_by_name(zone).ok_or_else(|| Error::UnknownZone(zone.to_owned()))
}

/// Projects a Unix time into the local calendar fields of a zone.
pub(crate) fn project(zone: &str, unix_time: i64) -> Result<DateTime, Error> {
    Ok(DateTime::from_timespec(unix_time, 0, rules_for(zone)?)?)
}

/// Computes the UTC offset of a zone at a given Unix time, in minutes.
///
/// The offset accounts for daylight-saving and for any historical or scheduled
/// transition active at that instant. The local calendar fields at `unix_time`
/// are reinterpreted as if they denoted a UTC instant; the signed difference to
/// `unix_time`, rounded to the nearest minute, is the offset. Operating on raw
/// field values keeps the computation correct for negative and fractional-hour
/// offsets alike.
///
/// # Errors
///
/// Returns [`Error::UnknownZone`] if the identifier is not recognized.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), worldclock::Error> {
/// // 2024-01-15T12:00:00Z
/// assert_eq!(worldclock::offset_minutes("Asia/Kathmandu", 1705320000)?, 345);
/// # Ok(())
/// # }
/// ```
pub fn offset_minutes(zone: &str, unix_time: i64) -> Result<i64, Error> {
    let local = project(zone, unix_time)?;
    let reinterpreted = UtcDateTime::new(
        local.year(),
        local.month(),
        local.month_day(),
        local.hour(),
        local.minute(),
        local.second(),
        0,
    )?;
    Ok(round_to_minutes(reinterpreted.unix_time() - unix_time))
}

/// Rounds a signed number of seconds to the nearest whole minute.
fn round_to_minutes(seconds: i64) -> i64 {
    let half = SECONDS_PER_MINUTE / 2;
    if seconds < 0 {
        (seconds - half) / SECONDS_PER_MINUTE
    } else {
        (seconds + half) / SECONDS_PER_MINUTE
    }
}

/// Returns the IANA identifier of the device's current time zone.
///
/// The identifier is resolved from the runtime environment on every call and
/// never cached, since it can change while the process runs, e.g. after travel
/// or an OS settings change.
///
/// # Errors
///
/// Returns [`Error::DeviceZone`] if the environment exposes no resolvable time zone.
pub fn device_zone() -> Result<String, Error> {
    Ok(iana_time_zone::get_timezone()?)
}

/// Returns the current Unix time in seconds.
///
/// # Errors
///
/// Returns an error if the system clock is set before the Unix epoch or too
/// far in the future to fit an `i64`.
pub fn now() -> Result<i64, Error> {
    let since_epoch = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)?;
    match i64::try_from(since_epoch.as_secs()) {
        Ok(unix_time) => Ok(unix_time),
        Err(_) => Err(Error::OutOfRange("system time out of range for i64 Unix time")),
    }
}
