#![deny(missing_docs)]
#![warn(unreachable_pub)]

//! This crate provides the core computations of a world clock: given an [IANA time zone identifier](https://www.iana.org/time-zones) and a point in time, it derives the zone's UTC offset in minutes (DST-aware), a signed offset label relative to the device's own time zone, a Today/Tomorrow/Yesterday classification of the zone's local calendar date, and a 24-hour wall-clock string.
//!
//! It also builds a catalog of all known zone identifiers, each enriched with a city label derived from the identifier and, when available, a country name, and it defines the ordered list of saved zones a user tracks together with its persisted JSON layout.
//!
//! Time zone rules are provided by the [`tz`] crate together with the compiled IANA database from the [`tzdb`] crate; the device time zone is resolved through [`iana-time-zone`](https://docs.rs/iana-time-zone).
//!
//! All computations are pure functions of an explicit Unix time in seconds. Use [`now`] to obtain the current instant when that is the instant wanted.
//!
//! # Usage
//!
//! ## Offsets and labels
//!
//! ```rust
//! # fn main() -> Result<(), worldclock::Error> {
//! use worldclock::{day_relative_from, diff_label_from, offset_minutes, time_hhmm, DayRelative};
//!
//! // 2024-01-15T12:00:00Z
//! let unix_time = 1705320000;
//!
//! // New York observes standard time in January, Tokyo has no DST
//! assert_eq!(offset_minutes("America/New_York", unix_time)?, -300);
//! assert_eq!(offset_minutes("Asia/Tokyo", unix_time)?, 540);
//!
//! // Offset of a zone relative to a reference zone
//! assert_eq!(diff_label_from("America/New_York", "Asia/Tokyo", unix_time)?, "+14h");
//! assert_eq!(diff_label_from("America/New_York", "Asia/Kolkata", unix_time)?, "+10h 30m");
//!
//! // Local calendar date of the target compared to the reference
//! assert_eq!(day_relative_from("America/New_York", "Asia/Tokyo", unix_time)?, DayRelative::Today);
//!
//! // Wall-clock time in a zone, 24-hour clock
//! assert_eq!(time_hhmm("Asia/Tokyo", unix_time)?, "21:00");
//! # Ok(())
//! # }
//! ```
//!
//! ## Catalog
//!
//! ```rust
//! use worldclock::{all_zones_cached, city_from_zone_id};
//!
//! assert_eq!(city_from_zone_id("America/Argentina/Buenos_Aires"), "Buenos Aires");
//!
//! // The catalog is built once per process and sorted by city name
//! let catalog = all_zones_cached();
//! assert!(catalog.iter().any(|entry| entry.id == "Asia/Tokyo"));
//! ```
//!
//! ## Saved zones
//!
//! ```rust
//! # fn main() -> Result<(), worldclock::Error> {
//! use worldclock::SavedZoneList;
//!
//! let mut saved = SavedZoneList::new();
//! assert!(saved.insert("Asia/Tokyo"));
//! assert!(saved.insert("Europe/London"));
//! assert!(!saved.insert("Asia/Tokyo"));
//!
//! let json = saved.to_json()?;
//! assert_eq!(json, r#"["Asia/Tokyo","Europe/London"]"#);
//! assert_eq!(SavedZoneList::from_json(&json)?, saved);
//! # Ok(())
//! # }
//! ```

mod catalog;
pub use catalog::{
    all_zones, all_zones_cached, all_zones_sorted_by, city_from_zone_id, country_for,
    default_collation, ZoneEntry,
};

mod error;
pub use error::Error;

mod offset;
pub use offset::{device_zone, now, offset_minutes};

mod relative;
pub use relative::{
    day_relative, day_relative_from, diff_label, diff_label_from, time_hhmm, DayRelative,
};

mod saved;
pub use saved::SavedZoneList;

/// Number of seconds in one minute
const SECONDS_PER_MINUTE: i64 = 60;
/// Number of minutes in one hour
const MINUTES_PER_HOUR: i64 = 60;
