//! Error types.

use std::time::SystemTimeError;
use std::{error, fmt};

use iana_time_zone::GetTimezoneError;
use tz::TzError;

/// Unified error type for everything in the crate
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Device time zone resolution error
    DeviceZone(GetTimezoneError),
    /// Saved zone list serialization error
    Json(serde_json::Error),
    /// Out of range error
    OutOfRange(&'static str),
    /// System time error
    SystemTime(SystemTimeError),
    /// Time zone rules error
    Tz(TzError),
    /// The identifier is not present in the time zone rules database
    UnknownZone(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DeviceZone(error) => write!(f, "unresolved device time zone: {}", error),
            Self::Json(error) => error.fmt(f),
            Self::OutOfRange(error) => error.fmt(f),
            Self::SystemTime(error) => error.fmt(f),
            Self::Tz(error) => error.fmt(f),
            Self::UnknownZone(zone) => write!(f, "unknown time zone: {}", zone),
        }
    }
}

impl error::Error for Error {}

impl From<GetTimezoneError> for Error {
    fn from(error: GetTimezoneError) -> Self {
        Self::DeviceZone(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<SystemTimeError> for Error {
    fn from(error: SystemTimeError) -> Self {
        Self::SystemTime(error)
    }
}

impl From<TzError> for Error {
    fn from(error: TzError) -> Self {
        Self::Tz(error)
    }
}
