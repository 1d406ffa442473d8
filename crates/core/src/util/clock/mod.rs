// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use jiff::{
    Timestamp, Zoned,
    civil::{Date, DateTime},
    tz::TimeZone,
};

pub type TimestampMillis = i64;

pub type TimestampSecs = i64;

pub const MILLIS_PER_SECOND: TimestampMillis = 1_000;

pub const MILLIS_PER_MINUTE: TimestampMillis = 60 * MILLIS_PER_SECOND;

pub const MINUTES_PER_HOUR: i64 = 60;

/// An _UTC_ timestamp with truncated millisecond precision.
///
/// All instants are compared in UTC. Timezone-naive inputs, i.e. civil
/// date-times without an offset, are interpreted as UTC wall-clock time
/// instead of being rejected.
#[derive(Clone, Debug, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTimeMs {
    unix_timestamp_millis: TimestampMillis,
}

impl UtcDateTimeMs {
    #[must_use]
    pub const fn from_unix_timestamp_millis(unix_timestamp_millis: TimestampMillis) -> Self {
        Self {
            unix_timestamp_millis,
        }
    }

    #[must_use]
    pub const fn from_unix_timestamp_secs(unix_timestamp_secs: TimestampSecs) -> Self {
        Self::from_unix_timestamp_millis(unix_timestamp_secs.saturating_mul(MILLIS_PER_SECOND))
    }

    #[must_use]
    pub const fn unix_timestamp_millis(&self) -> TimestampMillis {
        self.unix_timestamp_millis
    }

    /// Whole seconds since the epoch, rounded towards negative infinity.
    #[must_use]
    pub const fn unix_timestamp_secs(&self) -> TimestampSecs {
        self.unix_timestamp_millis.div_euclid(MILLIS_PER_SECOND)
    }

    #[must_use]
    pub fn from_timestamp(timestamp: &Timestamp) -> Self {
        Self::from_unix_timestamp_millis(timestamp.as_millisecond())
    }

    /// Coerce a timezone-naive date-time into UTC.
    ///
    /// Returns `None` if the date-time exceeds the supported range.
    #[must_use]
    pub fn from_civil_utc(date_time: DateTime) -> Option<Self> {
        date_time
            .to_zoned(TimeZone::UTC)
            .ok()
            .map(|zoned| Self::from_timestamp(&zoned.timestamp()))
    }

    /// Clamped to the range supported by [`Timestamp`].
    #[must_use]
    pub fn to_timestamp(&self) -> Timestamp {
        Timestamp::from_millisecond(self.unix_timestamp_millis).unwrap_or(
            if self.unix_timestamp_millis < 0 {
                Timestamp::MIN
            } else {
                Timestamp::MAX
            },
        )
    }

    #[must_use]
    pub fn now() -> Self {
        Self::from_unix_timestamp_millis(Timestamp::now().as_millisecond())
    }

    /// The calendar date in UTC.
    #[must_use]
    pub fn date(&self) -> Date {
        self.to_timestamp().to_zoned(TimeZone::UTC).date()
    }

    #[must_use]
    pub const fn saturating_add_millis(self, millis: TimestampMillis) -> Self {
        Self::from_unix_timestamp_millis(self.unix_timestamp_millis.saturating_add(millis))
    }

    #[must_use]
    pub const fn saturating_sub_millis(self, millis: TimestampMillis) -> Self {
        Self::from_unix_timestamp_millis(self.unix_timestamp_millis.saturating_sub(millis))
    }

    /// The absolute distance between two instants in milliseconds.
    #[must_use]
    pub const fn abs_diff_millis(self, other: Self) -> u64 {
        self.unix_timestamp_millis
            .abs_diff(other.unix_timestamp_millis)
    }

    /// The absolute distance between two instants in whole minutes.
    ///
    /// Fractions of a minute are discarded.
    #[must_use]
    pub const fn abs_diff_minutes(self, other: Self) -> u64 {
        self.abs_diff_millis(other) / MILLIS_PER_MINUTE as u64
    }
}

impl From<Timestamp> for UtcDateTimeMs {
    fn from(from: Timestamp) -> Self {
        Self::from_timestamp(&from)
    }
}

impl From<&Zoned> for UtcDateTimeMs {
    fn from(from: &Zoned) -> Self {
        Self::from_timestamp(&from.timestamp())
    }
}

impl From<Zoned> for UtcDateTimeMs {
    fn from(from: Zoned) -> Self {
        From::from(&from)
    }
}

impl From<UtcDateTimeMs> for Timestamp {
    fn from(from: UtcDateTimeMs) -> Self {
        from.to_timestamp()
    }
}

impl FromStr for UtcDateTimeMs {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if let Ok(timestamp) = input.parse::<Timestamp>() {
            return Ok(timestamp.into());
        }
        // No offset: interpret as UTC wall-clock time
        let date_time = input.parse::<DateTime>()?;
        Self::from_civil_utc(date_time)
            .ok_or_else(|| anyhow::anyhow!("date-time out of range: {input}"))
    }
}

impl fmt::Display for UtcDateTimeMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_timestamp().fmt(f)
    }
}

// Serialize (and deserialize) as string for maximum compatibility and portability
#[cfg(feature = "serde")]
impl serde::Serialize for UtcDateTimeMs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UtcDateTimeMs {
    fn deserialize<D>(deserializer: D) -> Result<UtcDateTimeMs, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(UtcDateTimeMsDeserializeFromStr)
    }
}

#[cfg(feature = "serde")]
struct UtcDateTimeMsDeserializeFromStr;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for UtcDateTimeMsDeserializeFromStr {
    type Value = UtcDateTimeMs;

    fn visit_str<E>(self, input: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        input
            .parse()
            .map_err(|_| serde::de::Error::invalid_value(serde::de::Unexpected::Str(input), &self))
    }

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "a string containing an RFC 3339 timestamp or a date-time without offset"
        )
    }
}

/// The half-open range `[start, end)` of a calendar day in UTC.
///
/// Returns `None` if the date is at the upper end of the supported range.
#[must_use]
pub fn utc_day_range(date: Date) -> Option<(UtcDateTimeMs, UtcDateTimeMs)> {
    let start = date.to_zoned(TimeZone::UTC).ok()?;
    let end = date.tomorrow().ok()?.to_zoned(TimeZone::UTC).ok()?;
    Some((start.into(), end.into()))
}
