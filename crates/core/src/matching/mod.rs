// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Time-based matching of plays to photos.
//!
//! A play is a candidate for a photo if it has been played within a
//! symmetric time window around the photo's capture time. Candidates
//! are scored by linear decay of their distance to the capture time,
//! ranked by descending score and truncated.
//!
//! All functions are pure and deterministic.

use std::{fmt, num::NonZeroUsize};

use derive_more::{Display, Error};

use crate::{Play, prelude::*};

///////////////////////////////////////////////////////////////////////
// ConfidenceScore
///////////////////////////////////////////////////////////////////////

pub type ConfidenceScoreValue = u8;

/// Match quality in percent, based on time proximity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ConfidenceScore(ConfidenceScoreValue);

impl ConfidenceScore {
    pub const MIN_VALUE: ConfidenceScoreValue = 0;

    pub const MAX_VALUE: ConfidenceScoreValue = 100;

    pub const MIN: Self = Self(Self::MIN_VALUE);

    pub const MAX: Self = Self(Self::MAX_VALUE);

    #[must_use]
    pub const fn new_unchecked(value: ConfidenceScoreValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn clamp_from(value: ConfidenceScoreValue) -> Self {
        if value > Self::MAX_VALUE {
            Self::MAX
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn value(self) -> ConfidenceScoreValue {
        let Self(value) = self;
        value
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.value() == Self::MIN_VALUE
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfidenceScoreInvalidity {
    OutOfRange,
}

impl Validate for ConfidenceScore {
    type Invalidity = ConfidenceScoreInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self > Self::MAX, Self::Invalidity::OutOfRange)
            .into()
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value())
    }
}

///////////////////////////////////////////////////////////////////////
// MatchWindow
///////////////////////////////////////////////////////////////////////

pub type WindowHours = i64;

pub type TimeDifferenceMinutes = u64;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[display("invalid time window: {_0} hour(s)")]
    InvalidWindowHours(#[error(not(source))] WindowHours),

    #[display("at least one suggestion must be requested")]
    NoSuggestionsRequested,
}

/// The symmetric time window around a capture time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchWindow {
    hours: WindowHours,
}

impl MatchWindow {
    /// Create a window that extends `hours` into the past and into the future.
    ///
    /// The number of hours must be positive.
    pub const fn from_hours(hours: WindowHours) -> Result<Self, MatchError> {
        if hours <= 0 || hours > MAX_WINDOW_HOURS {
            return Err(MatchError::InvalidWindowHours(hours));
        }
        Ok(Self { hours })
    }

    #[must_use]
    pub const fn hours(self) -> WindowHours {
        self.hours
    }

    #[must_use]
    pub const fn minutes(self) -> TimeDifferenceMinutes {
        (self.hours * MINUTES_PER_HOUR) as TimeDifferenceMinutes
    }

    /// The closed interval `[center - window, center + window]`.
    #[must_use]
    pub const fn around(self, center: UtcDateTimeMs) -> (UtcDateTimeMs, UtcDateTimeMs) {
        let millis = self.minutes() as TimestampMillis * MILLIS_PER_MINUTE;
        (
            center.saturating_sub_millis(millis),
            center.saturating_add_millis(millis),
        )
    }
}

/// About 100 years, far beyond any meaningful window and small enough
/// for the millisecond arithmetic to never overflow.
const MAX_WINDOW_HOURS: WindowHours = 100 * 366 * 24;

///////////////////////////////////////////////////////////////////////
// Scoring
///////////////////////////////////////////////////////////////////////

/// Distance between a capture time and a play time in whole minutes.
#[must_use]
pub const fn time_difference_minutes(
    photo_time: UtcDateTimeMs,
    played_at: UtcDateTimeMs,
) -> TimeDifferenceMinutes {
    photo_time.abs_diff_minutes(played_at)
}

/// Linear decay from 100 at no distance to 0 at the window boundary.
///
/// Distances beyond the window score 0.
#[must_use]
pub fn confidence_score(
    time_difference_minutes: TimeDifferenceMinutes,
    window: MatchWindow,
) -> ConfidenceScore {
    let window_minutes = window.minutes();
    if time_difference_minutes > window_minutes {
        return ConfidenceScore::MIN;
    }
    let ratio = time_difference_minutes as f64 / window_minutes as f64;
    let value = (f64::from(ConfidenceScore::MAX_VALUE) * (1.0 - ratio)).round();
    let value = value.clamp(
        f64::from(ConfidenceScore::MIN_VALUE),
        f64::from(ConfidenceScore::MAX_VALUE),
    );
    ConfidenceScore::new_unchecked(value as ConfidenceScoreValue)
}

///////////////////////////////////////////////////////////////////////
// Suggestions
///////////////////////////////////////////////////////////////////////

/// Anything with a play time that could be matched against a photo.
pub trait PlayedAt {
    fn played_at(&self) -> UtcDateTimeMs;
}

impl PlayedAt for Play {
    fn played_at(&self) -> UtcDateTimeMs {
        self.played_at
    }
}

impl PlayedAt for UtcDateTimeMs {
    fn played_at(&self) -> UtcDateTimeMs {
        *self
    }
}

impl<T> PlayedAt for &T
where
    T: PlayedAt + ?Sized,
{
    fn played_at(&self) -> UtcDateTimeMs {
        (**self).played_at()
    }
}

/// A play with an associated id, e.g. a stored record.
impl<I, T> PlayedAt for (I, T)
where
    T: PlayedAt,
{
    fn played_at(&self) -> UtcDateTimeMs {
        self.1.played_at()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion<T> {
    /// Reference to the suggested play
    pub track: T,

    pub confidence_score: ConfidenceScore,

    pub time_difference_minutes: TimeDifferenceMinutes,
}

impl<T> Suggestion<T> {
    pub fn map_track<U>(self, map: impl FnOnce(T) -> U) -> Suggestion<U> {
        let Self {
            track,
            confidence_score,
            time_difference_minutes,
        } = self;
        Suggestion {
            track: map(track),
            confidence_score,
            time_difference_minutes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    pub window_hours: WindowHours,
    pub max_suggestions: usize,
}

pub const DEFAULT_WINDOW_HOURS: WindowHours = 3;

pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

impl Params {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window_hours: DEFAULT_WINDOW_HOURS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Only the single best match.
    #[must_use]
    pub const fn best_match_only(window_hours: WindowHours) -> Self {
        Self {
            window_hours,
            max_suggestions: 1,
        }
    }

    pub fn try_into_window_and_limit(&self) -> Result<(MatchWindow, NonZeroUsize), MatchError> {
        let Self {
            window_hours,
            max_suggestions,
        } = self;
        let window = MatchWindow::from_hours(*window_hours)?;
        let max_suggestions =
            NonZeroUsize::new(*max_suggestions).ok_or(MatchError::NoSuggestionsRequested)?;
        Ok((window, max_suggestions))
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

/// Find, score and rank candidate plays for a single photo.
///
/// Candidates with a confidence score of 0 are excluded. The results
/// are ordered by descending score and candidates with equal scores
/// keep their input order. At most `max_suggestions` results are
/// returned.
pub fn suggest<T>(
    photo_time: impl Into<UtcDateTimeMs>,
    window_hours: WindowHours,
    candidates: impl IntoIterator<Item = T>,
    max_suggestions: usize,
) -> Result<Vec<Suggestion<T>>, MatchError>
where
    T: PlayedAt,
{
    let (window, max_suggestions) = Params {
        window_hours,
        max_suggestions,
    }
    .try_into_window_and_limit()?;
    Ok(suggest_within(
        photo_time.into(),
        window,
        candidates,
        max_suggestions,
    ))
}

/// Infallible variant of [`suggest()`] with pre-validated arguments.
pub fn suggest_within<T>(
    photo_time: UtcDateTimeMs,
    window: MatchWindow,
    candidates: impl IntoIterator<Item = T>,
    max_suggestions: NonZeroUsize,
) -> Vec<Suggestion<T>>
where
    T: PlayedAt,
{
    let mut suggestions = candidates
        .into_iter()
        .filter_map(|track| {
            let time_difference_minutes = time_difference_minutes(photo_time, track.played_at());
            let confidence_score = confidence_score(time_difference_minutes, window);
            if confidence_score.is_zero() {
                return None;
            }
            Some(Suggestion {
                track,
                confidence_score,
                time_difference_minutes,
            })
        })
        .collect::<Vec<_>>();
    // Stable sort: equal scores keep their input order
    suggestions.sort_by(|lhs, rhs| rhs.confidence_score.cmp(&lhs.confidence_score));
    suggestions.truncate(max_suggestions.get());
    suggestions
}

/// Apply [`suggest()`] to each photo independently.
///
/// The same candidate might be suggested for multiple photos. The
/// results are returned in the order of the given photos.
pub fn suggest_batch<'c, P, T>(
    photos: impl IntoIterator<Item = (P, UtcDateTimeMs)>,
    window_hours: WindowHours,
    candidates: &'c [T],
    max_suggestions: usize,
) -> Result<Vec<(P, Vec<Suggestion<&'c T>>)>, MatchError>
where
    T: PlayedAt,
{
    let (window, max_suggestions) = Params {
        window_hours,
        max_suggestions,
    }
    .try_into_window_and_limit()?;
    let batch = photos
        .into_iter()
        .map(|(photo, photo_time)| {
            let suggestions = suggest_within(photo_time, window, candidates, max_suggestions);
            (photo, suggestions)
        })
        .collect();
    Ok(batch)
}

#[cfg(test)]
mod tests;
