// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::matching::{ConfidenceScoreValue, TimeDifferenceMinutes};

use crate::{RecordIdValue, photo::Photo, play::Play, prelude::*};

mod _core {
    pub(super) use memorymix_core::{Photo, Play, matching::Suggestion};
}

/// A suggested play together with its match quality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct TrackSuggestion {
    pub track_id: RecordIdValue,

    #[serde(flatten)]
    pub track: Play,

    pub confidence_score: ConfidenceScoreValue,

    pub time_difference_minutes: TimeDifferenceMinutes,
}

impl<I> From<_core::Suggestion<&(I, _core::Play)>> for TrackSuggestion
where
    I: Copy + Into<RecordIdValue>,
{
    fn from(from: _core::Suggestion<&(I, _core::Play)>) -> Self {
        let _core::Suggestion {
            track: (track_id, track),
            confidence_score,
            time_difference_minutes,
        } = from;
        Self {
            track_id: (*track_id).into(),
            track: track.clone().into(),
            confidence_score: confidence_score.value(),
            time_difference_minutes,
        }
    }
}

impl<I> From<_core::Suggestion<(I, _core::Play)>> for TrackSuggestion
where
    I: Into<RecordIdValue>,
{
    fn from(from: _core::Suggestion<(I, _core::Play)>) -> Self {
        let _core::Suggestion {
            track: (track_id, track),
            confidence_score,
            time_difference_minutes,
        } = from;
        Self {
            track_id: track_id.into(),
            track: track.into(),
            confidence_score: confidence_score.value(),
            time_difference_minutes,
        }
    }
}

/// Ranked suggestions for a single photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct PhotoSuggestions {
    pub photo_id: RecordIdValue,

    pub photo: Photo,

    pub suggested_tracks: Vec<TrackSuggestion>,
}

impl PhotoSuggestions {
    /// Stored records are converted by mapping the track of each
    /// suggestion to its record id and play.
    #[must_use]
    pub fn new<S>(
        photo_id: impl Into<RecordIdValue>,
        photo: _core::Photo,
        suggestions: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<TrackSuggestion>,
    {
        Self {
            photo_id: photo_id.into(),
            photo: photo.into(),
            suggested_tracks: suggestions.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests;
