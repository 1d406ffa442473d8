// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::HashSet, fmt};

use strum::FromRepr;

use crate::prelude::*;

pub type DurationInMilliseconds = u64;

/// Where a play has been recorded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Source {
    #[default]
    Lastfm = 0,
    Spotify = 1,
}

/// A recorded instance of a track being listened to.
///
/// Plays are immutable once recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
    pub track_name: String,

    pub artist_name: String,

    pub album_name: String,

    pub album_image_url: Option<String>,

    pub played_at: UtcDateTimeMs,

    pub duration_ms: DurationInMilliseconds,

    pub track_url: String,

    /// `MusicBrainz` recording identifier
    pub track_mbid: Option<String>,

    pub source: Source,

    pub spotify_uri: Option<String>,
}

impl Play {
    #[must_use]
    pub fn key(&self) -> PlayKey {
        PlayKey::new(self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayInvalidity {
    TrackNameEmpty,
    TrackMbidEmpty,
    SpotifyUriEmpty,
}

impl Validate for Play {
    type Invalidity = PlayInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            track_name,
            track_mbid,
            spotify_uri,
            ..
        } = self;
        ValidationContext::new()
            .invalidate_if(
                track_name.trim().is_empty(),
                Self::Invalidity::TrackNameEmpty,
            )
            .invalidate_if(
                track_mbid.as_ref().is_some_and(|mbid| mbid.trim().is_empty()),
                Self::Invalidity::TrackMbidEmpty,
            )
            .invalidate_if(
                spotify_uri.as_ref().is_some_and(|uri| uri.trim().is_empty()),
                Self::Invalidity::SpotifyUriEmpty,
            )
            .into()
    }
}

/// Synthetic identity of a play.
///
/// Formatted as `<track name>|<artist name>|<unix timestamp in seconds>`.
/// Together with the owner and the play time it identifies duplicate
/// listening events.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayKey(String);

impl PlayKey {
    #[must_use]
    pub fn new(play: &Play) -> Self {
        Self::from_parts(&play.track_name, &play.artist_name, play.played_at)
    }

    #[must_use]
    pub fn from_parts(track_name: &str, artist_name: &str, played_at: UtcDateTimeMs) -> Self {
        let unix_timestamp = played_at.unix_timestamp_secs();
        Self(format!("{track_name}|{artist_name}|{unix_timestamp}"))
    }

    /// Wrap a key that has been created before, e.g. loaded from storage.
    #[must_use]
    pub const fn from_inner(inner: String) -> Self {
        Self(inner)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        let Self(inner) = self;
        inner
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        let Self(inner) = self;
        inner
    }
}

impl AsRef<str> for PlayKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PlayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep only the first play of each track.
///
/// Tracks are identified case-insensitively by track and artist name.
/// The relative order of the remaining items is preserved.
pub fn retain_first_play_per_track<T>(
    items: impl IntoIterator<Item = T>,
    play_of: impl Fn(&T) -> &Play,
) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let play = play_of(item);
            seen.insert((play.track_name.to_lowercase(), play.artist_name.to_lowercase()))
        })
        .collect()
}

#[cfg(test)]
mod tests;
