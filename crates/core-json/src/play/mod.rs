// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::util::clock::UtcDateTimeMs;

use crate::prelude::*;

mod _core {
    pub(super) use memorymix_core::play::{DurationInMilliseconds, Play, Source};
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Lastfm,
    Spotify,
}

impl From<Source> for _core::Source {
    fn from(from: Source) -> Self {
        use Source as From;
        match from {
            From::Lastfm => Self::Lastfm,
            From::Spotify => Self::Spotify,
        }
    }
}

impl From<_core::Source> for Source {
    fn from(from: _core::Source) -> Self {
        use _core::Source as From;
        match from {
            From::Lastfm => Self::Lastfm,
            From::Spotify => Self::Spotify,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub track_name: String,

    pub artist_name: String,

    #[serde(default)]
    pub album_name: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub album_image_url: Option<String>,

    pub played_at: UtcDateTimeMs,

    #[serde(default)]
    pub duration_ms: _core::DurationInMilliseconds,

    #[serde(default)]
    pub track_url: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub track_mbid: Option<String>,

    #[serde(default)]
    pub source: Source,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spotify_uri: Option<String>,
}

impl From<_core::Play> for Play {
    fn from(from: _core::Play) -> Self {
        let _core::Play {
            track_name,
            artist_name,
            album_name,
            album_image_url,
            played_at,
            duration_ms,
            track_url,
            track_mbid,
            source,
            spotify_uri,
        } = from;
        Self {
            track_name,
            artist_name,
            album_name,
            album_image_url,
            played_at,
            duration_ms,
            track_url,
            track_mbid,
            source: source.into(),
            spotify_uri,
        }
    }
}

impl From<Play> for _core::Play {
    fn from(from: Play) -> Self {
        let Play {
            track_name,
            artist_name,
            album_name,
            album_image_url,
            played_at,
            duration_ms,
            track_url,
            track_mbid,
            source,
            spotify_uri,
        } = from;
        Self {
            track_name,
            artist_name,
            album_name,
            album_image_url,
            played_at,
            duration_ms,
            track_url,
            track_mbid,
            source: source.into(),
            spotify_uri,
        }
    }
}
