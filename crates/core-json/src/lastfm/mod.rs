// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Responses of the Last.fm `user.getRecentTracks` method.
//!
//! Both the plain and the extended response format are accepted.

use memorymix_core::{
    play::{DurationInMilliseconds, Source},
    util::clock::{MILLIS_PER_SECOND, UtcDateTimeMs},
};

use crate::prelude::*;

mod _core {
    pub(super) use memorymix_core::Play;
}

/// Fallback for tracks without a name.
pub const UNKNOWN_TRACK_NAME: &str = "Unknown";

/// The preferred album image size.
pub const PREFERRED_IMAGE_SIZE: &str = "large";

#[derive(Debug, Clone, Deserialize)]
pub struct RecentTracksResponse {
    pub recenttracks: RecentTracks,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentTracks {
    #[serde(default)]
    pub track: OneOrMany<RecentTrack>,

    #[serde(rename = "@attr", default)]
    pub attr: Option<PageAttr>,
}

impl RecentTracks {
    #[must_use]
    pub fn page(&self) -> Option<Page> {
        self.attr.as_ref().map(PageAttr::to_page)
    }

    /// Convert all completed scrobbles into plays.
    ///
    /// The currently playing track and entries without a play time
    /// are skipped.
    #[must_use]
    pub fn into_plays(self) -> Vec<_core::Play> {
        let tracks = self.track.into_vec();
        let total_count = tracks.len();
        let plays = tracks
            .into_iter()
            .filter_map(RecentTrack::into_play)
            .collect::<Vec<_>>();
        let skipped_count = total_count - plays.len();
        if skipped_count > 0 {
            log::debug!("Skipped {skipped_count} of {total_count} recent track(s)");
        }
        plays
    }
}

/// A single item or an array of items.
///
/// Last.fm collapses arrays with a single element.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(many) => many,
            Self::One(one) => vec![one],
        }
    }
}

/// Numbers are encoded as strings most of the time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAttr {
    #[serde(default)]
    pub page: Option<NumberOrText>,

    #[serde(default)]
    pub per_page: Option<NumberOrText>,

    #[serde(default)]
    pub total_pages: Option<NumberOrText>,

    #[serde(default)]
    pub total: Option<NumberOrText>,
}

impl PageAttr {
    #[must_use]
    pub fn to_page(&self) -> Page {
        let Self {
            page,
            per_page,
            total_pages,
            total,
        } = self;
        let to_u64 = |value: &Option<NumberOrText>| {
            value
                .as_ref()
                .and_then(NumberOrText::to_i64)
                .and_then(|value| u64::try_from(value).ok())
                .unwrap_or_default()
        };
        Page {
            page: to_u64(page),
            per_page: to_u64(per_page),
            total_pages: to_u64(total_pages),
            total: to_u64(total),
        }
    }
}

/// Paging information of a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// 1-based
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total: u64,
}

impl Page {
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentTrack {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub artist: Option<NameOrText>,

    #[serde(default)]
    pub album: Option<NameOrText>,

    #[serde(default)]
    pub image: Vec<Image>,

    #[serde(default)]
    pub date: Option<Date>,

    #[serde(rename = "@attr", default)]
    pub attr: Option<TrackAttr>,

    #[serde(default)]
    pub duration: Option<NumberOrText>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub mbid: Option<String>,
}

impl RecentTrack {
    #[must_use]
    pub fn is_now_playing(&self) -> bool {
        self.attr
            .as_ref()
            .and_then(|attr| attr.nowplaying.as_deref())
            .is_some_and(|nowplaying| nowplaying == "true")
    }

    #[must_use]
    pub fn played_at(&self) -> Option<UtcDateTimeMs> {
        self.date
            .as_ref()
            .and_then(|date| date.uts.to_i64())
            .map(UtcDateTimeMs::from_unix_timestamp_secs)
    }

    /// The large image if available or otherwise the last one.
    #[must_use]
    pub fn album_image_url(&self) -> Option<&str> {
        self.image
            .iter()
            .find(|image| image.size == PREFERRED_IMAGE_SIZE)
            .map(|image| image.text.as_str())
            .filter(|url| !url.is_empty())
            .or_else(|| self.image.last().map(|image| image.text.as_str()))
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn into_play(self) -> Option<_core::Play> {
        if self.is_now_playing() {
            return None;
        }
        let played_at = self.played_at()?;
        let album_image_url = self.album_image_url().map(ToOwned::to_owned);
        let Self {
            name,
            artist,
            album,
            duration,
            url,
            mbid,
            image: _,
            date: _,
            attr: _,
        } = self;
        let duration_ms = duration
            .as_ref()
            .and_then(NumberOrText::to_i64)
            .and_then(|secs| DurationInMilliseconds::try_from(secs).ok())
            .map_or(0, |secs| secs.saturating_mul(MILLIS_PER_SECOND as _));
        Some(_core::Play {
            track_name: name.unwrap_or_else(|| UNKNOWN_TRACK_NAME.to_owned()),
            artist_name: artist.map(NameOrText::into_name).unwrap_or_default(),
            album_name: album.map(NameOrText::into_name).unwrap_or_default(),
            album_image_url,
            played_at,
            duration_ms,
            track_url: url.unwrap_or_default(),
            track_mbid: mbid.filter(|mbid| !mbid.is_empty()),
            source: Source::Lastfm,
            spotify_uri: None,
        })
    }
}

/// Artists and albums are either objects or plain strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NameOrText {
    Object(NamedObject),
    Text(String),
}

impl NameOrText {
    #[must_use]
    pub fn into_name(self) -> String {
        match self {
            Self::Object(NamedObject { name, text }) => name.or(text).unwrap_or_default(),
            Self::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedObject {
    /// Extended format
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "#text", default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    #[serde(rename = "#text", default)]
    pub text: String,

    #[serde(default)]
    pub size: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Date {
    pub uts: NumberOrText,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackAttr {
    #[serde(default)]
    pub nowplaying: Option<String>,
}
