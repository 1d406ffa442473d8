// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{
    Play, PlayKey,
    play::{DurationInMilliseconds, Source},
};
use memorymix_repo::{play::RecordHeader, user::RecordId as UserId};

use crate::prelude::*;

use super::schema::*;

pub(crate) fn encode_source(source: Source) -> i16 {
    i16::from(source as u8)
}

pub(crate) fn decode_source(value: i16) -> anyhow::Result<Source> {
    u8::try_from(value)
        .ok()
        .and_then(Source::from_repr)
        .ok_or_else(|| anyhow::anyhow!("invalid play source value: {value}"))
}

#[derive(Debug, Queryable)]
#[diesel(table_name = play)]
#[allow(dead_code)] // user_id and play_key are required for Diesel but never read
pub(crate) struct QueryableRecord {
    pub(crate) row_id: RowId,
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) user_id: RowId,
    pub(crate) play_key: String,
    pub(crate) track_name: String,
    pub(crate) artist_name: String,
    pub(crate) album_name: String,
    pub(crate) album_image_url: Option<String>,
    pub(crate) played_at_ms: TimestampMillis,
    pub(crate) duration_ms: i64,
    pub(crate) track_url: String,
    pub(crate) track_mbid: Option<String>,
    pub(crate) source: i16,
    pub(crate) spotify_uri: Option<String>,
}

impl TryFrom<QueryableRecord> for (RecordHeader, Play) {
    type Error = anyhow::Error;

    fn try_from(from: QueryableRecord) -> anyhow::Result<Self> {
        let QueryableRecord {
            row_id,
            row_created_ms,
            row_updated_ms,
            user_id: _,
            play_key: _,
            track_name,
            artist_name,
            album_name,
            album_image_url,
            played_at_ms,
            duration_ms,
            track_url,
            track_mbid,
            source,
            spotify_uri,
        } = from;
        let header = record_header_from_sql(row_id, row_created_ms, row_updated_ms);
        let play = Play {
            track_name,
            artist_name,
            album_name,
            album_image_url,
            played_at: timestamp_from_sql(played_at_ms),
            duration_ms: duration_ms as DurationInMilliseconds,
            track_url,
            track_mbid,
            source: decode_source(source)?,
            spotify_uri,
        };
        Ok((header, play))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = play)]
pub(crate) struct InsertableRecord<'a> {
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) user_id: RowId,
    pub(crate) play_key: &'a str,
    pub(crate) track_name: &'a str,
    pub(crate) artist_name: &'a str,
    pub(crate) album_name: &'a str,
    pub(crate) album_image_url: Option<&'a str>,
    pub(crate) played_at_ms: TimestampMillis,
    pub(crate) duration_ms: i64,
    pub(crate) track_url: &'a str,
    pub(crate) track_mbid: Option<&'a str>,
    pub(crate) source: i16,
    pub(crate) spotify_uri: Option<&'a str>,
}

impl<'a> InsertableRecord<'a> {
    pub(crate) fn bind(
        user_id: UserId,
        created_at: UtcDateTimeMs,
        key: &'a PlayKey,
        play: &'a Play,
    ) -> Self {
        let row_created_updated_ms = timestamp_to_sql(created_at);
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
        } = play;
        Self {
            row_created_ms: row_created_updated_ms,
            row_updated_ms: row_created_updated_ms,
            user_id: user_id.into(),
            play_key: key.as_str(),
            track_name,
            artist_name,
            album_name,
            album_image_url: album_image_url.as_deref(),
            played_at_ms: timestamp_to_sql(*played_at),
            duration_ms: *duration_ms as i64,
            track_url,
            track_mbid: track_mbid.as_deref(),
            source: encode_source(*source),
            spotify_uri: spotify_uri.as_deref(),
        }
    }
}
