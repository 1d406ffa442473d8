// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::User;
use memorymix_repo::user::RecordHeader;

use crate::prelude::*;

use super::schema::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = user)]
pub(crate) struct QueryableRecord {
    pub(crate) row_id: RowId,
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) lastfm_username: Option<String>,
    pub(crate) display_name: Option<String>,
}

impl From<QueryableRecord> for (RecordHeader, User) {
    fn from(from: QueryableRecord) -> Self {
        let QueryableRecord {
            row_id,
            row_created_ms,
            row_updated_ms,
            lastfm_username,
            display_name,
        } = from;
        let header = record_header_from_sql(row_id, row_created_ms, row_updated_ms);
        let user = User {
            lastfm_username,
            display_name,
        };
        (header, user)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = user)]
pub(crate) struct InsertableRecord<'a> {
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) lastfm_username: Option<&'a str>,
    pub(crate) display_name: Option<&'a str>,
}

impl<'a> InsertableRecord<'a> {
    pub(crate) fn bind(created_at: UtcDateTimeMs, user: &'a User) -> Self {
        let row_created_updated_ms = timestamp_to_sql(created_at);
        let User {
            lastfm_username,
            display_name,
        } = user;
        Self {
            row_created_ms: row_created_updated_ms,
            row_updated_ms: row_created_updated_ms,
            lastfm_username: lastfm_username.as_deref(),
            display_name: display_name.as_deref(),
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = user, treat_none_as_null = true)]
pub(crate) struct UpdatableRecord<'a> {
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) lastfm_username: Option<&'a str>,
    pub(crate) display_name: Option<&'a str>,
}

impl<'a> UpdatableRecord<'a> {
    pub(crate) fn bind(updated_at: UtcDateTimeMs, user: &'a User) -> Self {
        let User {
            lastfm_username,
            display_name,
        } = user;
        Self {
            row_updated_ms: timestamp_to_sql(updated_at),
            lastfm_username: lastfm_username.as_deref(),
            display_name: display_name.as_deref(),
        }
    }
}
