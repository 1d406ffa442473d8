// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::Memory;
use memorymix_repo::{memory::RecordHeader, user::RecordId as UserId};

use crate::prelude::*;

use super::schema::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = memory)]
#[allow(dead_code)] // user_id is required for Diesel but never read
pub(crate) struct QueryableRecord {
    pub(crate) row_id: RowId,
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) user_id: RowId,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) memory_date_ms: TimestampMillis,
}

impl From<QueryableRecord> for (RecordHeader, Memory) {
    fn from(from: QueryableRecord) -> Self {
        let QueryableRecord {
            row_id,
            row_created_ms,
            row_updated_ms,
            user_id: _,
            title,
            description,
            memory_date_ms,
        } = from;
        let header = record_header_from_sql(row_id, row_created_ms, row_updated_ms);
        let memory = Memory {
            title,
            description,
            memory_date: timestamp_from_sql(memory_date_ms),
        };
        (header, memory)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = memory)]
pub(crate) struct InsertableRecord<'a> {
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) user_id: RowId,
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) memory_date_ms: TimestampMillis,
}

impl<'a> InsertableRecord<'a> {
    pub(crate) fn bind(user_id: UserId, created_at: UtcDateTimeMs, memory: &'a Memory) -> Self {
        let row_created_updated_ms = timestamp_to_sql(created_at);
        let Memory {
            title,
            description,
            memory_date,
        } = memory;
        Self {
            row_created_ms: row_created_updated_ms,
            row_updated_ms: row_created_updated_ms,
            user_id: user_id.into(),
            title,
            description: description.as_deref(),
            memory_date_ms: timestamp_to_sql(*memory_date),
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = memory, treat_none_as_null = true)]
pub(crate) struct UpdatableRecord<'a> {
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) memory_date_ms: TimestampMillis,
}

impl<'a> UpdatableRecord<'a> {
    pub(crate) fn bind(updated_at: UtcDateTimeMs, memory: &'a Memory) -> Self {
        let Memory {
            title,
            description,
            memory_date,
        } = memory;
        Self {
            row_updated_ms: timestamp_to_sql(updated_at),
            title,
            description: description.as_deref(),
            memory_date_ms: timestamp_to_sql(*memory_date),
        }
    }
}
