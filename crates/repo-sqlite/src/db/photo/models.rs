// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{Photo, photo::SizeInPixels};
use memorymix_repo::{memory::RecordId as MemoryId, photo::RecordHeader};

use crate::prelude::*;

use super::schema::*;

fn decode_size(value: Option<i64>) -> anyhow::Result<Option<SizeInPixels>> {
    value
        .map(|value| {
            SizeInPixels::try_from(value)
                .map_err(|_| anyhow::anyhow!("invalid photo size: {value}"))
        })
        .transpose()
}

#[derive(Debug, Queryable)]
#[diesel(table_name = photo)]
pub(crate) struct QueryableRecord {
    pub(crate) row_id: RowId,
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) memory_id: RowId,
    pub(crate) google_photo_id: String,
    pub(crate) base_url: String,
    pub(crate) filename: String,
    pub(crate) mime_type: String,
    pub(crate) creation_time_ms: TimestampMillis,
    pub(crate) width: Option<i64>,
    pub(crate) height: Option<i64>,
    pub(crate) local_path: Option<String>,
}

impl TryFrom<QueryableRecord> for (RecordHeader, MemoryId, Photo) {
    type Error = anyhow::Error;

    fn try_from(from: QueryableRecord) -> anyhow::Result<Self> {
        let QueryableRecord {
            row_id,
            row_created_ms,
            row_updated_ms,
            memory_id,
            google_photo_id,
            base_url,
            filename,
            mime_type,
            creation_time_ms,
            width,
            height,
            local_path,
        } = from;
        let header = record_header_from_sql(row_id, row_created_ms, row_updated_ms);
        let mime_type = mime_type
            .parse()
            .map_err(|err| anyhow::anyhow!("invalid MIME type \"{mime_type}\": {err}"))?;
        let photo = Photo {
            google_photo_id,
            base_url,
            filename,
            mime_type,
            creation_time: timestamp_from_sql(creation_time_ms),
            width: decode_size(width)?,
            height: decode_size(height)?,
            local_path,
        };
        Ok((header, memory_id.into(), photo))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = photo)]
pub(crate) struct InsertableRecord<'a> {
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) memory_id: RowId,
    pub(crate) google_photo_id: &'a str,
    pub(crate) base_url: &'a str,
    pub(crate) filename: &'a str,
    pub(crate) mime_type: &'a str,
    pub(crate) creation_time_ms: TimestampMillis,
    pub(crate) width: Option<i64>,
    pub(crate) height: Option<i64>,
    pub(crate) local_path: Option<&'a str>,
}

impl<'a> InsertableRecord<'a> {
    pub(crate) fn bind(memory_id: MemoryId, created_at: UtcDateTimeMs, photo: &'a Photo) -> Self {
        let row_created_updated_ms = timestamp_to_sql(created_at);
        let Photo {
            google_photo_id,
            base_url,
            filename,
            mime_type,
            creation_time,
            width,
            height,
            local_path,
        } = photo;
        Self {
            row_created_ms: row_created_updated_ms,
            row_updated_ms: row_created_updated_ms,
            memory_id: memory_id.into(),
            google_photo_id,
            base_url,
            filename,
            mime_type: mime_type.as_ref(),
            creation_time_ms: timestamp_to_sql(*creation_time),
            width: width.map(i64::from),
            height: height.map(i64::from),
            local_path: local_path.as_deref(),
        }
    }
}
