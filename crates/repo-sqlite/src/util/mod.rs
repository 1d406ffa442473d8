// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// Convert pagination into LIMIT and OFFSET values.
///
/// SQLite only accepts an OFFSET in conjunction with a LIMIT.
pub(crate) fn pagination_to_limit_offset(pagination: &Pagination) -> (Option<i64>, Option<i64>) {
    if !pagination.is_paginated() {
        return (None, None);
    }
    let limit = i64::try_from(pagination.mandatory_limit()).unwrap_or(i64::MAX);
    let offset = pagination
        .offset
        .map(|offset| i64::try_from(offset).unwrap_or(i64::MAX));
    (Some(limit), offset)
}

pub(crate) const fn timestamp_to_sql(timestamp: UtcDateTimeMs) -> TimestampMillis {
    timestamp.unix_timestamp_millis()
}

pub(crate) const fn timestamp_from_sql(timestamp_millis: TimestampMillis) -> UtcDateTimeMs {
    UtcDateTimeMs::from_unix_timestamp_millis(timestamp_millis)
}

pub(crate) fn record_header_from_sql<Id>(
    row_id: RowId,
    row_created_ms: TimestampMillis,
    row_updated_ms: TimestampMillis,
) -> memorymix_repo::RecordHeader<Id>
where
    Id: From<RowId>,
{
    memorymix_repo::RecordHeader {
        id: row_id.into(),
        created_at: timestamp_from_sql(row_created_ms),
        updated_at: timestamp_from_sql(row_updated_ms),
    }
}
