// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{ConfidenceScore, Mapping, matching::ConfidenceScoreValue};
use memorymix_repo::mapping::{Record, RecordHeader};

use crate::prelude::*;

use super::schema::*;

fn encode_confidence_score(confidence_score: Option<ConfidenceScore>) -> Option<i16> {
    confidence_score.map(|score| i16::from(score.value()))
}

fn decode_confidence_score(value: Option<i16>) -> anyhow::Result<Option<ConfidenceScore>> {
    value
        .map(|value| {
            ConfidenceScoreValue::try_from(value)
                .ok()
                .map(ConfidenceScore::new_unchecked)
                .filter(IsValid::is_valid)
                .ok_or_else(|| anyhow::anyhow!("invalid confidence score: {value}"))
        })
        .transpose()
}

#[derive(Debug, Queryable)]
#[diesel(table_name = mapping)]
pub(crate) struct QueryableRecord {
    pub(crate) row_id: RowId,
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) memory_id: RowId,
    pub(crate) photo_id: RowId,
    pub(crate) play_id: RowId,
    pub(crate) is_auto_suggested: bool,
    pub(crate) confidence_score: Option<i16>,
}

impl TryFrom<QueryableRecord> for (RecordHeader, Record) {
    type Error = anyhow::Error;

    fn try_from(from: QueryableRecord) -> anyhow::Result<Self> {
        let QueryableRecord {
            row_id,
            row_created_ms,
            row_updated_ms,
            memory_id,
            photo_id,
            play_id,
            is_auto_suggested,
            confidence_score,
        } = from;
        let header = record_header_from_sql(row_id, row_created_ms, row_updated_ms);
        let record = Record {
            memory_id: memory_id.into(),
            photo_id: photo_id.into(),
            play_id: play_id.into(),
            mapping: Mapping {
                is_auto_suggested,
                confidence_score: decode_confidence_score(confidence_score)?,
            },
        };
        Ok((header, record))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = mapping)]
pub(crate) struct InsertableRecord {
    pub(crate) row_created_ms: TimestampMillis,
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) memory_id: RowId,
    pub(crate) photo_id: RowId,
    pub(crate) play_id: RowId,
    pub(crate) is_auto_suggested: bool,
    pub(crate) confidence_score: Option<i16>,
}

impl InsertableRecord {
    pub(crate) fn bind(created_at: UtcDateTimeMs, record: &Record) -> Self {
        let row_created_updated_ms = timestamp_to_sql(created_at);
        let Record {
            memory_id,
            photo_id,
            play_id,
            mapping:
                Mapping {
                    is_auto_suggested,
                    confidence_score,
                },
        } = record;
        Self {
            row_created_ms: row_created_updated_ms,
            row_updated_ms: row_created_updated_ms,
            memory_id: (*memory_id).into(),
            photo_id: (*photo_id).into(),
            play_id: (*play_id).into(),
            is_auto_suggested: *is_auto_suggested,
            confidence_score: encode_confidence_score(*confidence_score),
        }
    }
}

/// Only the play and the mapping properties are mutable.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = mapping, treat_none_as_null = true)]
pub(crate) struct UpdatableRecord {
    pub(crate) row_updated_ms: TimestampMillis,
    pub(crate) play_id: RowId,
    pub(crate) is_auto_suggested: bool,
    pub(crate) confidence_score: Option<i16>,
}

impl UpdatableRecord {
    pub(crate) fn bind(updated_at: UtcDateTimeMs, record: &Record) -> Self {
        let Record {
            memory_id: _,
            photo_id: _,
            play_id,
            mapping:
                Mapping {
                    is_auto_suggested,
                    confidence_score,
                },
        } = record;
        Self {
            row_updated_ms: timestamp_to_sql(updated_at),
            play_id: (*play_id).into(),
            is_auto_suggested: *is_auto_suggested,
            confidence_score: encode_confidence_score(*confidence_score),
        }
    }
}
