// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::dsl::count_star;
use memorymix_core::{Play, PlayKey};
use memorymix_repo::{play::*, user::RecordId as UserId};

use crate::{
    db::play::{models::*, schema::*},
    prelude::*,
};

fn collect_records(
    records: Vec<QueryableRecord>,
    collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Play>,
) -> RepoResult<()> {
    collector.reserve(records.len());
    for record in records {
        let (header, entity): (RecordHeader, Play) = record.try_into()?;
        collector.collect(header, entity);
    }
    Ok(())
}

impl EntityRepo for crate::Connection<'_> {
    fn insert_play(
        &mut self,
        user_id: UserId,
        created_at: UtcDateTimeMs,
        key: &PlayKey,
        created: &Play,
    ) -> RepoResult<RecordId> {
        let insertable = InsertableRecord::bind(user_id, created_at, key, created);
        let query = diesel::insert_into(play::table)
            .values(&insertable)
            .returning(play::row_id);
        let row_id = query
            .get_result::<RowId>(self.as_mut())
            .map_err(repo_error)?;
        Ok(row_id.into())
    }

    fn resolve_play_id(
        &mut self,
        user_id: UserId,
        key: &PlayKey,
        played_at: UtcDateTimeMs,
    ) -> RepoResult<RecordId> {
        play::table
            .select(play::row_id)
            .filter(play::user_id.eq(RowId::from(user_id)))
            .filter(play::play_key.eq(key.as_str()))
            .filter(play::played_at_ms.eq(timestamp_to_sql(played_at)))
            .first::<RowId>(self.as_mut())
            .map_err(repo_error)
            .map(Into::into)
    }

    fn load_user_play(&mut self, user_id: UserId, id: RecordId) -> RepoResult<(RecordHeader, Play)> {
        play::table
            .filter(play::row_id.eq(RowId::from(id)))
            .filter(play::user_id.eq(RowId::from(user_id)))
            .first::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)
            .and_then(|record| record.try_into().map_err(Into::into))
    }

    fn load_plays_played_between(
        &mut self,
        user_id: UserId,
        start: UtcDateTimeMs,
        end: UtcDateTimeMs,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Play>,
    ) -> RepoResult<()> {
        let records = play::table
            .filter(play::user_id.eq(RowId::from(user_id)))
            .filter(play::played_at_ms.ge(timestamp_to_sql(start)))
            .filter(play::played_at_ms.le(timestamp_to_sql(end)))
            .order_by((play::played_at_ms, play::row_id))
            .load::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)?;
        collect_records(records, collector)
    }

    fn load_recent_plays(
        &mut self,
        user_id: UserId,
        pagination: &Pagination,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Play>,
    ) -> RepoResult<()> {
        let mut query = play::table
            .filter(play::user_id.eq(RowId::from(user_id)))
            .order_by((play::played_at_ms.desc(), play::row_id.desc()))
            .into_boxed();
        let (limit, offset) = pagination_to_limit_offset(pagination);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        if let Some(offset) = offset {
            query = query.offset(offset);
        }
        let records = query
            .load::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)?;
        collect_records(records, collector)
    }

    fn count_plays(&mut self, user_id: UserId) -> RepoResult<u64> {
        play::table
            .select(count_star())
            .filter(play::user_id.eq(RowId::from(user_id)))
            .first::<i64>(self.as_mut())
            .map_err(repo_error)
            .map(|count| {
                debug_assert!(count >= 0);
                count as u64
            })
    }
}
