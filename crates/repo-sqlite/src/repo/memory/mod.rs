// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::Memory;
use memorymix_repo::{memory::*, user::RecordId as UserId};

use crate::{
    db::memory::{models::*, schema::*},
    prelude::*,
};

impl EntityRepo for crate::Connection<'_> {
    fn insert_memory(
        &mut self,
        user_id: UserId,
        created_at: UtcDateTimeMs,
        created: &Memory,
    ) -> RepoResult<RecordId> {
        let insertable = InsertableRecord::bind(user_id, created_at, created);
        let query = diesel::insert_into(memory::table)
            .values(&insertable)
            .returning(memory::row_id);
        let row_id = query
            .get_result::<RowId>(self.as_mut())
            .map_err(repo_error)?;
        Ok(row_id.into())
    }

    fn load_user_memory(
        &mut self,
        user_id: UserId,
        id: RecordId,
    ) -> RepoResult<(RecordHeader, Memory)> {
        memory::table
            .filter(memory::row_id.eq(RowId::from(id)))
            .filter(memory::user_id.eq(RowId::from(user_id)))
            .first::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)
            .map(Into::into)
    }

    fn load_user_memories(
        &mut self,
        user_id: UserId,
        pagination: &Pagination,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Memory>,
    ) -> RepoResult<()> {
        let mut query = memory::table
            .filter(memory::user_id.eq(RowId::from(user_id)))
            .order_by((memory::memory_date_ms.desc(), memory::row_id.desc()))
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
        collector.reserve(records.len());
        for record in records {
            let (header, entity): (RecordHeader, Memory) = record.into();
            collector.collect(header, entity);
        }
        Ok(())
    }

    fn update_memory(
        &mut self,
        id: RecordId,
        updated_at: UtcDateTimeMs,
        updated: &Memory,
    ) -> RepoResult<()> {
        let updatable = UpdatableRecord::bind(updated_at, updated);
        let target = memory::table.filter(memory::row_id.eq(RowId::from(id)));
        let query = diesel::update(target).set(&updatable);
        let rows_affected: usize = query.execute(self.as_mut()).map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn purge_memory(&mut self, id: RecordId) -> RepoResult<()> {
        // Photos and mappings are deleted by ON DELETE CASCADE
        let target = memory::table.filter(memory::row_id.eq(RowId::from(id)));
        let query = diesel::delete(target);
        let rows_affected: usize = query.execute(self.as_mut()).map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
