// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_repo::{mapping::*, memory::RecordId as MemoryId, user::RecordId as UserId};

use crate::{
    db::{
        mapping::{models::*, schema::*},
        memory::schema::memory,
    },
    prelude::*,
};

impl EntityRepo for crate::Connection<'_> {
    fn insert_mapping(
        &mut self,
        created_at: UtcDateTimeMs,
        created: &Record,
    ) -> RepoResult<RecordId> {
        let insertable = InsertableRecord::bind(created_at, created);
        let query = diesel::insert_into(mapping::table)
            .values(&insertable)
            .returning(mapping::row_id);
        let row_id = query
            .get_result::<RowId>(self.as_mut())
            .map_err(repo_error)?;
        Ok(row_id.into())
    }

    fn load_user_mapping(
        &mut self,
        user_id: UserId,
        id: RecordId,
    ) -> RepoResult<(RecordHeader, Record)> {
        let user_memory_ids = memory::table
            .select(memory::row_id)
            .filter(memory::user_id.eq(RowId::from(user_id)));
        mapping::table
            .filter(mapping::row_id.eq(RowId::from(id)))
            .filter(mapping::memory_id.eq_any(user_memory_ids))
            .first::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)
            .and_then(|record| record.try_into().map_err(Into::into))
    }

    fn update_mapping(
        &mut self,
        id: RecordId,
        updated_at: UtcDateTimeMs,
        updated: &Record,
    ) -> RepoResult<()> {
        let updatable = UpdatableRecord::bind(updated_at, updated);
        let target = mapping::table.filter(mapping::row_id.eq(RowId::from(id)));
        let query = diesel::update(target).set(&updatable);
        let rows_affected: usize = query.execute(self.as_mut()).map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn purge_mapping(&mut self, id: RecordId) -> RepoResult<()> {
        let target = mapping::table.filter(mapping::row_id.eq(RowId::from(id)));
        let query = diesel::delete(target);
        let rows_affected: usize = query.execute(self.as_mut()).map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn load_memory_mappings(
        &mut self,
        memory_id: MemoryId,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Record>,
    ) -> RepoResult<()> {
        let records = mapping::table
            .filter(mapping::memory_id.eq(RowId::from(memory_id)))
            .order_by(mapping::row_id)
            .load::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)?;
        collector.reserve(records.len());
        for record in records {
            let (header, entity): (RecordHeader, Record) = record.try_into()?;
            collector.collect(header, entity);
        }
        Ok(())
    }
}
