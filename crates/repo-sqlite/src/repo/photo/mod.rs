// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::Photo;
use memorymix_repo::{memory::RecordId as MemoryId, photo::*};

use crate::{
    db::photo::{models::*, schema::*},
    prelude::*,
};

impl EntityRepo for crate::Connection<'_> {
    fn insert_photo(
        &mut self,
        memory_id: MemoryId,
        created_at: UtcDateTimeMs,
        created: &Photo,
    ) -> RepoResult<RecordId> {
        let insertable = InsertableRecord::bind(memory_id, created_at, created);
        let query = diesel::insert_into(photo::table)
            .values(&insertable)
            .returning(photo::row_id);
        let row_id = query
            .get_result::<RowId>(self.as_mut())
            .map_err(repo_error)?;
        Ok(row_id.into())
    }

    fn load_photo(&mut self, id: RecordId) -> RepoResult<(RecordHeader, MemoryId, Photo)> {
        photo::table
            .filter(photo::row_id.eq(RowId::from(id)))
            .first::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)
            .and_then(|record| record.try_into().map_err(Into::into))
    }

    fn load_memory_photos(
        &mut self,
        memory_id: MemoryId,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Photo>,
    ) -> RepoResult<()> {
        let records = photo::table
            .filter(photo::memory_id.eq(RowId::from(memory_id)))
            .order_by(photo::row_id)
            .load::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)?;
        collector.reserve(records.len());
        for record in records {
            let (header, _memory_id, entity): (RecordHeader, MemoryId, Photo) =
                record.try_into()?;
            collector.collect(header, entity);
        }
        Ok(())
    }
}
