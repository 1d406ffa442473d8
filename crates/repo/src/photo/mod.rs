// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{Photo, util::clock::UtcDateTimeMs};

use crate::{memory::RecordId as MemoryId, prelude::*};

record_id_newtype!(RecordId);

pub type RecordHeader = crate::RecordHeader<RecordId>;

pub trait EntityRepo {
    fn insert_photo(
        &mut self,
        memory_id: MemoryId,
        created_at: UtcDateTimeMs,
        photo: &Photo,
    ) -> RepoResult<RecordId>;

    fn load_photo(&mut self, id: RecordId) -> RepoResult<(RecordHeader, MemoryId, Photo)>;

    /// Load all photos of a memory in insertion order.
    fn load_memory_photos(
        &mut self,
        memory_id: MemoryId,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Photo>,
    ) -> RepoResult<()>;
}
