// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{Mapping, util::clock::UtcDateTimeMs};

use crate::{
    memory::RecordId as MemoryId, photo::RecordId as PhotoId, play::RecordId as PlayId, prelude::*,
    user::RecordId as UserId,
};

record_id_newtype!(RecordId);

pub type RecordHeader = crate::RecordHeader<RecordId>;

/// Association of a play with a photo of a memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub memory_id: MemoryId,
    pub photo_id: PhotoId,
    pub play_id: PlayId,
    pub mapping: Mapping,
}

pub trait EntityRepo {
    fn insert_mapping(&mut self, created_at: UtcDateTimeMs, record: &Record)
    -> RepoResult<RecordId>;

    /// Load a mapping with a memory of the given user
    ///
    /// Fails with [`RepoError::NotFound`] if the memory belongs to
    /// another user.
    fn load_user_mapping(
        &mut self,
        user_id: UserId,
        id: RecordId,
    ) -> RepoResult<(RecordHeader, Record)>;

    fn update_mapping(
        &mut self,
        id: RecordId,
        updated_at: UtcDateTimeMs,
        record: &Record,
    ) -> RepoResult<()>;

    fn purge_mapping(&mut self, id: RecordId) -> RepoResult<()>;

    /// Load all mappings of a memory in insertion order.
    fn load_memory_mappings(
        &mut self,
        memory_id: MemoryId,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Record>,
    ) -> RepoResult<()>;
}
