// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{Memory, util::clock::UtcDateTimeMs};

use crate::{prelude::*, user::RecordId as UserId};

record_id_newtype!(RecordId);

pub type RecordHeader = crate::RecordHeader<RecordId>;

pub trait EntityRepo {
    fn insert_memory(
        &mut self,
        user_id: UserId,
        created_at: UtcDateTimeMs,
        memory: &Memory,
    ) -> RepoResult<RecordId>;

    /// Load a memory of the given user
    ///
    /// Fails with [`RepoError::NotFound`] if the memory belongs to
    /// another user.
    fn load_user_memory(
        &mut self,
        user_id: UserId,
        id: RecordId,
    ) -> RepoResult<(RecordHeader, Memory)>;

    /// Load the memories of a user, ordered by descending memory date.
    fn load_user_memories(
        &mut self,
        user_id: UserId,
        pagination: &Pagination,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Memory>,
    ) -> RepoResult<()>;

    fn update_memory(
        &mut self,
        id: RecordId,
        updated_at: UtcDateTimeMs,
        memory: &Memory,
    ) -> RepoResult<()>;

    /// Purge the memory
    ///
    /// Purging is recursive and also deletes all photos and mappings
    /// of the memory.
    fn purge_memory(&mut self, id: RecordId) -> RepoResult<()>;
}
