// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::Connection as _;

use memorymix_core::{Memory, Photo, matching::Params, memory::MemoryUpdate};
use memorymix_repo::{
    Pagination,
    memory::{RecordHeader, RecordId},
    photo::RecordHeader as PhotoHeader,
    prelude::ReservableRecordCollector,
    user::RecordId as UserId,
};
use memorymix_usecases::memory::{self as uc, CreatedMemory, NewMemory};

use crate::{DbConnection, RepoConnection, Result, TransactionError, transaction_error};

/// Create memories and auto-suggested mappings within a single transaction.
pub fn create(
    connection: &mut DbConnection,
    user_id: UserId,
    new_memory: NewMemory,
    params: &Params,
) -> Result<Vec<CreatedMemory>> {
    connection
        .transaction::<_, TransactionError, _>(|connection| {
            let mut repo = RepoConnection::new(connection);
            uc::create_memories(&mut repo, user_id, new_memory, params).map_err(transaction_error)
        })
        .map_err(Into::into)
}

pub fn load_one(
    connection: &mut DbConnection,
    user_id: UserId,
    id: RecordId,
) -> Result<(RecordHeader, Memory)> {
    let mut repo = RepoConnection::new(connection);
    uc::load_memory(&mut repo, user_id, id).map_err(Into::into)
}

pub fn load_all(
    connection: &mut DbConnection,
    user_id: UserId,
    pagination: &Pagination,
    collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Memory>,
) -> Result<()> {
    let mut repo = RepoConnection::new(connection);
    uc::load_memories(&mut repo, user_id, pagination, collector).map_err(Into::into)
}

pub fn load_photos(
    connection: &mut DbConnection,
    user_id: UserId,
    id: RecordId,
    collector: &mut dyn ReservableRecordCollector<Header = PhotoHeader, Record = Photo>,
) -> Result<()> {
    let mut repo = RepoConnection::new(connection);
    uc::load_memory_photos(&mut repo, user_id, id, collector).map_err(Into::into)
}

pub fn update(
    connection: &mut DbConnection,
    user_id: UserId,
    id: RecordId,
    update: MemoryUpdate,
) -> Result<(RecordHeader, Memory)> {
    connection
        .transaction::<_, TransactionError, _>(|connection| {
            let mut repo = RepoConnection::new(connection);
            uc::update_memory(&mut repo, user_id, id, update).map_err(transaction_error)
        })
        .map_err(Into::into)
}

pub fn purge(connection: &mut DbConnection, user_id: UserId, id: RecordId) -> Result<()> {
    connection
        .transaction::<_, TransactionError, _>(|connection| {
            let mut repo = RepoConnection::new(connection);
            uc::purge_memory(&mut repo, user_id, id).map_err(transaction_error)
        })
        .map_err(Into::into)
}

#[cfg(test)]
mod tests;
