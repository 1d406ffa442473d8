// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::Connection as _;

use memorymix_repo::{
    mapping::{Record, RecordHeader, RecordId},
    memory::RecordId as MemoryId,
    prelude::ReservableRecordCollector,
    user::RecordId as UserId,
};
use memorymix_usecases::mapping::{self as uc, MappingUpdate};

use crate::{DbConnection, RepoConnection, Result, TransactionError, transaction_error};

pub fn create(
    connection: &mut DbConnection,
    user_id: UserId,
    record: Record,
) -> Result<(RecordHeader, Record)> {
    connection
        .transaction::<_, TransactionError, _>(|connection| {
            let mut repo = RepoConnection::new(connection);
            uc::create_mapping(&mut repo, user_id, record).map_err(transaction_error)
        })
        .map_err(Into::into)
}

pub fn load_one(
    connection: &mut DbConnection,
    user_id: UserId,
    id: RecordId,
) -> Result<(RecordHeader, Record)> {
    let mut repo = RepoConnection::new(connection);
    uc::load_mapping(&mut repo, user_id, id).map_err(Into::into)
}

pub fn load_all_of_memory(
    connection: &mut DbConnection,
    user_id: UserId,
    memory_id: MemoryId,
    collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Record>,
) -> Result<()> {
    let mut repo = RepoConnection::new(connection);
    uc::load_memory_mappings(&mut repo, user_id, memory_id, collector).map_err(Into::into)
}

pub fn update(
    connection: &mut DbConnection,
    user_id: UserId,
    id: RecordId,
    update: MappingUpdate,
) -> Result<(RecordHeader, Record)> {
    connection
        .transaction::<_, TransactionError, _>(|connection| {
            let mut repo = RepoConnection::new(connection);
            uc::update_mapping(&mut repo, user_id, id, update).map_err(transaction_error)
        })
        .map_err(Into::into)
}

pub fn purge(connection: &mut DbConnection, user_id: UserId, id: RecordId) -> Result<()> {
    connection
        .transaction::<_, TransactionError, _>(|connection| {
            let mut repo = RepoConnection::new(connection);
            uc::purge_mapping(&mut repo, user_id, id).map_err(transaction_error)
        })
        .map_err(Into::into)
}
