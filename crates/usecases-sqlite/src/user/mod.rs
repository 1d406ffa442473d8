// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::Connection as _;

use memorymix_core::User;
use memorymix_repo::user::{RecordHeader, RecordId};
use memorymix_usecases::user as uc;

use crate::{DbConnection, RepoConnection, Result, TransactionError, transaction_error};

pub fn create(connection: &mut DbConnection, new_user: User) -> Result<RecordId> {
    let mut repo = RepoConnection::new(connection);
    uc::create_user(&mut repo, new_user).map_err(Into::into)
}

pub fn load_one(connection: &mut DbConnection, id: RecordId) -> Result<(RecordHeader, User)> {
    let mut repo = RepoConnection::new(connection);
    uc::load_user(&mut repo, id).map_err(Into::into)
}

pub fn resolve_or_create_lastfm_user(
    connection: &mut DbConnection,
    lastfm_username: &str,
) -> Result<RecordId> {
    connection
        .transaction::<_, TransactionError, _>(|connection| {
            let mut repo = RepoConnection::new(connection);
            uc::resolve_or_create_lastfm_user(&mut repo, lastfm_username)
                .map_err(transaction_error)
        })
        .map_err(Into::into)
}

pub fn update(connection: &mut DbConnection, id: RecordId, modified_user: User) -> Result<()> {
    let mut repo = RepoConnection::new(connection);
    uc::update_user(&mut repo, id, modified_user).map_err(Into::into)
}

pub fn purge(connection: &mut DbConnection, id: RecordId) -> Result<()> {
    let mut repo = RepoConnection::new(connection);
    uc::purge_user(&mut repo, id).map_err(Into::into)
}

#[cfg(test)]
mod tests;
