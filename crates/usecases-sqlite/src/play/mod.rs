// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::Connection as _;
use jiff::civil::Date;

use memorymix_core::{Play, util::clock::UtcDateTimeMs};
use memorymix_repo::{
    Pagination, play::RecordHeader, prelude::ReservableRecordCollector, user::RecordId as UserId,
};
use memorymix_usecases::play::{self as uc, Summary};

use crate::{DbConnection, RepoConnection, Result, TransactionError, transaction_error};

/// Ingest plays within a single transaction.
pub fn ingest(connection: &mut DbConnection, user_id: UserId, plays: Vec<Play>) -> Result<Summary> {
    connection
        .transaction::<_, TransactionError, _>(|connection| {
            let mut repo = RepoConnection::new(connection);
            uc::ingest_plays(&mut repo, user_id, plays).map_err(transaction_error)
        })
        .map_err(Into::into)
}

pub fn load_recent(
    connection: &mut DbConnection,
    user_id: UserId,
    pagination: &Pagination,
    collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Play>,
) -> Result<()> {
    let mut repo = RepoConnection::new(connection);
    uc::load_recent_plays(&mut repo, user_id, pagination, collector).map_err(Into::into)
}

pub fn count(connection: &mut DbConnection, user_id: UserId) -> Result<u64> {
    let mut repo = RepoConnection::new(connection);
    uc::count_plays(&mut repo, user_id).map_err(Into::into)
}

pub fn load_played_between(
    connection: &mut DbConnection,
    user_id: UserId,
    start: UtcDateTimeMs,
    end: UtcDateTimeMs,
) -> Result<Vec<(RecordHeader, Play)>> {
    let mut repo = RepoConnection::new(connection);
    uc::load_plays_played_between(&mut repo, user_id, start, end).map_err(Into::into)
}

pub fn load_unique_tracks_of_date(
    connection: &mut DbConnection,
    user_id: UserId,
    date: Date,
) -> Result<Vec<(RecordHeader, Play)>> {
    let mut repo = RepoConnection::new(connection);
    uc::load_unique_tracks_of_date(&mut repo, user_id, date).map_err(Into::into)
}
