// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{Play, PlayKey, util::clock::UtcDateTimeMs};

use crate::{prelude::*, user::RecordId as UserId};

record_id_newtype!(RecordId);

pub type RecordHeader = crate::RecordHeader<RecordId>;

/// The listening history of users.
pub trait EntityRepo {
    /// Insert a new play
    ///
    /// Fails with [`RepoError::Conflict`] if the user already has a
    /// play with the same key and play time.
    fn insert_play(
        &mut self,
        user_id: UserId,
        created_at: UtcDateTimeMs,
        key: &PlayKey,
        play: &Play,
    ) -> RepoResult<RecordId>;

    fn resolve_play_id(
        &mut self,
        user_id: UserId,
        key: &PlayKey,
        played_at: UtcDateTimeMs,
    ) -> RepoResult<RecordId>;

    /// Load a play of the given user
    ///
    /// Fails with [`RepoError::NotFound`] if the play belongs to
    /// another user.
    fn load_user_play(&mut self, user_id: UserId, id: RecordId)
    -> RepoResult<(RecordHeader, Play)>;

    /// Load all plays within the closed interval `[start, end]`, oldest first.
    fn load_plays_played_between(
        &mut self,
        user_id: UserId,
        start: UtcDateTimeMs,
        end: UtcDateTimeMs,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Play>,
    ) -> RepoResult<()>;

    /// Load the most recent plays, newest first.
    fn load_recent_plays(
        &mut self,
        user_id: UserId,
        pagination: &Pagination,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Play>,
    ) -> RepoResult<()>;

    fn count_plays(&mut self, user_id: UserId) -> RepoResult<u64>;
}
