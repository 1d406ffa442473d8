// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{User, util::clock::UtcDateTimeMs};

use crate::prelude::*;

record_id_newtype!(RecordId);

pub type RecordHeader = crate::RecordHeader<RecordId>;

pub trait EntityRepo {
    fn insert_user(&mut self, created_at: UtcDateTimeMs, user: &User) -> RepoResult<RecordId>;

    fn load_user(&mut self, id: RecordId) -> RepoResult<(RecordHeader, User)>;

    fn resolve_user_id_by_lastfm_username(&mut self, lastfm_username: &str)
    -> RepoResult<RecordId>;

    fn update_user(&mut self, id: RecordId, updated_at: UtcDateTimeMs, user: &User)
    -> RepoResult<()>;

    /// Purge the user
    ///
    /// Purging is recursive and deletes all plays and memories of the user.
    fn purge_user(&mut self, id: RecordId) -> RepoResult<()>;
}
