// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::User;
use memorymix_repo::user::*;

use crate::{
    db::user::{models::*, schema::*},
    prelude::*,
};

impl EntityRepo for crate::Connection<'_> {
    fn insert_user(&mut self, created_at: UtcDateTimeMs, created: &User) -> RepoResult<RecordId> {
        let insertable = InsertableRecord::bind(created_at, created);
        let query = diesel::insert_into(user::table)
            .values(&insertable)
            .returning(user::row_id);
        let row_id = query
            .get_result::<RowId>(self.as_mut())
            .map_err(repo_error)?;
        Ok(row_id.into())
    }

    fn load_user(&mut self, id: RecordId) -> RepoResult<(RecordHeader, User)> {
        user::table
            .filter(user::row_id.eq(RowId::from(id)))
            .first::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)
            .map(Into::into)
    }

    fn resolve_user_id_by_lastfm_username(
        &mut self,
        lastfm_username: &str,
    ) -> RepoResult<RecordId> {
        user::table
            .select(user::row_id)
            .filter(user::lastfm_username.eq(lastfm_username))
            .first::<RowId>(self.as_mut())
            .map_err(repo_error)
            .map(Into::into)
    }

    fn update_user(
        &mut self,
        id: RecordId,
        updated_at: UtcDateTimeMs,
        updated: &User,
    ) -> RepoResult<()> {
        let updatable = UpdatableRecord::bind(updated_at, updated);
        let target = user::table.filter(user::row_id.eq(RowId::from(id)));
        let query = diesel::update(target).set(&updatable);
        let rows_affected: usize = query.execute(self.as_mut()).map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn purge_user(&mut self, id: RecordId) -> RepoResult<()> {
        let target = user::table.filter(user::row_id.eq(RowId::from(id)));
        let query = diesel::delete(target);
        let rows_affected: usize = query.execute(self.as_mut()).map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
