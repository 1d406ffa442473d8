// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{matching::Params, util::clock::UtcDateTimeMs};
use memorymix_repo::{memory::RecordId as MemoryId, user::RecordId as UserId};
use memorymix_usecases::suggest::{self as uc, PhotoSuggestions, PlaySuggestion};

use crate::{DbConnection, RepoConnection, Result};

pub fn suggest_plays_for_photo(
    connection: &mut DbConnection,
    user_id: UserId,
    photo_time: UtcDateTimeMs,
    params: &Params,
) -> Result<Vec<PlaySuggestion>> {
    let mut repo = RepoConnection::new(connection);
    uc::suggest_plays_for_photo(&mut repo, user_id, photo_time, params).map_err(Into::into)
}

pub fn suggest_plays_for_memory(
    connection: &mut DbConnection,
    user_id: UserId,
    memory_id: MemoryId,
    params: &Params,
) -> Result<Vec<PhotoSuggestions>> {
    let mut repo = RepoConnection::new(connection);
    uc::suggest_plays_for_memory(&mut repo, user_id, memory_id, params).map_err(Into::into)
}

#[cfg(test)]
mod tests;
