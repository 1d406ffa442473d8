// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{User, prelude::*, util::clock::UtcDateTimeMs};
use memorymix_repo::{
    prelude::*,
    user::{EntityRepo, RecordHeader, RecordId},
};

use crate::{InputResult, Result};

#[derive(Debug)]
pub struct ValidatedInput(User);

pub fn validate_input(user: User) -> InputResult<ValidatedInput> {
    if let Err(err) = user.validate() {
        return Err(anyhow::anyhow!("Invalid user input: {err:?}").into());
    }
    Ok(ValidatedInput(user))
}

pub fn create_user(repo: &mut impl EntityRepo, new_user: User) -> Result<RecordId> {
    let ValidatedInput(user) = validate_input(new_user)?;
    let id = repo.insert_user(UtcDateTimeMs::now(), &user)?;
    log::info!("Created user {id:?}");
    Ok(id)
}

pub fn load_user(repo: &mut impl EntityRepo, id: RecordId) -> Result<(RecordHeader, User)> {
    repo.load_user(id).map_err(Into::into)
}

/// Find the user with the given Last.fm account or create a new one.
pub fn resolve_or_create_lastfm_user(
    repo: &mut impl EntityRepo,
    lastfm_username: &str,
) -> Result<RecordId> {
    if let Some(id) = repo
        .resolve_user_id_by_lastfm_username(lastfm_username)
        .optional()?
    {
        return Ok(id);
    }
    create_user(
        repo,
        User {
            lastfm_username: Some(lastfm_username.to_owned()),
            display_name: None,
        },
    )
}

pub fn update_user(repo: &mut impl EntityRepo, id: RecordId, modified_user: User) -> Result<()> {
    let ValidatedInput(user) = validate_input(modified_user)?;
    repo.update_user(id, UtcDateTimeMs::now(), &user)
        .map_err(Into::into)
}

/// Delete a user with all plays and memories.
pub fn purge_user(repo: &mut impl EntityRepo, id: RecordId) -> Result<()> {
    repo.purge_user(id)?;
    log::info!("Purged user {id:?}");
    Ok(())
}
