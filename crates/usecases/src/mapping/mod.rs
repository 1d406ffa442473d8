// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{prelude::*, util::clock::UtcDateTimeMs};
use memorymix_repo::{
    mapping::{EntityRepo, Record, RecordHeader, RecordId},
    memory::{EntityRepo as MemoryRepo, RecordId as MemoryId},
    photo::EntityRepo as PhotoRepo,
    play::{EntityRepo as PlayRepo, RecordId as PlayId},
    prelude::*,
    user::RecordId as UserId,
};

use crate::{InputError, Result};

/// Partial update of a mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingUpdate {
    /// Replacing the play turns the mapping into a manual one.
    pub play_id: Option<PlayId>,

    pub is_auto_suggested: Option<bool>,
}

impl MappingUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        let Self {
            play_id,
            is_auto_suggested,
        } = self;
        play_id.is_none() && is_auto_suggested.is_none()
    }
}

fn validate_record<Repo>(repo: &mut Repo, user_id: UserId, record: &Record) -> Result<()>
where
    Repo: MemoryRepo + PhotoRepo + PlayRepo,
{
    let Record {
        memory_id,
        photo_id,
        play_id,
        mapping,
    } = record;
    if let Err(err) = mapping.validate() {
        return Err(InputError(anyhow::anyhow!("Invalid mapping input: {err:?}")).into());
    }
    // Both the memory and the play must be owned by the user
    repo.load_user_memory(user_id, *memory_id)?;
    repo.load_user_play(user_id, *play_id)?;
    let (_, photo_memory_id, _) = repo.load_photo(*photo_id)?;
    if photo_memory_id != *memory_id {
        log::warn!("Photo {photo_id:?} does not belong to memory {memory_id:?}");
        return Err(InputError(anyhow::anyhow!(
            "Photo {photo_id:?} does not belong to memory {memory_id:?}"
        ))
        .into());
    }
    Ok(())
}

/// Associate a play with a photo of a memory of the user.
///
/// Fails with [`RepoError::NotFound`] if the memory or the play is
/// not owned by the user.
pub fn create_mapping<Repo>(
    repo: &mut Repo,
    user_id: UserId,
    record: Record,
) -> Result<(RecordHeader, Record)>
where
    Repo: EntityRepo + MemoryRepo + PhotoRepo + PlayRepo,
{
    validate_record(repo, user_id, &record)?;
    let created_at = UtcDateTimeMs::now();
    let id = repo.insert_mapping(created_at, &record)?;
    let header = RecordHeader {
        id,
        created_at,
        updated_at: created_at,
    };
    Ok((header, record))
}

pub fn load_mapping(
    repo: &mut impl EntityRepo,
    user_id: UserId,
    id: RecordId,
) -> Result<(RecordHeader, Record)> {
    repo.load_user_mapping(user_id, id).map_err(Into::into)
}

pub fn update_mapping<Repo>(
    repo: &mut Repo,
    user_id: UserId,
    id: RecordId,
    update: MappingUpdate,
) -> Result<(RecordHeader, Record)>
where
    Repo: EntityRepo + MemoryRepo + PhotoRepo + PlayRepo,
{
    let (header, mut record) = repo.load_user_mapping(user_id, id)?;
    if update.is_empty() {
        return Ok((header, record));
    }
    let MappingUpdate {
        play_id,
        is_auto_suggested,
    } = update;
    if let Some(is_auto_suggested) = is_auto_suggested {
        record.mapping.is_auto_suggested = is_auto_suggested;
    }
    if let Some(play_id) = play_id {
        record.play_id = play_id;
        record.mapping.is_auto_suggested = false;
    }
    validate_record(repo, user_id, &record)?;
    let updated_at = UtcDateTimeMs::now();
    repo.update_mapping(id, updated_at, &record)?;
    let header = RecordHeader {
        updated_at,
        ..header
    };
    Ok((header, record))
}

pub fn purge_mapping(repo: &mut impl EntityRepo, user_id: UserId, id: RecordId) -> Result<()> {
    repo.load_user_mapping(user_id, id)?;
    repo.purge_mapping(id).map_err(Into::into)
}

/// All mappings of a memory of the user.
pub fn load_memory_mappings<Repo>(
    repo: &mut Repo,
    user_id: UserId,
    memory_id: MemoryId,
    collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Record>,
) -> Result<()>
where
    Repo: EntityRepo + MemoryRepo,
{
    repo.load_user_memory(user_id, memory_id)?;
    repo.load_memory_mappings(memory_id, collector)
        .map_err(Into::into)
}
