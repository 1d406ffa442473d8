// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::NonZeroUsize;

use memorymix_core::{
    Mapping, Memory, Photo,
    matching::{MatchWindow, Params},
    memory::MemoryUpdate,
    prelude::*,
    util::clock::UtcDateTimeMs,
};
use memorymix_repo::{
    mapping::{EntityRepo as MappingRepo, Record as MappingRecord, RecordId as MappingId},
    memory::{EntityRepo as MemoryRepo, RecordHeader, RecordId},
    photo::{EntityRepo as PhotoRepo, RecordHeader as PhotoHeader, RecordId as PhotoId},
    play::EntityRepo as PlayRepo,
    prelude::*,
    user::RecordId as UserId,
};

use crate::{InputResult, Result, suggest::suggest_within_window};

/// A memory together with the photos picked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMemory {
    pub memory: Memory,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedMemory {
    pub memory_id: RecordId,

    /// The single photo of the memory, if any
    pub photo_id: Option<PhotoId>,

    /// The auto-suggested mapping of the photo, if any
    pub mapping_id: Option<MappingId>,
}

#[derive(Debug)]
pub struct ValidatedInput(NewMemory);

pub fn validate_memory(memory: &Memory) -> InputResult<()> {
    memory
        .validate()
        .map_err(|err| anyhow::anyhow!("Invalid memory input: {err:?}").into())
}

pub fn validate_input(new_memory: NewMemory) -> InputResult<ValidatedInput> {
    validate_memory(&new_memory.memory)?;
    for photo in &new_memory.photos {
        if let Err(err) = photo.validate() {
            return Err(anyhow::anyhow!("Invalid photo input: {err:?}").into());
        }
    }
    Ok(ValidatedInput(new_memory))
}

/// Create one memory per photo.
///
/// With more than one photo the titles are numbered consecutively,
/// starting at 1. Without any photos a single memory is created.
///
/// For each photo the best matching play of the user within the
/// time window of `params` is stored as an auto-suggested mapping.
/// The number of suggestions in `params` is ignored.
pub fn create_memories<Repo>(
    repo: &mut Repo,
    user_id: UserId,
    new_memory: NewMemory,
    params: &Params,
) -> Result<Vec<CreatedMemory>>
where
    Repo: MemoryRepo + PhotoRepo + PlayRepo + MappingRepo,
{
    let ValidatedInput(NewMemory { memory, photos }) = validate_input(new_memory)?;
    let window = MatchWindow::from_hours(params.window_hours)?;
    let created_at = UtcDateTimeMs::now();
    if photos.is_empty() {
        let memory_id = repo.insert_memory(user_id, created_at, &memory)?;
        log::info!("Created memory {memory_id:?} without photos");
        return Ok(vec![CreatedMemory {
            memory_id,
            photo_id: None,
            mapping_id: None,
        }]);
    }
    let photo_count = photos.len();
    let mut created = Vec::with_capacity(photo_count);
    for (index, photo) in photos.into_iter().enumerate() {
        let title = if photo_count > 1 {
            Memory::numbered_title(&memory.title, index + 1)
        } else {
            memory.title.clone()
        };
        let photo_memory = Memory {
            title,
            ..memory.clone()
        };
        let memory_id = repo.insert_memory(user_id, created_at, &photo_memory)?;
        let photo_id = repo.insert_photo(memory_id, created_at, &photo)?;
        let best_suggestion = suggest_within_window(
            repo,
            user_id,
            photo.creation_time,
            window,
            NonZeroUsize::MIN,
        )?
        .into_iter()
        .next();
        let mapping_id = if let Some(suggestion) = best_suggestion {
            let (play_header, _) = suggestion.track;
            let record = MappingRecord {
                memory_id,
                photo_id,
                play_id: play_header.id,
                mapping: Mapping::auto_suggested(suggestion.confidence_score),
            };
            Some(repo.insert_mapping(created_at, &record)?)
        } else {
            log::debug!("No play found for photo {photo_id:?}");
            None
        };
        created.push(CreatedMemory {
            memory_id,
            photo_id: Some(photo_id),
            mapping_id,
        });
    }
    log::info!("Created {photo_count} memories");
    Ok(created)
}

pub fn load_memory(
    repo: &mut impl MemoryRepo,
    user_id: UserId,
    id: RecordId,
) -> Result<(RecordHeader, Memory)> {
    repo.load_user_memory(user_id, id).map_err(Into::into)
}

/// The memories of a user, most recent first.
pub fn load_memories(
    repo: &mut impl MemoryRepo,
    user_id: UserId,
    pagination: &Pagination,
    collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Memory>,
) -> Result<()> {
    repo.load_user_memories(user_id, pagination, collector)
        .map_err(Into::into)
}

pub fn load_memory_photos<Repo>(
    repo: &mut Repo,
    user_id: UserId,
    id: RecordId,
    collector: &mut dyn ReservableRecordCollector<Header = PhotoHeader, Record = Photo>,
) -> Result<()>
where
    Repo: MemoryRepo + PhotoRepo,
{
    repo.load_user_memory(user_id, id)?;
    repo.load_memory_photos(id, collector).map_err(Into::into)
}

/// Apply a partial update and return the updated memory.
pub fn update_memory(
    repo: &mut impl MemoryRepo,
    user_id: UserId,
    id: RecordId,
    update: MemoryUpdate,
) -> Result<(RecordHeader, Memory)> {
    let (header, mut memory) = repo.load_user_memory(user_id, id)?;
    if !update.apply(&mut memory) {
        log::debug!("Memory {id:?} is unchanged");
        return Ok((header, memory));
    }
    validate_memory(&memory)?;
    let updated_at = UtcDateTimeMs::now();
    repo.update_memory(id, updated_at, &memory)?;
    let header = RecordHeader {
        updated_at,
        ..header
    };
    Ok((header, memory))
}

/// Delete a memory with all its photos and mappings.
pub fn purge_memory(repo: &mut impl MemoryRepo, user_id: UserId, id: RecordId) -> Result<()> {
    repo.load_user_memory(user_id, id)?;
    repo.purge_memory(id)?;
    log::info!("Purged memory {id:?}");
    Ok(())
}

