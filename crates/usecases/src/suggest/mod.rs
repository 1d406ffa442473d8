// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Suggestions of plays from the stored listening history.

use std::num::NonZeroUsize;

use memorymix_core::{
    Photo, Play, Suggestion,
    matching::{MatchWindow, Params, suggest_batch, suggest_within},
    util::clock::UtcDateTimeMs,
};
use memorymix_repo::{
    memory::{EntityRepo as MemoryRepo, RecordId as MemoryId},
    photo::{EntityRepo as PhotoRepo, RecordHeader as PhotoHeader},
    play::{EntityRepo as PlayRepo, RecordHeader as PlayHeader},
    user::RecordId as UserId,
};

use crate::Result;

pub type PlaySuggestion = Suggestion<(PlayHeader, Play)>;

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoSuggestions {
    pub photo_header: PhotoHeader,

    pub photo: Photo,

    pub suggestions: Vec<PlaySuggestion>,
}

fn load_candidates(
    repo: &mut impl PlayRepo,
    user_id: UserId,
    start: UtcDateTimeMs,
    end: UtcDateTimeMs,
) -> Result<Vec<(PlayHeader, Play)>> {
    let mut candidates = Vec::<(PlayHeader, Play)>::new();
    repo.load_plays_played_between(user_id, start, end, &mut candidates)?;
    Ok(candidates)
}

pub(crate) fn suggest_within_window(
    repo: &mut impl PlayRepo,
    user_id: UserId,
    photo_time: UtcDateTimeMs,
    window: MatchWindow,
    max_suggestions: NonZeroUsize,
) -> Result<Vec<PlaySuggestion>> {
    let (start, end) = window.around(photo_time);
    let candidates = load_candidates(repo, user_id, start, end)?;
    let candidate_count = candidates.len();
    let suggestions = suggest_within(photo_time, window, candidates, max_suggestions);
    log::debug!(
        "Suggesting {suggestion_count} of {candidate_count} play(s) for photo taken at {photo_time}",
        suggestion_count = suggestions.len()
    );
    Ok(suggestions)
}

/// Time ranges covering the windows around all photo times.
///
/// Overlapping windows are merged. The resulting ranges are ordered
/// and disjoint.
#[must_use]
pub fn candidate_ranges(
    photo_times: impl IntoIterator<Item = UtcDateTimeMs>,
    window: MatchWindow,
) -> Vec<(UtcDateTimeMs, UtcDateTimeMs)> {
    let mut photo_times = photo_times.into_iter().collect::<Vec<_>>();
    photo_times.sort_unstable();
    let mut ranges = Vec::<(UtcDateTimeMs, UtcDateTimeMs)>::new();
    for photo_time in photo_times {
        let (start, end) = window.around(photo_time);
        match ranges.last_mut() {
            Some((_, last_end)) if start <= *last_end => {
                *last_end = end.max(*last_end);
            }
            _ => ranges.push((start, end)),
        }
    }
    ranges
}

/// Suggest plays of the user for a photo taken at `photo_time`.
pub fn suggest_plays_for_photo(
    repo: &mut impl PlayRepo,
    user_id: UserId,
    photo_time: UtcDateTimeMs,
    params: &Params,
) -> Result<Vec<PlaySuggestion>> {
    let (window, max_suggestions) = params.try_into_window_and_limit()?;
    suggest_within_window(repo, user_id, photo_time, window, max_suggestions)
}

/// Suggest plays for each photo of a memory.
///
/// The results are ordered like the photos of the memory. Photos
/// without any candidates are included with an empty list.
pub fn suggest_plays_for_memory<Repo>(
    repo: &mut Repo,
    user_id: UserId,
    memory_id: MemoryId,
    params: &Params,
) -> Result<Vec<PhotoSuggestions>>
where
    Repo: MemoryRepo + PhotoRepo + PlayRepo,
{
    let (window, _) = params.try_into_window_and_limit()?;
    // Fails if the memory is owned by another user
    repo.load_user_memory(user_id, memory_id)?;
    let mut photos = Vec::<(PhotoHeader, Photo)>::new();
    repo.load_memory_photos(memory_id, &mut photos)?;
    let ranges = candidate_ranges(photos.iter().map(|(_, photo)| photo.creation_time), window);
    if ranges.is_empty() {
        log::debug!("Memory {memory_id:?} has no photos");
        return Ok(Vec::new());
    }
    let mut candidates = Vec::<(PlayHeader, Play)>::new();
    for (start, end) in &ranges {
        repo.load_plays_played_between(user_id, *start, *end, &mut candidates)?;
    }
    log::debug!(
        "Loaded {candidate_count} candidate play(s) in {range_count} time range(s)",
        candidate_count = candidates.len(),
        range_count = ranges.len(),
    );
    let batch = suggest_batch(
        photos.iter().map(|entry| (entry, entry.1.creation_time)),
        params.window_hours,
        &candidates,
        params.max_suggestions,
    )?;
    let photo_suggestions = batch
        .into_iter()
        .map(|((photo_header, photo), suggestions)| PhotoSuggestions {
            photo_header: photo_header.clone(),
            photo: photo.clone(),
            suggestions: suggestions
                .into_iter()
                .map(|suggestion| suggestion.map_track(Clone::clone))
                .collect(),
        })
        .collect();
    Ok(photo_suggestions)
}
