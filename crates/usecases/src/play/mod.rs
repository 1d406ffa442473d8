// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashSet;

use jiff::civil::Date;
use memorymix_core::{
    Play,
    play::retain_first_play_per_track,
    prelude::*,
    util::clock::{UtcDateTimeMs, utc_day_range},
};
use memorymix_repo::{
    play::{EntityRepo, RecordHeader},
    prelude::*,
    user::RecordId as UserId,
};

use crate::{InputError, InputResult, Result};

/// Outcome of [`ingest_plays()`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub added: usize,

    /// Duplicates that have been ignored
    pub skipped: usize,
}

#[derive(Debug)]
pub struct ValidatedInput(Vec<Play>);

pub fn validate_input(plays: Vec<Play>) -> InputResult<ValidatedInput> {
    for play in &plays {
        if let Err(err) = play.validate() {
            log::warn!("Rejecting invalid play {play:?}: {err:?}");
            return Err(anyhow::anyhow!("Invalid play input: {err:?}").into());
        }
    }
    Ok(ValidatedInput(plays))
}

/// Store new plays of a user.
///
/// A play is a duplicate if the user already has a play with the same
/// key and play time, either stored or earlier in the same batch.
/// Duplicates are skipped silently which makes the ingestion idempotent.
pub fn ingest_plays(
    repo: &mut impl EntityRepo,
    user_id: UserId,
    plays: Vec<Play>,
) -> Result<Summary> {
    let ValidatedInput(plays) = validate_input(plays)?;
    let created_at = UtcDateTimeMs::now();
    let mut summary = Summary::default();
    let mut ingested = HashSet::with_capacity(plays.len());
    for play in &plays {
        let key = play.key();
        if !ingested.insert((key.clone(), play.played_at)) {
            log::debug!("Skipping duplicate play \"{key}\" within batch");
            summary.skipped += 1;
            continue;
        }
        if repo
            .resolve_play_id(user_id, &key, play.played_at)
            .optional()?
            .is_some()
        {
            log::debug!("Skipping existing play \"{key}\"");
            summary.skipped += 1;
            continue;
        }
        repo.insert_play(user_id, created_at, &key, play)?;
        summary.added += 1;
    }
    log::info!(
        "Ingested {added} new play(s) and skipped {skipped} duplicate(s)",
        added = summary.added,
        skipped = summary.skipped,
    );
    Ok(summary)
}

pub fn load_recent_plays(
    repo: &mut impl EntityRepo,
    user_id: UserId,
    pagination: &Pagination,
    collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Play>,
) -> Result<()> {
    repo.load_recent_plays(user_id, pagination, collector)
        .map_err(Into::into)
}

pub fn count_plays(repo: &mut impl EntityRepo, user_id: UserId) -> Result<u64> {
    repo.count_plays(user_id).map_err(Into::into)
}

/// Plays within the closed interval `[start, end]`, oldest first.
pub fn load_plays_played_between(
    repo: &mut impl EntityRepo,
    user_id: UserId,
    start: UtcDateTimeMs,
    end: UtcDateTimeMs,
) -> Result<Vec<(RecordHeader, Play)>> {
    if start > end {
        return Err(InputError(anyhow::anyhow!("Empty time range: {start} > {end}")).into());
    }
    let mut plays = Vec::<(RecordHeader, Play)>::new();
    repo.load_plays_played_between(user_id, start, end, &mut plays)?;
    Ok(plays)
}

/// The first play of each track on a calendar day in UTC.
///
/// Tracks are distinguished case-insensitively by name and artist.
pub fn load_unique_tracks_of_date(
    repo: &mut impl EntityRepo,
    user_id: UserId,
    date: Date,
) -> Result<Vec<(RecordHeader, Play)>> {
    let (start, end) = utc_day_range(date)
        .ok_or_else(|| InputError(anyhow::anyhow!("Unsupported date: {date}")))?;
    // Exclusive upper bound
    let end = end.saturating_sub_millis(1);
    let plays = load_plays_played_between(repo, user_id, start, end)?;
    let play_count = plays.len();
    let unique_plays = retain_first_play_per_track(plays, |(_, play)| play);
    log::debug!(
        "Found {unique_count} unique track(s) in {play_count} play(s) on {date}",
        unique_count = unique_plays.len()
    );
    Ok(unique_plays)
}
