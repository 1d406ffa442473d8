// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use test_log::test;

use memorymix_core::{
    Memory,
    matching::{MatchWindow, Params},
    util::clock::UtcDateTimeMs,
};
use memorymix_repo::{
    memory::{EntityRepo as _, RecordId as MemoryId},
    photo::EntityRepo as _,
    prelude::RepoError,
    user::RecordId as UserId,
};

use crate::{Error, RepoConnection, tests::*};

fn ingest_history(fixture: &mut DbFixture, user_id: UserId) -> TestResult<()> {
    let plays = vec![
        new_play("far", minutes_before(170)),
        new_play("near", minutes_before(10)),
        new_play("later", minutes_after(200)),
    ];
    crate::play::ingest(&mut fixture.connection, user_id, plays)?;
    Ok(())
}

#[test]
fn suggest_plays_for_photo() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let alice = fixture.create_user("alice")?;
    let bob = fixture.create_user("bob")?;
    ingest_history(&mut fixture, alice)?;
    crate::play::ingest(&mut fixture.connection, bob, vec![new_play("other", T)])?;

    let suggestions =
        super::suggest_plays_for_photo(&mut fixture.connection, alice, T, &Params::new())?;
    let results = suggestions
        .iter()
        .map(|suggestion| {
            (
                suggestion.track.1.track_name.as_str(),
                suggestion.confidence_score.value(),
                suggestion.time_difference_minutes,
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(vec![("near", 94, 10), ("far", 6, 170)], results);

    let best_only = Params {
        max_suggestions: 1,
        ..Params::new()
    };
    let suggestions =
        super::suggest_plays_for_photo(&mut fixture.connection, alice, T, &best_only)?;
    assert_eq!(1, suggestions.len());
    assert_eq!("near", suggestions[0].track.1.track_name);

    Ok(())
}

#[test]
fn suggest_plays_for_photo_rejects_invalid_params() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let user_id = fixture.create_user("alice")?;
    for params in [
        Params {
            window_hours: 0,
            max_suggestions: 5,
        },
        Params {
            window_hours: 3,
            max_suggestions: 0,
        },
    ] {
        assert!(matches!(
            super::suggest_plays_for_photo(&mut fixture.connection, user_id, T, &params),
            Err(Error::Input(_))
        ));
    }
    Ok(())
}

#[test]
fn suggest_plays_for_memory() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let alice = fixture.create_user("alice")?;
    let bob = fixture.create_user("bob")?;
    ingest_history(&mut fixture, alice)?;

    let memory_id = {
        let mut repo = RepoConnection::new(&mut fixture.connection);
        let memory = Memory {
            title: "Festival".to_owned(),
            description: None,
            memory_date: T,
        };
        let memory_id = repo.insert_memory(alice, T, &memory)?;
        repo.insert_photo(memory_id, T, &new_photo("first", T))?;
        repo.insert_photo(memory_id, T, &new_photo("second", minutes_after(100)))?;
        repo.insert_photo(memory_id, T, &new_photo("third", minutes_after(1_000)))?;
        memory_id
    };

    let batch = super::suggest_plays_for_memory(
        &mut fixture.connection,
        alice,
        memory_id,
        &Params::new(),
    )?;
    let results = batch
        .iter()
        .map(|photo_suggestions| {
            (
                photo_suggestions.photo.google_photo_id.as_str(),
                photo_suggestions
                    .suggestions
                    .iter()
                    .map(|suggestion| suggestion.track.1.track_name.as_str())
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        vec![
            ("first", vec!["near", "far"]),
            // The same play might be suggested for multiple photos
            ("second", vec!["later", "near"]),
            ("third", vec![]),
        ],
        results
    );

    // Memories of other users are not accessible
    assert!(matches!(
        super::suggest_plays_for_memory(&mut fixture.connection, bob, memory_id, &Params::new()),
        Err(Error::Repository(RepoError::NotFound))
    ));
    assert!(matches!(
        super::suggest_plays_for_memory(
            &mut fixture.connection,
            alice,
            MemoryId::new(memory_id.to_inner() + 1),
            &Params::new()
        ),
        Err(Error::Repository(RepoError::NotFound))
    ));

    Ok(())
}

#[test]
fn candidate_ranges_merge_overlapping_windows() -> TestResult<()> {
    let window = MatchWindow::from_hours(3)?;
    assert!(memorymix_usecases::suggest::candidate_ranges(Vec::<UtcDateTimeMs>::new(), window).is_empty());
    let ranges = memorymix_usecases::suggest::candidate_ranges(
        [minutes_after(1_000), T, minutes_after(100), minutes_after(360)],
        window,
    );
    assert_eq!(
        vec![
            (minutes_before(180), minutes_after(540)),
            (minutes_after(820), minutes_after(1_180)),
        ],
        ranges
    );
    Ok(())
}

#[test]
fn suggest_plays_for_memory_with_distant_photos() -> TestResult<()> {
    const DAY_MINUTES: i64 = 24 * 60;
    let mut fixture = DbFixture::new()?;
    let alice = fixture.create_user("alice")?;
    let plays = vec![
        new_play("first day", minutes_before(20)),
        new_play("in between", minutes_after(150 * DAY_MINUTES)),
        new_play("last day", minutes_after(365 * DAY_MINUTES + 30)),
    ];
    crate::play::ingest(&mut fixture.connection, alice, plays)?;

    let memory_id = {
        let mut repo = RepoConnection::new(&mut fixture.connection);
        let memory = Memory {
            title: "Year".to_owned(),
            description: None,
            memory_date: T,
        };
        let memory_id = repo.insert_memory(alice, T, &memory)?;
        repo.insert_photo(
            memory_id,
            T,
            &new_photo("last", minutes_after(365 * DAY_MINUTES)),
        )?;
        repo.insert_photo(memory_id, T, &new_photo("first", T))?;
        memory_id
    };

    let batch = super::suggest_plays_for_memory(
        &mut fixture.connection,
        alice,
        memory_id,
        &Params::new(),
    )?;
    let results = batch
        .iter()
        .map(|photo_suggestions| {
            (
                photo_suggestions.photo.google_photo_id.as_str(),
                photo_suggestions
                    .suggestions
                    .iter()
                    .map(|suggestion| suggestion.track.1.track_name.as_str())
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(2, results.len());
    assert!(results.contains(&("first", vec!["first day"])));
    assert!(results.contains(&("last", vec!["last day"])));
    Ok(())
}
