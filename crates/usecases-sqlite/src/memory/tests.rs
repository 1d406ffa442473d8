// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use test_log::test;

use memorymix_core::{
    ConfidenceScore, Memory, Photo, matching::Params, memory::MemoryUpdate,
    util::clock::UtcDateTimeMs,
};
use memorymix_repo::{
    Pagination, memory::RecordHeader, photo::RecordHeader as PhotoHeader, prelude::RepoError,
};
use memorymix_usecases::memory::NewMemory;

use crate::{Error, tests::*};

fn memory_at(title: &str, memory_date: UtcDateTimeMs) -> Memory {
    Memory {
        title: title.to_owned(),
        description: Some("Good times".to_owned()),
        memory_date,
    }
}

#[test]
fn create_one_memory_per_photo_with_best_match() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let user_id = fixture.create_user("alice")?;
    let plays = vec![
        new_play("far", minutes_before(170)),
        new_play("near", minutes_before(10)),
    ];
    crate::play::ingest(&mut fixture.connection, user_id, plays)?;

    let new_memory = NewMemory {
        memory: memory_at("Trip", T),
        photos: vec![new_photo("p1", T), new_photo("p2", minutes_after(1_000))],
    };
    let created = super::create(&mut fixture.connection, user_id, new_memory, &Params::new())?;
    assert_eq!(2, created.len());

    let (_, first) = super::load_one(&mut fixture.connection, user_id, created[0].memory_id)?;
    assert_eq!("Trip #1", first.title);
    assert_eq!(Some("Good times"), first.description.as_deref());
    assert_eq!(T, first.memory_date);
    let (_, second) = super::load_one(&mut fixture.connection, user_id, created[1].memory_id)?;
    assert_eq!("Trip #2", second.title);

    let mut photos = Vec::<(PhotoHeader, Photo)>::new();
    super::load_photos(
        &mut fixture.connection,
        user_id,
        created[0].memory_id,
        &mut photos,
    )?;
    assert_eq!(1, photos.len());
    assert_eq!(Some(photos[0].0.id), created[0].photo_id);

    // Only the first photo has a matching play
    let mapping_id = created[0].mapping_id.expect("auto-suggested mapping");
    assert!(created[1].mapping_id.is_none());
    let (_, record) = crate::mapping::load_one(&mut fixture.connection, user_id, mapping_id)?;
    assert!(record.mapping.is_auto_suggested);
    assert_eq!(
        Some(ConfidenceScore::new_unchecked(94)),
        record.mapping.confidence_score
    );
    let near = crate::play::load_played_between(
        &mut fixture.connection,
        user_id,
        minutes_before(10),
        minutes_before(10),
    )?;
    assert_eq!(near[0].0.id, record.play_id);

    Ok(())
}

#[test]
fn create_memory_with_single_photo_keeps_title() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let user_id = fixture.create_user("alice")?;
    let new_memory = NewMemory {
        memory: memory_at("Sunset", T),
        photos: vec![new_photo("p1", T)],
    };
    let created = super::create(&mut fixture.connection, user_id, new_memory, &Params::new())?;
    assert_eq!(1, created.len());
    assert!(created[0].photo_id.is_some());
    // No listening history
    assert!(created[0].mapping_id.is_none());
    let (_, memory) = super::load_one(&mut fixture.connection, user_id, created[0].memory_id)?;
    assert_eq!("Sunset", memory.title);
    Ok(())
}

#[test]
fn create_memory_without_photos() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let user_id = fixture.create_user("alice")?;
    let new_memory = NewMemory {
        memory: memory_at("Notes", T),
        photos: vec![],
    };
    let created = super::create(&mut fixture.connection, user_id, new_memory, &Params::new())?;
    assert_eq!(1, created.len());
    assert!(created[0].photo_id.is_none());
    assert!(created[0].mapping_id.is_none());
    Ok(())
}

#[test]
fn create_memory_ignores_max_suggestions() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let user_id = fixture.create_user("alice")?;
    crate::play::ingest(
        &mut fixture.connection,
        user_id,
        vec![new_play("near", minutes_before(10))],
    )?;
    let new_memory = NewMemory {
        memory: memory_at("Trip", T),
        photos: vec![new_photo("p1", T)],
    };
    let params = Params {
        window_hours: 3,
        max_suggestions: 0,
    };
    let created = super::create(&mut fixture.connection, user_id, new_memory, &params)?;
    assert_eq!(1, created.len());
    assert!(created[0].mapping_id.is_some());
    Ok(())
}

#[test]
fn create_memory_rejects_invalid_input() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let user_id = fixture.create_user("alice")?;
    let new_memory = NewMemory {
        memory: memory_at(" ", T),
        photos: vec![],
    };
    assert!(matches!(
        super::create(&mut fixture.connection, user_id, new_memory, &Params::new()),
        Err(Error::Input(_))
    ));
    let new_memory = NewMemory {
        memory: memory_at("Trip", T),
        photos: vec![new_photo("p1", T)],
    };
    let params = Params {
        window_hours: 0,
        ..Params::new()
    };
    assert!(matches!(
        super::create(&mut fixture.connection, user_id, new_memory, &params),
        Err(Error::Input(_))
    ));

    let mut memories = Vec::<(RecordHeader, Memory)>::new();
    super::load_all(
        &mut fixture.connection,
        user_id,
        &Pagination::new(),
        &mut memories,
    )?;
    assert!(memories.is_empty());
    Ok(())
}

#[test]
fn list_update_and_purge_memories() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let alice = fixture.create_user("alice")?;
    let bob = fixture.create_user("bob")?;
    let mut memory_ids = Vec::new();
    for (title, memory_date) in [
        ("middle", T),
        ("oldest", minutes_before(60)),
        ("newest", minutes_after(60)),
    ] {
        let new_memory = NewMemory {
            memory: memory_at(title, memory_date),
            photos: vec![],
        };
        let created = super::create(&mut fixture.connection, alice, new_memory, &Params::new())?;
        memory_ids.push(created[0].memory_id);
    }

    let mut memories = Vec::<(RecordHeader, Memory)>::new();
    super::load_all(
        &mut fixture.connection,
        alice,
        &Pagination::new(),
        &mut memories,
    )?;
    let titles = memories
        .iter()
        .map(|(_, memory)| memory.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(vec!["newest", "middle", "oldest"], titles);

    let id = memory_ids[0];
    let update = MemoryUpdate {
        title: Some("renamed".to_owned()),
        description: Some(None),
        memory_date: None,
    };
    let (_, updated) = super::update(&mut fixture.connection, alice, id, update)?;
    assert_eq!(
        Memory {
            title: "renamed".to_owned(),
            description: None,
            memory_date: T,
        },
        updated
    );
    assert_eq!(updated, super::load_one(&mut fixture.connection, alice, id)?.1);

    let update = MemoryUpdate {
        title: Some(String::new()),
        ..Default::default()
    };
    assert!(matches!(
        super::update(&mut fixture.connection, alice, id, update),
        Err(Error::Input(_))
    ));

    // Memories of other users are not accessible
    assert!(matches!(
        super::purge(&mut fixture.connection, bob, id),
        Err(Error::Repository(RepoError::NotFound))
    ));
    super::purge(&mut fixture.connection, alice, id)?;
    assert!(matches!(
        super::load_one(&mut fixture.connection, alice, id),
        Err(Error::Repository(RepoError::NotFound))
    ));

    Ok(())
}
