// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use test_log::test;

use memorymix_core::User;
use memorymix_repo::prelude::RepoError;

use crate::{Error, tests::*};

#[test]
fn resolve_or_create_lastfm_user() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let alice = fixture.create_user("alice")?;
    let bob = fixture.create_user("bob")?;
    assert_ne!(alice, bob);
    assert_eq!(alice, fixture.create_user("alice")?);

    let (_, user) = super::load_one(&mut fixture.connection, alice)?;
    assert_eq!(Some("alice"), user.lastfm_username.as_deref());

    Ok(())
}

#[test]
fn reject_empty_lastfm_username() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let user = User {
        lastfm_username: Some(" ".to_owned()),
        display_name: None,
    };
    assert!(matches!(
        super::create(&mut fixture.connection, user),
        Err(Error::Input(_))
    ));
    Ok(())
}

#[test]
fn update_and_purge_user() -> TestResult<()> {
    let mut fixture = DbFixture::new()?;
    let id = fixture.create_user("alice")?;
    let modified_user = User {
        lastfm_username: Some("alice".to_owned()),
        display_name: Some("Alice".to_owned()),
    };
    super::update(&mut fixture.connection, id, modified_user.clone())?;
    assert_eq!(modified_user, super::load_one(&mut fixture.connection, id)?.1);

    super::purge(&mut fixture.connection, id)?;
    assert!(matches!(
        super::load_one(&mut fixture.connection, id),
        Err(Error::Repository(RepoError::NotFound))
    ));

    Ok(())
}
