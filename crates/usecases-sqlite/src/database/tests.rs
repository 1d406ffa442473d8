// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::NonZeroU32;

use test_log::test;

use memorymix_storage_sqlite::connection::{Storage, pool::Config as PoolConfig};

use super::*;
use crate::tests::TestResult;

#[test]
fn provision_in_memory_database() -> TestResult<()> {
    let config = DatabaseConfig {
        connection: Storage::InMemory,
        pool: PoolConfig {
            max_size: NonZeroU32::MIN.saturating_add(3),
        },
        migrate_schema: true,
    };
    let pool = provision_database(&config)?;
    assert_eq!(1, pool.max_size());

    let mut connection = get_pooled_connection(&pool)?;
    let user_id = crate::user::resolve_or_create_lastfm_user(&mut connection, "alice")?;
    drop(connection);

    // The database survives returning the connection to the pool
    let mut connection = get_pooled_connection(&pool)?;
    assert_eq!(
        user_id,
        crate::user::resolve_or_create_lastfm_user(&mut connection, "alice")?
    );
    cleanse(&mut connection, true)?;

    Ok(())
}

#[test]
fn migrate_schema_is_idempotent() -> TestResult<()> {
    let mut connection = establish_connection(":memory:")?;
    migrate_schema(&mut connection)?;
    Ok(())
}
