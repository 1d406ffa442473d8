// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::NonZeroU32;

use diesel::RunQueryDsl as _;
use test_log::test;

use super::{
    connection::pool::{create_connection_pool, get_pooled_connection},
    *,
};

#[test]
fn in_memory_pool_is_limited_to_a_single_connection() -> anyhow::Result<()> {
    let max_size = NonZeroU32::new(8).unwrap();
    let pool = create_connection_pool(&Storage::InMemory, max_size)?;
    assert_eq!(1, pool.max_size());
    Ok(())
}

#[test]
fn cleanse_in_memory_database() -> anyhow::Result<()> {
    let config = DatabaseConfig::default();
    assert!(config.connection.is_in_memory());
    let pool = create_connection_pool(&config.connection, config.pool.max_size)?;
    let mut connection = get_pooled_connection(&pool)?;
    cleanse_database(&mut connection, true)?;
    Ok(())
}

#[test]
fn vacuum_after_writes() -> anyhow::Result<()> {
    let pool = create_connection_pool(&Storage::InMemory, NonZeroU32::MIN)?;
    let mut connection = get_pooled_connection(&pool)?;
    diesel::dsl::sql_query("CREATE TABLE scratch (value INTEGER NOT NULL)")
        .execute(&mut *connection)?;
    let inserted = diesel::dsl::sql_query("INSERT INTO scratch (value) VALUES (1), (2)")
        .execute(&mut *connection)?;
    assert_eq!(2, inserted);
    vacuum_database(&mut connection)?;
    cleanse_database(&mut connection, true)?;
    Ok(())
}

#[test]
fn display_storage() {
    assert_eq!(":memory:", Storage::InMemory.to_string());
    let storage = Storage::File {
        path: "/tmp/memorymix.sqlite".into(),
    };
    assert_eq!("/tmp/memorymix.sqlite", storage.to_string());
    assert_eq!(Some("/tmp/memorymix.sqlite"), storage.as_connection_str());
}
