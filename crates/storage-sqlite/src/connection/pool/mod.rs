// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::NonZeroU32;

use anyhow::anyhow;
use diesel::{Connection as _, r2d2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;

use super::Storage;

pub type ConnectionManager = r2d2::ConnectionManager<diesel::SqliteConnection>;

pub type ConnectionPool = r2d2::Pool<ConnectionManager>;

pub type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// Prepares each new connection of a pool, e.g. by setting pragmas.
pub type ConnectionCustomizer =
    Box<dyn r2d2::CustomizeConnection<diesel::SqliteConnection, r2d2::Error>>;

pub fn create_connection_pool(storage: &Storage, max_size: NonZeroU32) -> Result<ConnectionPool> {
    create_connection_pool_with_customizer(storage, max_size, None)
}

pub fn create_connection_pool_with_customizer(
    storage: &Storage,
    max_size: NonZeroU32,
    customizer: Option<ConnectionCustomizer>,
) -> Result<ConnectionPool> {
    let connection_str = storage
        .as_connection_str()
        .ok_or_else(|| anyhow!("unsupported database path: {storage}"))?;
    // Every connection to an in-memory database opens a separate database.
    let max_size = if storage.is_in_memory() && max_size.get() > 1 {
        log::warn!("Limiting the connection pool size for an in-memory database to 1");
        NonZeroU32::MIN
    } else {
        max_size
    };
    // Establish a test connection before creating the connection pool to fail early.
    // If the given file is inaccessible r2d2 seems to do multiple retries and logs
    // errors instead of simply failing and returning an error immediately.
    std::mem::drop(diesel::SqliteConnection::establish(connection_str)?);
    // The test connection is dropped immediately without using it
    // and missing files should have been created after reaching
    // this point.
    let manager = ConnectionManager::new(connection_str);
    let mut builder = ConnectionPool::builder().max_size(max_size.get());
    if storage.is_in_memory() {
        // The database is gone when its only connection is closed
        builder = builder.idle_timeout(None).max_lifetime(None);
    }
    if let Some(customizer) = customizer {
        builder = builder.connection_customizer(customizer);
    }
    let pool = builder.build(manager)?;
    log::info!("Created connection pool of max. size {max_size} for {storage}");
    Ok(pool)
}

pub fn get_pooled_connection(pool: &ConnectionPool) -> Result<PooledConnection> {
    pool.get().map_err(Into::into)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub max_size: NonZeroU32,
}

impl Config {
    #[must_use]
    pub const fn single_connection() -> Self {
        Self {
            max_size: NonZeroU32::MIN,
        }
    }
}
