// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::{
    Connection as _,
    r2d2::{self, CustomizeConnection},
};

use memorymix_repo_sqlite::{DbConnection, initialize_database, run_migrations};
use memorymix_storage_sqlite::{
    DatabaseConfig, cleanse_database,
    connection::pool::{
        ConnectionPool, create_connection_pool_with_customizer, get_pooled_connection,
    },
};

use crate::{Error, Result, StorageError};

/// Configures each new connection of a pool.
#[derive(Debug)]
struct InitializeConnection;

impl CustomizeConnection<DbConnection, r2d2::Error> for InitializeConnection {
    fn on_acquire(&self, connection: &mut DbConnection) -> std::result::Result<(), r2d2::Error> {
        initialize_database(connection).map_err(r2d2::Error::QueryError)
    }
}

pub fn migrate_schema(connection: &mut DbConnection) -> Result<()> {
    for migration_version in run_migrations(connection)
        .map_err(|err| anyhow::anyhow!(err))
        .map_err(Error::DatabaseMigration)?
    {
        log::info!("Applied migration '{migration_version}'");
    }
    Ok(())
}

/// Open a single, initialized connection with the current schema.
pub fn establish_connection(database_url: &str) -> Result<DbConnection> {
    let mut connection = DbConnection::establish(database_url).map_err(StorageError::from)?;
    initialize_database(&mut connection).map_err(StorageError::from)?;
    migrate_schema(&mut connection)?;
    Ok(connection)
}

pub fn provision_database(config: &DatabaseConfig) -> Result<ConnectionPool> {
    let DatabaseConfig {
        connection,
        pool,
        migrate_schema: migrate,
    } = config;
    log::info!("Provisioning database {connection}");
    let connection_pool = create_connection_pool_with_customizer(
        connection,
        pool.max_size,
        Some(Box::new(InitializeConnection)),
    )?;
    if *migrate {
        log::info!("Migrating database schema");
        let mut connection = get_pooled_connection(&connection_pool)?;
        migrate_schema(&mut connection)?;
    }
    Ok(connection_pool)
}

pub fn cleanse(connection: &mut DbConnection, vacuum: bool) -> Result<()> {
    cleanse_database(connection, vacuum).map_err(Into::into)
}

#[cfg(test)]
mod tests;
