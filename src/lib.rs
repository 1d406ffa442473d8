// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Photos with a soundtrack from your listening history.
//!
//! The domain model and the matching engine are always available.
//! Storage and use cases are enabled by features.

pub use memorymix_core::*;

#[cfg(feature = "json")]
pub mod json {
    pub use memorymix_core_json::*;
}

#[cfg(feature = "repo")]
pub mod repo {
    pub use memorymix_repo::*;

    #[cfg(feature = "sqlite")]
    pub use memorymix_repo_sqlite as sqlite;
}

#[cfg(feature = "usecases")]
pub mod usecases {
    pub use memorymix_usecases::*;

    #[cfg(feature = "sqlite")]
    pub use memorymix_usecases_sqlite as sqlite;
}

#[cfg(feature = "sqlite")]
pub use memorymix_storage_sqlite as storage;
