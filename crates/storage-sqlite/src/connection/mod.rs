// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, path::PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod pool;

const IN_MEMORY_STORAGE: &str = ":memory:";

/// Location of the database.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Storage {
    /// A transient database that only lives as long as its connection.
    InMemory,

    File { path: PathBuf },
}

impl Storage {
    #[must_use]
    pub const fn is_in_memory(&self) -> bool {
        matches!(self, Self::InMemory)
    }

    /// The connection string for diesel.
    ///
    /// Returns `None` for file paths that are not valid UTF-8.
    #[must_use]
    pub fn as_connection_str(&self) -> Option<&str> {
        match self {
            Self::InMemory => Some(IN_MEMORY_STORAGE),
            Self::File { path } => path.to_str(),
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => f.write_str(IN_MEMORY_STORAGE),
            Self::File { path } => write!(f, "{}", path.display()),
        }
    }
}
