// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// Owner of plays and memories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub lastfm_username: Option<String>,

    pub display_name: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UserInvalidity {
    LastfmUsernameEmpty,
}

impl Validate for User {
    type Invalidity = UserInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                self.lastfm_username
                    .as_ref()
                    .is_some_and(|username| username.trim().is_empty()),
                Self::Invalidity::LastfmUsernameEmpty,
            )
            .into()
    }
}
